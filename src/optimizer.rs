//! # Optimizer Driver
//!
//! The top-level search loop. Candidates stream from the enumerator in
//! length-then-lexicographic order; each is offered to the cache
//! rewriter for a possibly shorter equivalent, then certified by the
//! verification engine. For goal=size the first verifying candidate is
//! optimal (enumeration is length-monotonic) and the search stops; for
//! goal=speed the search continues with the length bound shrunk to
//! `best_size + 4`.
//!
//! The loop checks the wall-clock deadline and the cooperative
//! cancellation flag between candidates. The core is single-threaded by
//! design: one enumerator, one cache, one search frontier. Parallel
//! deployments partition the enumeration externally and share nothing
//! but the cancellation flag and (optionally) the cache behind a lock;
//! the [`ProgressListener`] bound is `Send + Sync` so one listener can
//! serve multiple shards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::cache::{StateProjection, TransformationCache, TransformationKey};
use crate::enumerator::{EnumeratorConfig, SequenceEnumerator};
use crate::opcodes::OPCODE_TABLE;
use crate::spec::{Goal, OptimizationSpec};
use crate::verifier::{Verifier, VerifyOptions};
use crate::SpecError;

/// Tunable knobs for one optimization run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Enumerate the stable undocumented opcodes too.
    pub include_illegal: bool,
    /// Restrict enumeration to this opcode set (None = every usable
    /// opcode under the legality policy).
    pub opcode_filter: Option<Vec<u8>>,
    /// Initial maximum candidate length in bytes.
    pub max_length: usize,
    /// Soft cap on candidates per length.
    pub per_length_budget: usize,
    /// Verification knobs.
    pub verify: VerifyOptions,
    /// Hard cap on distinct cache keys.
    pub cache_capacity: usize,
    /// Candidates between progress callbacks.
    pub progress_interval: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_illegal: false,
            opcode_filter: None,
            max_length: 32,
            per_length_budget: 10_000,
            verify: VerifyOptions::default(),
            cache_capacity: 1 << 20,
            progress_interval: 1000,
        }
    }
}

/// A verified solution and its costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The instruction bytes.
    pub bytes: Vec<u8>,
    /// Cycle cost on the base vector.
    pub cycles: u64,
}

/// Counters published to progress listeners.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressReport {
    /// Candidates offered to verification so far.
    pub sequences_tested: usize,
    /// Candidates that verified.
    pub valid_found: usize,
    /// Distinct transitions in the cache.
    pub cache_entries: usize,
    /// Length currently being enumerated.
    pub current_length: usize,
}

/// Callback surface for search progress. Implementations must be
/// thread-safe; a listener may be shared across search shards.
pub trait ProgressListener: Send + Sync {
    /// A new best solution was found.
    fn on_new_best(&self, _solution: &Solution, _report: &ProgressReport) {}

    /// Periodic heartbeat.
    fn on_progress(&self, _report: &ProgressReport) {}
}

/// Result of a search run.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The best verified solution, if any was found.
    pub best: Option<Solution>,
    /// Total candidates offered to verification.
    pub sequences_tested: usize,
    /// Candidates that verified.
    pub valid_found: usize,
    /// True if the deadline cut the search short.
    pub timed_out: bool,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// The search driver tying enumerator, verifier and cache together.
pub struct Optimizer {
    spec: OptimizationSpec,
    options: SearchOptions,
    verifier: Verifier,
    cache: TransformationCache,
    listener: Option<Box<dyn ProgressListener>>,
    cancel: Arc<AtomicBool>,
}

impl Optimizer {
    /// Validates the spec and prepares a search. Vector generation
    /// happens here; a structurally invalid spec is fatal.
    pub fn new(spec: OptimizationSpec, options: SearchOptions) -> Result<Self, SpecError> {
        spec.validate()?;
        let verifier = Verifier::with_options(spec.clone(), options.verify.clone());
        let cache = TransformationCache::new(options.cache_capacity);
        Ok(Self {
            spec,
            options,
            verifier,
            cache,
            listener: None,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Installs a progress listener.
    pub fn set_progress_listener(&mut self, listener: Box<dyn ProgressListener>) {
        self.listener = Some(listener);
    }

    /// The cooperative cancellation flag. Setting it stops the search
    /// at the next candidate boundary.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// The verifier backing this search.
    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    /// Runs the search until optimality (goal=size), exhaustion, the
    /// deadline, or cancellation. Returns the best solution found,
    /// which may be none.
    pub fn run(&mut self, timeout: Duration) -> SearchOutcome {
        let start = Instant::now();
        let deadline = start + timeout;
        let for_size = self.spec.goal == Goal::Size;

        self.cache.clear();

        let mut config = EnumeratorConfig::from_spec(&self.spec, self.options.include_illegal);
        if let Some(filter) = &self.options.opcode_filter {
            config.opcodes = filter.clone();
        }
        config.max_length = self.options.max_length;
        config.per_length_budget = self.options.per_length_budget;
        let mut enumerator = SequenceEnumerator::new(config);

        info!(
            goal = ?self.spec.goal,
            run_address = self.spec.run_address,
            "starting search"
        );

        let mut report = ProgressReport::default();
        let mut best: Option<Solution> = None;
        let mut best_metric = u64::MAX;
        let mut timed_out = false;

        while let Some(candidate) = enumerator.next() {
            if self.cancel.load(Ordering::Relaxed) {
                break;
            }
            if Instant::now() > deadline {
                timed_out = true;
                break;
            }

            report.current_length = enumerator.current_length();
            report.sequences_tested += 1;

            let candidate = self.rewrite_with_cache(candidate, for_size);

            if self.verifier.verify(&candidate) {
                report.valid_found += 1;

                let Some(observation) = self.verifier.observe(&candidate) else {
                    continue;
                };
                let metric = if for_size {
                    candidate.len() as u64
                } else {
                    observation.cycles
                };

                if metric < best_metric {
                    best_metric = metric;
                    let solution = Solution {
                        bytes: candidate.clone(),
                        cycles: observation.cycles,
                    };
                    info!(
                        size = solution.bytes.len(),
                        cycles = solution.cycles,
                        tested = report.sequences_tested,
                        "new best solution"
                    );
                    if let Some(listener) = &self.listener {
                        listener.on_new_best(&solution, &report);
                    }
                    best = Some(solution);

                    if for_size {
                        // Enumeration is length-monotonic: the first
                        // verifying candidate is size-optimal.
                        break;
                    }
                    enumerator.set_max_length(candidate.len() + 4);
                }

                if let Some(key) = self.transformation_key(&candidate) {
                    self.cache.insert(key, &candidate, observation.cycles);
                    report.cache_entries = self.cache.len();
                }
            }

            if report.sequences_tested % self.options.progress_interval == 0 {
                if let Some(listener) = &self.listener {
                    listener.on_progress(&report);
                }
            }
        }

        report.cache_entries = self.cache.len();
        if let Some(listener) = &self.listener {
            listener.on_progress(&report);
        }

        let elapsed = start.elapsed();
        info!(
            tested = report.sequences_tested,
            valid = report.valid_found,
            timed_out,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        SearchOutcome {
            best,
            sequences_tested: report.sequences_tested,
            valid_found: report.valid_found,
            timed_out,
            elapsed,
        }
    }

    /// Offers every contiguous subspan of the candidate to the cache
    /// and substitutes any strictly better replacement, re-verifying
    /// the rewritten whole before adopting it. Iterates to fixpoint
    /// (bounded).
    fn rewrite_with_cache(&mut self, candidate: Vec<u8>, for_size: bool) -> Vec<u8> {
        let mut current = candidate;
        if self.cache.is_empty() {
            return current;
        }

        for _ in 0..8 {
            let boundaries = instruction_boundaries(&current);
            if boundaries.len() <= 2 {
                return current;
            }

            let mut improved = false;
            'scan: for i in 0..boundaries.len() - 1 {
                for j in (i + 1..boundaries.len()).rev() {
                    let (start, end) = (boundaries[i], boundaries[j]);
                    if end - start <= 2 || (start == 0 && end == current.len()) {
                        continue;
                    }

                    let subspan = &current[start..end];
                    let Some(subkey) = self.transformation_key(subspan) else {
                        continue;
                    };
                    let replacement = match self.cache.find_optimal(&subkey, for_size) {
                        Some(entry) if entry.bytes.len() < end - start => entry.bytes.clone(),
                        _ => continue,
                    };

                    let mut rewritten =
                        Vec::with_capacity(current.len() - (end - start) + replacement.len());
                    rewritten.extend_from_slice(&current[..start]);
                    rewritten.extend_from_slice(&replacement);
                    rewritten.extend_from_slice(&current[end..]);

                    // A subspan projection can be incomplete; only a
                    // full re-verification makes the substitution safe.
                    if self.verifier.verify(&rewritten) {
                        debug!(
                            from = end - start,
                            to = replacement.len(),
                            "cache rewrite shrank a subspan"
                        );
                        current = rewritten;
                        improved = true;
                        break 'scan;
                    }
                }
            }

            if !improved {
                break;
            }
        }

        current
    }

    /// Builds the cache key for a sequence from its observed behavior
    /// on the base vector. The input projection carries the full
    /// register file plus every memory cell the sequence read (with its
    /// pre-execution value); the output projection carries the final
    /// registers plus every written cell.
    fn transformation_key(&self, sequence: &[u8]) -> Option<TransformationKey> {
        let observation = self.verifier.observe(sequence)?;
        let base = self.verifier.vectors().first()?;

        let reads: Vec<(u16, u8)> = observation
            .reads
            .iter()
            .map(|&addr| (addr, base.memory_at(addr)))
            .collect();

        let input = StateProjection::from_cpu(&base.cpu).with_memory(&reads);
        let output =
            StateProjection::from_cpu(&observation.final_cpu).with_memory(&observation.writes);
        Some(TransformationKey::new(input, output))
    }
}

/// Instruction start offsets within the sequence, plus the end offset.
fn instruction_boundaries(sequence: &[u8]) -> Vec<usize> {
    let mut boundaries = vec![0];
    let mut pos = 0;
    while pos < sequence.len() {
        let size = OPCODE_TABLE[sequence[pos] as usize].size_bytes as usize;
        pos += size;
        if pos <= sequence.len() {
            boundaries.push(pos);
        } else {
            break;
        }
    }
    boundaries
}

/// Progress listener that logs through `tracing`.
pub struct TracingProgressListener;

impl ProgressListener for TracingProgressListener {
    fn on_new_best(&self, solution: &Solution, report: &ProgressReport) {
        let bytes = solution
            .bytes
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        info!(
            size = solution.bytes.len(),
            cycles = solution.cycles,
            tested = report.sequences_tested,
            bytes = %bytes,
            "new best"
        );
    }

    fn on_progress(&self, report: &ProgressReport) {
        debug!(
            tested = report.sequences_tested,
            valid = report.valid_found,
            cache = report.cache_entries,
            length = report.current_length,
            "search progress"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::MemoryRegion;
    use crate::value::Value;

    #[test]
    fn test_instruction_boundaries() {
        // LDA #$00 (2) ; STA $0200 (3) ; SEC (1)
        let seq = [0xA9, 0x00, 0x8D, 0x00, 0x02, 0x38];
        assert_eq!(instruction_boundaries(&seq), vec![0, 2, 5, 6]);
    }

    #[test]
    fn test_size_search_finds_sec() {
        let mut spec = OptimizationSpec::default();
        spec.run_address = 0x1000;
        spec.output_flags.c = Value::Exact(1);

        let mut optimizer = Optimizer::new(spec, SearchOptions::default()).unwrap();
        let outcome = optimizer.run(Duration::from_secs(30));

        let best = outcome.best.expect("SEC must be found");
        assert_eq!(best.bytes, vec![0x38]);
        assert!(!outcome.timed_out);
    }

    #[test]
    fn test_cancel_stops_search() {
        let mut spec = OptimizationSpec::default();
        spec.run_address = 0x1000;
        // Unsatisfiable: Z=1 and N=1 with A=0 exact
        spec.output_cpu.a = Value::Exact(0x00);
        spec.output_flags.n = Value::Exact(1);

        let mut optimizer = Optimizer::new(spec, SearchOptions::default()).unwrap();
        optimizer.cancel_flag().store(true, Ordering::Relaxed);
        let outcome = optimizer.run(Duration::from_secs(30));
        assert!(outcome.best.is_none());
        assert!(outcome.sequences_tested <= 1);
    }

    #[test]
    fn test_invalid_spec_is_fatal() {
        let mut spec = OptimizationSpec::default();
        spec.input_memory = vec![
            MemoryRegion::new(0x80, vec![Value::Any; 2]),
            MemoryRegion::new(0x81, vec![Value::Any]),
        ];
        assert!(Optimizer::new(spec, SearchOptions::default()).is_err());
    }
}
