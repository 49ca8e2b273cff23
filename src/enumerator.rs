//! # Candidate Sequence Enumerator
//!
//! Produces candidate byte sequences in length-ascending order; within a
//! length, sequences come out in a fixed lexicographic order over
//! (opcode, operand) choices, so runs are reproducible.
//!
//! Operand bytes are not enumerated exhaustively: each addressing mode
//! draws from a representative pool. The pools are seeded from the
//! specification (zero-page and absolute slots come from the declared
//! memory regions, immediates from the exact values the outputs name
//! plus the boundary set), which collapses the operand space to the
//! values that can matter.
//!
//! Three static pruning rules drop sequences that provably cannot be
//! uniquely optimal:
//!
//! - all-NOP sequences;
//! - an instruction whose entire register/flag effect is overwritten by
//!   its successor without being read (e.g. `LDA #1; LDA #2`);
//! - a store whose target is stored to again with no intervening memory
//!   access (dead store).
//!
//! A per-length emission budget (default 10 000) bounds the batch for
//! each length; the cut is deterministic, keeping the earliest sequences
//! in enumeration order.

use std::collections::VecDeque;

use tracing::debug;

use crate::addressing::AddressingMode;
use crate::opcodes::{usable_opcodes, MemoryAccess, OpcodeMetadata, RegisterSet, OPCODE_TABLE};
use crate::spec::OptimizationSpec;
use crate::value::Value;

/// Operand pools and limits controlling enumeration.
#[derive(Debug, Clone)]
pub struct EnumeratorConfig {
    /// Opcodes eligible for enumeration, in ascending order.
    pub opcodes: Vec<u8>,
    /// Pool for immediate operands.
    pub immediate_values: Vec<u8>,
    /// Pool for zero-page (and zero-page-indexed, indirect) operands.
    pub zero_page_addresses: Vec<u8>,
    /// Pool for absolute (and absolute-indexed, indirect) operands.
    pub absolute_addresses: Vec<u16>,
    /// Pool for branch displacements.
    pub branch_offsets: Vec<i8>,
    /// Longest sequence, in bytes, that will be generated.
    pub max_length: usize,
    /// Soft cap on sequences emitted per length.
    pub per_length_budget: usize,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            opcodes: usable_opcodes(false),
            immediate_values: vec![0x00, 0x01, 0x7F, 0x80, 0xFF],
            zero_page_addresses: Vec::new(),
            absolute_addresses: Vec::new(),
            branch_offsets: vec![1, 2, 3, 4],
            max_length: 32,
            per_length_budget: 10_000,
        }
    }
}

impl EnumeratorConfig {
    /// Builds a config whose operand pools are seeded from the spec:
    /// declared region addresses become zero-page / absolute slots, and
    /// exact output values join the immediate pool.
    pub fn from_spec(spec: &OptimizationSpec, include_illegal: bool) -> Self {
        let mut config = EnumeratorConfig {
            opcodes: usable_opcodes(include_illegal),
            ..EnumeratorConfig::default()
        };

        let mut immediates = config.immediate_values.clone();
        for value in [
            spec.output_cpu.a,
            spec.output_cpu.x,
            spec.output_cpu.y,
            spec.output_cpu.sp,
        ] {
            if let Value::Exact(v) = value {
                immediates.push(v);
            }
        }

        let mut zero_page = Vec::new();
        let mut absolute = Vec::new();
        for region in spec.input_memory.iter().chain(spec.output_memory.iter()) {
            for (addr, value) in region.iter() {
                if addr < 0x100 {
                    zero_page.push(addr as u8);
                } else {
                    absolute.push(addr);
                }
                if let Value::Exact(v) = value {
                    immediates.push(v);
                }
            }
        }

        immediates.sort_unstable();
        immediates.dedup();
        zero_page.sort_unstable();
        zero_page.dedup();
        absolute.sort_unstable();
        absolute.dedup();

        config.immediate_values = immediates;
        config.zero_page_addresses = zero_page;
        config.absolute_addresses = absolute;
        config
    }
}

/// One instruction of a candidate under construction.
#[derive(Debug, Clone, Copy)]
struct Instr {
    opcode: u8,
    operands: [u8; 2],
    operand_len: u8,
}

impl Instr {
    fn meta(&self) -> &'static OpcodeMetadata {
        &OPCODE_TABLE[self.opcode as usize]
    }

    fn size(&self) -> usize {
        1 + self.operand_len as usize
    }

    /// The statically known store target, for stores through a
    /// non-indexed mode. Indexed stores depend on register state and
    /// are never treated as statically dead.
    fn static_store_addr(&self) -> Option<u16> {
        if self.meta().memory != MemoryAccess::Write {
            return None;
        }
        match self.meta().addressing_mode {
            AddressingMode::ZeroPage => Some(self.operands[0] as u16),
            AddressingMode::Absolute => {
                Some(self.operands[0] as u16 | (self.operands[1] as u16) << 8)
            }
            _ => None,
        }
    }

    fn push_bytes(&self, out: &mut Vec<u8>) {
        out.push(self.opcode);
        for i in 0..self.operand_len as usize {
            out.push(self.operands[i]);
        }
    }
}

/// Streaming enumerator over candidate byte sequences.
///
/// Implements [`Iterator`]; each item is a complete candidate. The
/// optimizer may shrink [`set_max_length`](Self::set_max_length)
/// mid-run once a solution bounds the useful search depth.
pub struct SequenceEnumerator {
    config: EnumeratorConfig,
    current_length: usize,
    buffer: VecDeque<Vec<u8>>,
    exhausted: bool,
}

impl SequenceEnumerator {
    /// Creates an enumerator over the given configuration.
    pub fn new(config: EnumeratorConfig) -> Self {
        Self {
            config,
            current_length: 0,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Lowers (or raises) the maximum sequence length. Sequences of the
    /// current batch that are already generated still stream out if they
    /// fit the new bound.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.config.max_length = max_length;
        if self.current_length > max_length {
            self.buffer.clear();
            self.exhausted = true;
        }
    }

    /// The length of sequences currently being generated.
    pub fn current_length(&self) -> usize {
        self.current_length
    }

    fn generate_batch(&mut self) {
        let mut sequences = Vec::new();
        let mut prefix: Vec<Instr> = Vec::new();
        let budget = self.config.per_length_budget;

        fill(
            &self.config,
            &mut prefix,
            self.current_length,
            budget,
            &mut sequences,
        );

        if sequences.len() >= budget {
            debug!(
                length = self.current_length,
                budget, "per-length budget reached, batch truncated"
            );
        }
        debug!(
            length = self.current_length,
            count = sequences.len(),
            "generated candidate batch"
        );

        self.buffer = sequences.into_iter().collect();
    }
}

impl Iterator for SequenceEnumerator {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        loop {
            if let Some(sequence) = self.buffer.pop_front() {
                return Some(sequence);
            }
            if self.exhausted {
                return None;
            }
            if self.current_length >= self.config.max_length {
                self.exhausted = true;
                return None;
            }
            self.current_length += 1;
            self.generate_batch();
        }
    }
}

/// Depth-first construction of all sequences of exactly
/// `remaining` more bytes. Returns false when the budget is exhausted
/// and generation should unwind.
fn fill(
    config: &EnumeratorConfig,
    prefix: &mut Vec<Instr>,
    remaining: usize,
    budget: usize,
    out: &mut Vec<Vec<u8>>,
) -> bool {
    if remaining == 0 {
        if is_all_nop(prefix) {
            return true;
        }
        let mut bytes = Vec::with_capacity(prefix.iter().map(Instr::size).sum());
        for instr in prefix.iter() {
            instr.push_bytes(&mut bytes);
        }
        out.push(bytes);
        return out.len() < budget;
    }

    for &opcode in &config.opcodes {
        let meta = &OPCODE_TABLE[opcode as usize];
        if meta.size_bytes as usize > remaining {
            continue;
        }

        let mut keep_going = true;
        for_each_operand(config, meta.addressing_mode, |operands, operand_len| {
            if !keep_going {
                return;
            }
            let instr = Instr {
                opcode,
                operands,
                operand_len,
            };
            if should_prune(prefix, &instr) {
                return;
            }
            prefix.push(instr);
            keep_going = fill(
                config,
                prefix,
                remaining - meta.size_bytes as usize,
                budget,
                out,
            );
            prefix.pop();
        });
        if !keep_going {
            return false;
        }
    }
    true
}

/// Invokes `f` with each operand choice for the mode, in pool order.
fn for_each_operand<F: FnMut([u8; 2], u8)>(
    config: &EnumeratorConfig,
    mode: AddressingMode,
    mut f: F,
) {
    match mode {
        AddressingMode::Implied | AddressingMode::Accumulator => f([0, 0], 0),
        AddressingMode::Immediate => {
            for &v in &config.immediate_values {
                f([v, 0], 1);
            }
        }
        AddressingMode::ZeroPage
        | AddressingMode::ZeroPageX
        | AddressingMode::ZeroPageY
        | AddressingMode::IndirectX
        | AddressingMode::IndirectY => {
            for &zp in &config.zero_page_addresses {
                f([zp, 0], 1);
            }
        }
        AddressingMode::Relative => {
            for &offset in &config.branch_offsets {
                f([offset as u8, 0], 1);
            }
        }
        AddressingMode::Absolute
        | AddressingMode::AbsoluteX
        | AddressingMode::AbsoluteY
        | AddressingMode::Indirect => {
            for &addr in &config.absolute_addresses {
                f([(addr & 0xFF) as u8, (addr >> 8) as u8], 2);
            }
        }
    }
}

fn is_all_nop(prefix: &[Instr]) -> bool {
    !prefix.is_empty()
        && prefix
            .iter()
            .all(|i| i.meta().operation == crate::opcodes::Operation::Nop)
}

fn should_prune(prefix: &[Instr], next: &Instr) -> bool {
    if let Some(prev) = prefix.last() {
        if is_dead_write_pair(prev.meta(), next.meta()) {
            return true;
        }
    }
    if has_dead_store(prefix, next) {
        return true;
    }
    false
}

/// True if `prev`'s entire architectural effect is overwritten by `next`
/// without being read, making `prev` dead in every completion.
fn is_dead_write_pair(prev: &OpcodeMetadata, next: &OpcodeMetadata) -> bool {
    // Memory writes and control transfers have effects beyond registers.
    if prev.memory == MemoryAccess::Write || prev.memory == MemoryAccess::ReadWrite {
        return false;
    }
    if is_control_flow(prev) || is_control_flow(next) {
        return false;
    }

    let prev_regs = strip_p(prev.writes);
    let next_regs = strip_p(next.writes);

    next_regs.contains(prev_regs)
        && next.flags_written.contains(prev.flags_written)
        && !next.reads_with_indexing().intersects(prev.writes)
}

fn is_control_flow(meta: &OpcodeMetadata) -> bool {
    use crate::opcodes::Operation::*;
    matches!(
        meta.operation,
        Bcc | Bcs | Beq | Bne | Bmi | Bpl | Bvc | Bvs | Jmp | Jsr | Rts | Rti | Brk
    )
}

fn strip_p(set: RegisterSet) -> RegisterSet {
    let mut out = RegisterSet::EMPTY;
    for reg in [RegisterSet::A, RegisterSet::X, RegisterSet::Y, RegisterSet::SP] {
        if set.contains(reg) {
            out = out.union(reg);
        }
    }
    out
}

/// True if appending `next` makes an earlier store to the same static
/// address dead: no memory access touched the interval in between.
fn has_dead_store(prefix: &[Instr], next: &Instr) -> bool {
    let Some(target) = next.static_store_addr() else {
        return false;
    };
    for earlier in prefix.iter().rev() {
        if earlier.meta().memory == MemoryAccess::None {
            if is_control_flow(earlier.meta()) {
                return false;
            }
            continue;
        }
        return earlier.static_store_addr() == Some(target);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::MemoryRegion;

    fn tiny_config(opcodes: Vec<u8>, max_length: usize) -> EnumeratorConfig {
        EnumeratorConfig {
            opcodes,
            immediate_values: vec![0x00, 0x01],
            zero_page_addresses: vec![0x80],
            absolute_addresses: vec![0x0200],
            branch_offsets: vec![2],
            max_length,
            per_length_budget: 100_000,
        }
    }

    #[test]
    fn test_length_ascending_order() {
        // SEC (1 byte) and LDA #imm (2 bytes)
        let e = SequenceEnumerator::new(tiny_config(vec![0x38, 0xA9], 2));
        let lengths: Vec<usize> = e.map(|s| s.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable();
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_no_duplicate_sequences() {
        let e = SequenceEnumerator::new(tiny_config(vec![0x38, 0x18, 0xA9, 0x85], 3));
        let all: Vec<Vec<u8>> = e.collect();
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn test_double_load_pruned() {
        // LDA #imm twice in a row is never emitted
        let e = SequenceEnumerator::new(tiny_config(vec![0xA9], 4));
        for seq in e {
            assert_ne!(seq.len(), 4, "LDA #a; LDA #b must be pruned: {seq:02X?}");
        }
    }

    #[test]
    fn test_flag_setup_not_pruned() {
        // CLC; LDA #imm is a real candidate: LDA does not touch carry
        let e = SequenceEnumerator::new(tiny_config(vec![0x18, 0xA9], 3));
        let found = e.into_iter().any(|s| s.len() == 3 && s[0] == 0x18 && s[1] == 0xA9);
        assert!(found, "CLC; LDA #imm must survive pruning");
    }

    #[test]
    fn test_clc_sec_pruned() {
        // CLC; SEC leaves only SEC's effect; the pair is pruned
        let e = SequenceEnumerator::new(tiny_config(vec![0x18, 0x38], 2));
        for seq in e {
            assert_ne!(seq, vec![0x18, 0x38]);
        }
    }

    #[test]
    fn test_dead_store_pruned() {
        // STA $80; STA $80 is dead; STA $80; LDA #0; STA $80 is not
        // pruned by the static rule only when a read intervenes, and
        // LDA #imm does not touch memory, so it is still dead.
        let e = SequenceEnumerator::new(tiny_config(vec![0x85, 0xA9], 6));
        for seq in e {
            assert_ne!(seq, vec![0x85, 0x80, 0x85, 0x80]);
            assert_ne!(seq, vec![0x85, 0x80, 0xA9, 0x00, 0x85, 0x80]);
        }
    }

    #[test]
    fn test_all_nop_pruned() {
        let e = SequenceEnumerator::new(tiny_config(vec![0xEA, 0x38], 2));
        let all: Vec<Vec<u8>> = e.collect();
        assert!(!all.contains(&vec![0xEA]));
        assert!(!all.contains(&vec![0xEA, 0xEA]));
        assert!(all.contains(&vec![0x38]));
    }

    #[test]
    fn test_budget_truncates_deterministically() {
        let mut config = tiny_config(vec![0xA9], 2);
        config.immediate_values = (0..=255).collect();
        config.per_length_budget = 10;
        let e = SequenceEnumerator::new(config.clone());
        let first: Vec<Vec<u8>> = e.collect();
        assert_eq!(first.len(), 10);

        let again: Vec<Vec<u8>> = SequenceEnumerator::new(config).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_pools_from_spec() {
        let mut spec = OptimizationSpec::default();
        spec.input_memory
            .push(MemoryRegion::new(0x80, vec![Value::Any]));
        spec.output_memory
            .push(MemoryRegion::new(0x0200, vec![Value::Exact(0x2A), Value::Any]));

        let config = EnumeratorConfig::from_spec(&spec, false);
        assert_eq!(config.zero_page_addresses, vec![0x80]);
        assert_eq!(config.absolute_addresses, vec![0x0200, 0x0201]);
        assert!(config.immediate_values.contains(&0x2A));
        assert_eq!(config.opcodes.len(), 151);
    }

    #[test]
    fn test_shrinking_max_length_stops_enumeration() {
        let mut e = SequenceEnumerator::new(tiny_config(vec![0x38, 0xA9], 8));
        let first = e.next().unwrap();
        assert_eq!(first.len(), 1);
        e.set_max_length(1);
        // Only length-1 sequences remain
        for seq in e {
            assert_eq!(seq.len(), 1);
        }
    }
}
