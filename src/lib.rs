//! # opt6502: a superoptimizer for 6502 machine code
//!
//! Given a declarative specification of input/output CPU-and-memory
//! behavior, this crate searches for the shortest (or fastest)
//! straight-line instruction sequence that realizes that behavior for
//! every legal input. It is not a compiler: it is a semantic-equivalence
//! code synthesizer over the NMOS 6502 instruction set.
//!
//! ## Architecture
//!
//! Four subsystems cooperate, in leaf-first dependency order:
//!
//! - A **cycle-accurate 6502 interpreter** ([`cpu`]) over a provenance
//!   tracking memory ([`memory`]), the ground truth for equivalence.
//! - A **candidate enumerator** ([`enumerator`]) that walks legal
//!   instruction sequences in length-then-lexicographic order with
//!   aggressive pruning.
//! - A **verification engine** ([`verifier`]) that expands the symbolic
//!   specification into concrete test vectors and certifies candidates
//!   against all of them.
//! - A **transformation cache** ([`cache`]) that memoizes the best known
//!   sequence per observed state transition so subsequences can be
//!   replaced compositionally.
//!
//! The [`optimizer`] module ties these together in a search loop with a
//!   wall-clock deadline and best-so-far tracking.
//!
//! ## Quick Start
//!
//! ```no_run
//! use opt6502::parser::parse_spec;
//! use opt6502::optimizer::{Optimizer, SearchOptions};
//! use std::time::Duration;
//!
//! let source = "
//! OPTIMIZE_FOR: size
//! CPU_OUT
//!     A: 0x00
//! FLAGS_OUT
//!     Z: 1
//!     N: 0
//! RUN: 0x1000
//! ";
//! let spec = parse_spec(source).unwrap();
//! let mut optimizer = Optimizer::new(spec, SearchOptions::default()).unwrap();
//! let outcome = optimizer.run(Duration::from_secs(60));
//! if let Some(solution) = outcome.best {
//!     println!("{} bytes", solution.bytes.len());
//! }
//! ```

pub mod addressing;
pub mod cache;
pub mod cpu;
pub mod disassembler;
pub mod enumerator;
pub mod formatter;
pub mod memory;
pub mod opcodes;
pub mod optimizer;
pub mod parser;
pub mod spec;
pub mod value;
pub mod verifier;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export the types most callers need
pub use addressing::AddressingMode;
pub use cpu::Cpu;
pub use memory::{Bus, FlatMemory, TrackedMemory};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use spec::OptimizationSpec;
pub use value::Value;

use thiserror::Error;

/// A fault raised while executing a candidate sequence.
///
/// Faults are values, not panics: the verification engine treats any
/// fault on any test vector as "candidate rejected" and the search
/// continues. The variants mirror the ways a candidate can misbehave.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A read of an address outside the declared input and output regions.
    #[error("read of ${addr:04X} outside the declared memory regions")]
    ReadViolation {
        /// The offending address.
        addr: u16,
    },

    /// A write to an address outside the declared output regions.
    #[error("write to ${addr:04X} outside the declared output regions")]
    WriteViolation {
        /// The offending address.
        addr: u16,
    },

    /// A write to an address that was previously read, without the
    /// address being declared in both input and output regions
    /// (the self-modifying-code rule).
    #[error("self-modifying write to ${addr:04X} not declared in both input and output regions")]
    SelfModifyViolation {
        /// The offending address.
        addr: u16,
    },

    /// Execution of an opcode classed unusable or unstable.
    #[error("opcode 0x{opcode:02X} is not executable")]
    UnusableOpcode {
        /// The offending opcode byte.
        opcode: u8,
    },

    /// The per-candidate instruction cap was reached.
    #[error("instruction limit of {limit} reached")]
    InstructionLimit {
        /// The cap that was hit.
        limit: usize,
    },

    /// Control flow left the candidate window without completing it.
    #[error("control flow escaped the candidate region at ${pc:04X}")]
    ControlEscape {
        /// Program counter at the point of escape.
        pc: u16,
    },
}

/// An error in the optimization specification itself.
///
/// Raised by the parser for malformed input and by spec validation for
/// violated structural invariants (overlapping regions, `SAME` in an
/// input context). These are fatal to the run, unlike [`Fault`]s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Lexical or syntactic error in the specification file.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based source line.
        line: usize,
        /// Human-readable description.
        message: String,
    },

    /// A value keyword used where it is not permitted (e.g. `SAME` in an
    /// input block).
    #[error("line {line}: {keyword} is only valid in output contexts")]
    OutputOnlyKeyword {
        /// 1-based source line.
        line: usize,
        /// The offending keyword.
        keyword: &'static str,
    },

    /// Two regions in the same direction overlap.
    #[error("memory regions ${first:04X} and ${second:04X} overlap")]
    OverlappingRegions {
        /// Start address of the earlier region.
        first: u16,
        /// Start address of the overlapping region.
        second: u16,
    },

    /// The specification never declared a run address.
    #[error("no RUN address specified")]
    MissingRunAddress,
}
