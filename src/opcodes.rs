//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table, the single source of truth for all
//! 6502 instruction information: mnemonic, dispatch tags (operation and
//! addressing mode), base cycle cost, encoded size, register read/write
//! sets, data-memory discipline, and legality class.
//!
//! The table covers:
//! - **151 documented instructions** - official NMOS 6502 opcodes
//! - **the stable undocumented opcodes** - LAX, SAX, DCP, ISB, SLO, RLA,
//!   SRE, RRA and the extra NOP encodings, enumerated only on request
//! - **unstable and jamming opcodes** - marked [`Legality::Unstable`] /
//!   [`Legality::Unusable`] and never executed or enumerated
//!
//! Cycle costs are the NMOS base values; the interpreter adds the
//! branch-taken, branch-page-cross and read-page-cross penalties at
//! execution time (the `page_penalty` flag marks eligible opcodes).

use crate::addressing::AddressingMode;

/// Set of CPU registers an instruction reads or writes.
///
/// A compact bitset over A, X, Y, SP and the status register P. Used by
/// the enumerator's pruning rules (a register written twice with no
/// intervening read makes the first write dead) and by the cache's
/// projection bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterSet(u8);

impl RegisterSet {
    /// The empty set.
    pub const EMPTY: RegisterSet = RegisterSet(0);
    /// Accumulator.
    pub const A: RegisterSet = RegisterSet(1 << 0);
    /// X index register.
    pub const X: RegisterSet = RegisterSet(1 << 1);
    /// Y index register.
    pub const Y: RegisterSet = RegisterSet(1 << 2);
    /// Stack pointer.
    pub const SP: RegisterSet = RegisterSet(1 << 3);
    /// Status register (any flag).
    pub const P: RegisterSet = RegisterSet(1 << 4);

    /// Union of two sets.
    pub const fn union(self, other: RegisterSet) -> RegisterSet {
        RegisterSet(self.0 | other.0)
    }

    /// True if every register in `other` is also in `self`.
    pub const fn contains(self, other: RegisterSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the two sets share at least one register.
    pub const fn intersects(self, other: RegisterSet) -> bool {
        self.0 & other.0 != 0
    }

    /// True if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Set of status flags an instruction writes.
///
/// Finer-grained than [`RegisterSet::P`]: the pruning rules need to know
/// *which* flags an instruction clobbers before they may call an earlier
/// flag write dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet(u8);

impl FlagSet {
    /// The empty set.
    pub const EMPTY: FlagSet = FlagSet(0);
    /// Carry.
    pub const C: FlagSet = FlagSet(1 << 0);
    /// Zero.
    pub const Z: FlagSet = FlagSet(1 << 1);
    /// Interrupt disable.
    pub const I: FlagSet = FlagSet(1 << 2);
    /// Decimal mode.
    pub const D: FlagSet = FlagSet(1 << 3);
    /// Break.
    pub const B: FlagSet = FlagSet(1 << 4);
    /// Overflow.
    pub const V: FlagSet = FlagSet(1 << 5);
    /// Negative.
    pub const N: FlagSet = FlagSet(1 << 6);
    /// Every flag (PLP and RTI).
    pub const ALL: FlagSet = FlagSet(0x7F);

    /// Union of two sets.
    pub const fn union(self, other: FlagSet) -> FlagSet {
        FlagSet(self.0 | other.0)
    }

    /// True if every flag in `other` is also in `self`.
    pub const fn contains(self, other: FlagSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Operation tag dispatched by the interpreter.
///
/// Together with [`AddressingMode`] this forms the tagged pair the
/// interpreter matches on: the mode resolves the effective address, the
/// operation consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    // Stable undocumented compositions
    Lax, Sax, Dcp, Isb, Slo, Rla, Sre, Rra,
    /// Jams the processor (KIL) or is too unstable to model. Executing
    /// one of these faults.
    Jam,
}

/// Legality class of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Legality {
    /// Documented NMOS 6502 instruction.
    Legal,
    /// Undocumented but stable; enumerated only when the search options
    /// ask for illegal opcodes.
    Illegal,
    /// Undocumented with analog or processor-revision-dependent behavior.
    /// Never executed or enumerated.
    Unstable,
    /// Jams the processor. Never executed or enumerated.
    Unusable,
}

/// Data-memory access discipline of an opcode.
///
/// Describes accesses to operand memory (including the stack), not the
/// instruction-stream fetch of opcode and operand bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryAccess {
    /// No data-memory access (implied, accumulator, immediate, relative).
    None,
    /// Reads the addressed byte (loads, ALU reads, pulls).
    Read,
    /// Writes the addressed byte (stores, pushes).
    Write,
    /// Read-modify-write (shifts and INC/DEC on memory, BRK).
    ReadWrite,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use opt6502::opcodes::{OPCODE_TABLE, Legality};
/// use opt6502::addressing::AddressingMode;
///
/// // LDA immediate
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.legality, Legality::Legal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("LDA", "STA", "KIL", ...).
    pub mnemonic: &'static str,

    /// Operation tag the interpreter dispatches on.
    pub operation: Operation,

    /// Addressing mode for this encoding.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost before taken-branch and page-cross penalties.
    pub base_cycles: u8,

    /// Total instruction size in bytes, consistent with the mode.
    pub size_bytes: u8,

    /// Legality class. Unusable and unstable opcodes fault on execution.
    pub legality: Legality,

    /// Registers the operation reads.
    pub reads: RegisterSet,

    /// Registers the operation writes.
    pub writes: RegisterSet,

    /// Data-memory discipline.
    pub memory: MemoryAccess,

    /// Whether the read page-cross penalty applies to this opcode.
    pub page_penalty: bool,

    /// The individual status flags the operation writes.
    pub flags_written: FlagSet,
}

impl OpcodeMetadata {
    /// True if this opcode may be executed at all.
    pub fn is_executable(&self) -> bool {
        !matches!(self.legality, Legality::Unstable | Legality::Unusable)
    }

    /// Registers the instruction consumes, including the index register
    /// its addressing mode reads. The `reads` field alone describes the
    /// operation; indexed modes additionally depend on X or Y.
    pub fn reads_with_indexing(&self) -> RegisterSet {
        let index = match self.addressing_mode {
            AddressingMode::ZeroPageX
            | AddressingMode::AbsoluteX
            | AddressingMode::IndirectX => RegisterSet::X,
            AddressingMode::ZeroPageY
            | AddressingMode::AbsoluteY
            | AddressingMode::IndirectY => RegisterSet::Y,
            _ => RegisterSet::EMPTY,
        };
        self.reads.union(index)
    }
}

const fn entry(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    legality: Legality,
    reads: RegisterSet,
    writes: RegisterSet,
    memory: MemoryAccess,
    page_penalty: bool,
    flags_written: FlagSet,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
        size_bytes: addressing_mode.instruction_size(),
        legality,
        reads,
        writes,
        memory,
        page_penalty,
        flags_written,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte.
/// Initialized at process start and never mutated.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 0x00 */ entry("BRK", Operation::Brk, AddressingMode::Implied, 7, Legality::Legal, RegisterSet::SP.union(RegisterSet::P), RegisterSet::SP.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::EMPTY),
    /* 0x01 */ entry("ORA", Operation::Ora, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x02 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x03 */ entry("SLO", Operation::Slo, AddressingMode::IndirectX, 8, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x04 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPage, 3, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x05 */ entry("ORA", Operation::Ora, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x06 */ entry("ASL", Operation::Asl, AddressingMode::ZeroPage, 5, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x07 */ entry("SLO", Operation::Slo, AddressingMode::ZeroPage, 5, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x08 */ entry("PHP", Operation::Php, AddressingMode::Implied, 3, Legality::Legal, RegisterSet::P.union(RegisterSet::SP), RegisterSet::SP, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x09 */ entry("ORA", Operation::Ora, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x0A */ entry("ASL", Operation::Asl, AddressingMode::Accumulator, 2, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x0B */ entry("ANC", Operation::Jam, AddressingMode::Immediate, 2, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x0C */ entry("NOP", Operation::Nop, AddressingMode::Absolute, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x0D */ entry("ORA", Operation::Ora, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x0E */ entry("ASL", Operation::Asl, AddressingMode::Absolute, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x0F */ entry("SLO", Operation::Slo, AddressingMode::Absolute, 6, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x10 */ entry("BPL", Operation::Bpl, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x11 */ entry("ORA", Operation::Ora, AddressingMode::IndirectY, 5, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x12 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x13 */ entry("SLO", Operation::Slo, AddressingMode::IndirectY, 8, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x14 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x15 */ entry("ORA", Operation::Ora, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x16 */ entry("ASL", Operation::Asl, AddressingMode::ZeroPageX, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x17 */ entry("SLO", Operation::Slo, AddressingMode::ZeroPageX, 6, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x18 */ entry("CLC", Operation::Clc, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::None, false, FlagSet::C),
    /* 0x19 */ entry("ORA", Operation::Ora, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x1A */ entry("NOP", Operation::Nop, AddressingMode::Implied, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x1B */ entry("SLO", Operation::Slo, AddressingMode::AbsoluteY, 7, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x1C */ entry("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, true, FlagSet::EMPTY),
    /* 0x1D */ entry("ORA", Operation::Ora, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x1E */ entry("ASL", Operation::Asl, AddressingMode::AbsoluteX, 7, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x1F */ entry("SLO", Operation::Slo, AddressingMode::AbsoluteX, 7, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x20 */ entry("JSR", Operation::Jsr, AddressingMode::Absolute, 6, Legality::Legal, RegisterSet::SP, RegisterSet::SP, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x21 */ entry("AND", Operation::And, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x22 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x23 */ entry("RLA", Operation::Rla, AddressingMode::IndirectX, 8, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x24 */ entry("BIT", Operation::Bit, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::V)),
    /* 0x25 */ entry("AND", Operation::And, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x26 */ entry("ROL", Operation::Rol, AddressingMode::ZeroPage, 5, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x27 */ entry("RLA", Operation::Rla, AddressingMode::ZeroPage, 5, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x28 */ entry("PLP", Operation::Plp, AddressingMode::Implied, 4, Legality::Legal, RegisterSet::SP, RegisterSet::SP.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::ALL),
    /* 0x29 */ entry("AND", Operation::And, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x2A */ entry("ROL", Operation::Rol, AddressingMode::Accumulator, 2, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x2B */ entry("ANC", Operation::Jam, AddressingMode::Immediate, 2, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x2C */ entry("BIT", Operation::Bit, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::V)),
    /* 0x2D */ entry("AND", Operation::And, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x2E */ entry("ROL", Operation::Rol, AddressingMode::Absolute, 6, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x2F */ entry("RLA", Operation::Rla, AddressingMode::Absolute, 6, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x30 */ entry("BMI", Operation::Bmi, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x31 */ entry("AND", Operation::And, AddressingMode::IndirectY, 5, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x32 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x33 */ entry("RLA", Operation::Rla, AddressingMode::IndirectY, 8, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x34 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x35 */ entry("AND", Operation::And, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x36 */ entry("ROL", Operation::Rol, AddressingMode::ZeroPageX, 6, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x37 */ entry("RLA", Operation::Rla, AddressingMode::ZeroPageX, 6, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x38 */ entry("SEC", Operation::Sec, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::None, false, FlagSet::C),
    /* 0x39 */ entry("AND", Operation::And, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x3A */ entry("NOP", Operation::Nop, AddressingMode::Implied, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x3B */ entry("RLA", Operation::Rla, AddressingMode::AbsoluteY, 7, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x3C */ entry("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, true, FlagSet::EMPTY),
    /* 0x3D */ entry("AND", Operation::And, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x3E */ entry("ROL", Operation::Rol, AddressingMode::AbsoluteX, 7, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x3F */ entry("RLA", Operation::Rla, AddressingMode::AbsoluteX, 7, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x40 */ entry("RTI", Operation::Rti, AddressingMode::Implied, 6, Legality::Legal, RegisterSet::SP, RegisterSet::SP.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::ALL),
    /* 0x41 */ entry("EOR", Operation::Eor, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x42 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x43 */ entry("SRE", Operation::Sre, AddressingMode::IndirectX, 8, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x44 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPage, 3, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x45 */ entry("EOR", Operation::Eor, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x46 */ entry("LSR", Operation::Lsr, AddressingMode::ZeroPage, 5, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x47 */ entry("SRE", Operation::Sre, AddressingMode::ZeroPage, 5, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x48 */ entry("PHA", Operation::Pha, AddressingMode::Implied, 3, Legality::Legal, RegisterSet::A.union(RegisterSet::SP), RegisterSet::SP, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x49 */ entry("EOR", Operation::Eor, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x4A */ entry("LSR", Operation::Lsr, AddressingMode::Accumulator, 2, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x4B */ entry("ALR", Operation::Jam, AddressingMode::Immediate, 2, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x4C */ entry("JMP", Operation::Jmp, AddressingMode::Absolute, 3, Legality::Legal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x4D */ entry("EOR", Operation::Eor, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x4E */ entry("LSR", Operation::Lsr, AddressingMode::Absolute, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x4F */ entry("SRE", Operation::Sre, AddressingMode::Absolute, 6, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x50 */ entry("BVC", Operation::Bvc, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x51 */ entry("EOR", Operation::Eor, AddressingMode::IndirectY, 5, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x52 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x53 */ entry("SRE", Operation::Sre, AddressingMode::IndirectY, 8, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x54 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x55 */ entry("EOR", Operation::Eor, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x56 */ entry("LSR", Operation::Lsr, AddressingMode::ZeroPageX, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x57 */ entry("SRE", Operation::Sre, AddressingMode::ZeroPageX, 6, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x58 */ entry("CLI", Operation::Cli, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::None, false, FlagSet::I),
    /* 0x59 */ entry("EOR", Operation::Eor, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x5A */ entry("NOP", Operation::Nop, AddressingMode::Implied, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x5B */ entry("SRE", Operation::Sre, AddressingMode::AbsoluteY, 7, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x5C */ entry("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, true, FlagSet::EMPTY),
    /* 0x5D */ entry("EOR", Operation::Eor, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0x5E */ entry("LSR", Operation::Lsr, AddressingMode::AbsoluteX, 7, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x5F */ entry("SRE", Operation::Sre, AddressingMode::AbsoluteX, 7, Legality::Illegal, RegisterSet::A, RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x60 */ entry("RTS", Operation::Rts, AddressingMode::Implied, 6, Legality::Legal, RegisterSet::SP, RegisterSet::SP, MemoryAccess::Read, false, FlagSet::EMPTY),
    /* 0x61 */ entry("ADC", Operation::Adc, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x62 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x63 */ entry("RRA", Operation::Rra, AddressingMode::IndirectX, 8, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x64 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPage, 3, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x65 */ entry("ADC", Operation::Adc, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x66 */ entry("ROR", Operation::Ror, AddressingMode::ZeroPage, 5, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x67 */ entry("RRA", Operation::Rra, AddressingMode::ZeroPage, 5, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x68 */ entry("PLA", Operation::Pla, AddressingMode::Implied, 4, Legality::Legal, RegisterSet::SP, RegisterSet::A.union(RegisterSet::SP.union(RegisterSet::P)), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x69 */ entry("ADC", Operation::Adc, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x6A */ entry("ROR", Operation::Ror, AddressingMode::Accumulator, 2, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x6B */ entry("ARR", Operation::Jam, AddressingMode::Immediate, 2, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x6C */ entry("JMP", Operation::Jmp, AddressingMode::Indirect, 5, Legality::Legal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::Read, false, FlagSet::EMPTY),
    /* 0x6D */ entry("ADC", Operation::Adc, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x6E */ entry("ROR", Operation::Ror, AddressingMode::Absolute, 6, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x6F */ entry("RRA", Operation::Rra, AddressingMode::Absolute, 6, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x70 */ entry("BVS", Operation::Bvs, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x71 */ entry("ADC", Operation::Adc, AddressingMode::IndirectY, 5, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x72 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x73 */ entry("RRA", Operation::Rra, AddressingMode::IndirectY, 8, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x74 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x75 */ entry("ADC", Operation::Adc, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x76 */ entry("ROR", Operation::Ror, AddressingMode::ZeroPageX, 6, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x77 */ entry("RRA", Operation::Rra, AddressingMode::ZeroPageX, 6, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x78 */ entry("SEI", Operation::Sei, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::None, false, FlagSet::I),
    /* 0x79 */ entry("ADC", Operation::Adc, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x7A */ entry("NOP", Operation::Nop, AddressingMode::Implied, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x7B */ entry("RRA", Operation::Rra, AddressingMode::AbsoluteY, 7, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x7C */ entry("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, true, FlagSet::EMPTY),
    /* 0x7D */ entry("ADC", Operation::Adc, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x7E */ entry("ROR", Operation::Ror, AddressingMode::AbsoluteX, 7, Legality::Legal, RegisterSet::P, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0x7F */ entry("RRA", Operation::Rra, AddressingMode::AbsoluteX, 7, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0x80 */ entry("NOP", Operation::Nop, AddressingMode::Immediate, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x81 */ entry("STA", Operation::Sta, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::A, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x82 */ entry("NOP", Operation::Nop, AddressingMode::Immediate, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x83 */ entry("SAX", Operation::Sax, AddressingMode::IndirectX, 6, Legality::Illegal, RegisterSet::A.union(RegisterSet::X), RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x84 */ entry("STY", Operation::Sty, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::Y, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x85 */ entry("STA", Operation::Sta, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x86 */ entry("STX", Operation::Stx, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::X, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x87 */ entry("SAX", Operation::Sax, AddressingMode::ZeroPage, 3, Legality::Illegal, RegisterSet::A.union(RegisterSet::X), RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x88 */ entry("DEY", Operation::Dey, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::Y, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x89 */ entry("NOP", Operation::Nop, AddressingMode::Immediate, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x8A */ entry("TXA", Operation::Txa, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::X, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x8B */ entry("XAA", Operation::Jam, AddressingMode::Immediate, 2, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x8C */ entry("STY", Operation::Sty, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::Y, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x8D */ entry("STA", Operation::Sta, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x8E */ entry("STX", Operation::Stx, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::X, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x8F */ entry("SAX", Operation::Sax, AddressingMode::Absolute, 4, Legality::Illegal, RegisterSet::A.union(RegisterSet::X), RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x90 */ entry("BCC", Operation::Bcc, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x91 */ entry("STA", Operation::Sta, AddressingMode::IndirectY, 6, Legality::Legal, RegisterSet::A, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x92 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x93 */ entry("AHX", Operation::Jam, AddressingMode::IndirectY, 6, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x94 */ entry("STY", Operation::Sty, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::Y, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x95 */ entry("STA", Operation::Sta, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::A, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x96 */ entry("STX", Operation::Stx, AddressingMode::ZeroPageY, 4, Legality::Legal, RegisterSet::X, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x97 */ entry("SAX", Operation::Sax, AddressingMode::ZeroPageY, 4, Legality::Illegal, RegisterSet::A.union(RegisterSet::X), RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x98 */ entry("TYA", Operation::Tya, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::Y, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0x99 */ entry("STA", Operation::Sta, AddressingMode::AbsoluteY, 5, Legality::Legal, RegisterSet::A, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x9A */ entry("TXS", Operation::Txs, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::X, RegisterSet::SP, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x9B */ entry("TAS", Operation::Jam, AddressingMode::AbsoluteY, 5, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x9C */ entry("SHY", Operation::Jam, AddressingMode::AbsoluteX, 5, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x9D */ entry("STA", Operation::Sta, AddressingMode::AbsoluteX, 5, Legality::Legal, RegisterSet::A, RegisterSet::EMPTY, MemoryAccess::Write, false, FlagSet::EMPTY),
    /* 0x9E */ entry("SHX", Operation::Jam, AddressingMode::AbsoluteY, 5, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0x9F */ entry("AHX", Operation::Jam, AddressingMode::AbsoluteY, 5, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xA0 */ entry("LDY", Operation::Ldy, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA1 */ entry("LDA", Operation::Lda, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA2 */ entry("LDX", Operation::Ldx, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::X.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA3 */ entry("LAX", Operation::Lax, AddressingMode::IndirectX, 6, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::X.union(RegisterSet::P)), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA4 */ entry("LDY", Operation::Ldy, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::EMPTY, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA5 */ entry("LDA", Operation::Lda, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA6 */ entry("LDX", Operation::Ldx, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::EMPTY, RegisterSet::X.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA7 */ entry("LAX", Operation::Lax, AddressingMode::ZeroPage, 3, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::X.union(RegisterSet::P)), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA8 */ entry("TAY", Operation::Tay, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::A, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xA9 */ entry("LDA", Operation::Lda, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xAA */ entry("TAX", Operation::Tax, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::A, RegisterSet::X.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xAB */ entry("LAX", Operation::Jam, AddressingMode::Immediate, 2, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xAC */ entry("LDY", Operation::Ldy, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xAD */ entry("LDA", Operation::Lda, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xAE */ entry("LDX", Operation::Ldx, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::X.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xAF */ entry("LAX", Operation::Lax, AddressingMode::Absolute, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::X.union(RegisterSet::P)), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xB0 */ entry("BCS", Operation::Bcs, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xB1 */ entry("LDA", Operation::Lda, AddressingMode::IndirectY, 5, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0xB2 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xB3 */ entry("LAX", Operation::Lax, AddressingMode::IndirectY, 5, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::X.union(RegisterSet::P)), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0xB4 */ entry("LDY", Operation::Ldy, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xB5 */ entry("LDA", Operation::Lda, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xB6 */ entry("LDX", Operation::Ldx, AddressingMode::ZeroPageY, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::X.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xB7 */ entry("LAX", Operation::Lax, AddressingMode::ZeroPageY, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::X.union(RegisterSet::P)), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xB8 */ entry("CLV", Operation::Clv, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::None, false, FlagSet::V),
    /* 0xB9 */ entry("LDA", Operation::Lda, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0xBA */ entry("TSX", Operation::Tsx, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::SP, RegisterSet::X.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xBB */ entry("LAS", Operation::Jam, AddressingMode::AbsoluteY, 4, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xBC */ entry("LDY", Operation::Ldy, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0xBD */ entry("LDA", Operation::Lda, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0xBE */ entry("LDX", Operation::Ldx, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::EMPTY, RegisterSet::X.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0xBF */ entry("LAX", Operation::Lax, AddressingMode::AbsoluteY, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::A.union(RegisterSet::X.union(RegisterSet::P)), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z)),
    /* 0xC0 */ entry("CPY", Operation::Cpy, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::Y, RegisterSet::P, MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xC1 */ entry("CMP", Operation::Cmp, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xC2 */ entry("NOP", Operation::Nop, AddressingMode::Immediate, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xC3 */ entry("DCP", Operation::Dcp, AddressingMode::IndirectX, 8, Legality::Illegal, RegisterSet::A, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xC4 */ entry("CPY", Operation::Cpy, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::Y, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xC5 */ entry("CMP", Operation::Cmp, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xC6 */ entry("DEC", Operation::Dec, AddressingMode::ZeroPage, 5, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xC7 */ entry("DCP", Operation::Dcp, AddressingMode::ZeroPage, 5, Legality::Illegal, RegisterSet::A, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xC8 */ entry("INY", Operation::Iny, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::Y, RegisterSet::Y.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xC9 */ entry("CMP", Operation::Cmp, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xCA */ entry("DEX", Operation::Dex, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::X, RegisterSet::X.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xCB */ entry("AXS", Operation::Jam, AddressingMode::Immediate, 2, Legality::Unstable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xCC */ entry("CPY", Operation::Cpy, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::Y, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xCD */ entry("CMP", Operation::Cmp, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xCE */ entry("DEC", Operation::Dec, AddressingMode::Absolute, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xCF */ entry("DCP", Operation::Dcp, AddressingMode::Absolute, 6, Legality::Illegal, RegisterSet::A, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xD0 */ entry("BNE", Operation::Bne, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xD1 */ entry("CMP", Operation::Cmp, AddressingMode::IndirectY, 5, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xD2 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xD3 */ entry("DCP", Operation::Dcp, AddressingMode::IndirectY, 8, Legality::Illegal, RegisterSet::A, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xD4 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xD5 */ entry("CMP", Operation::Cmp, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xD6 */ entry("DEC", Operation::Dec, AddressingMode::ZeroPageX, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xD7 */ entry("DCP", Operation::Dcp, AddressingMode::ZeroPageX, 6, Legality::Illegal, RegisterSet::A, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xD8 */ entry("CLD", Operation::Cld, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::None, false, FlagSet::D),
    /* 0xD9 */ entry("CMP", Operation::Cmp, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xDA */ entry("NOP", Operation::Nop, AddressingMode::Implied, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xDB */ entry("DCP", Operation::Dcp, AddressingMode::AbsoluteY, 7, Legality::Illegal, RegisterSet::A, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xDC */ entry("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, true, FlagSet::EMPTY),
    /* 0xDD */ entry("CMP", Operation::Cmp, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::A, RegisterSet::P, MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xDE */ entry("DEC", Operation::Dec, AddressingMode::AbsoluteX, 7, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xDF */ entry("DCP", Operation::Dcp, AddressingMode::AbsoluteX, 7, Legality::Illegal, RegisterSet::A, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xE0 */ entry("CPX", Operation::Cpx, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::X, RegisterSet::P, MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xE1 */ entry("SBC", Operation::Sbc, AddressingMode::IndirectX, 6, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xE2 */ entry("NOP", Operation::Nop, AddressingMode::Immediate, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xE3 */ entry("ISB", Operation::Isb, AddressingMode::IndirectX, 8, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xE4 */ entry("CPX", Operation::Cpx, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::X, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xE5 */ entry("SBC", Operation::Sbc, AddressingMode::ZeroPage, 3, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xE6 */ entry("INC", Operation::Inc, AddressingMode::ZeroPage, 5, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xE7 */ entry("ISB", Operation::Isb, AddressingMode::ZeroPage, 5, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xE8 */ entry("INX", Operation::Inx, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::X, RegisterSet::X.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xE9 */ entry("SBC", Operation::Sbc, AddressingMode::Immediate, 2, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xEA */ entry("NOP", Operation::Nop, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xEB */ entry("SBC", Operation::Sbc, AddressingMode::Immediate, 2, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::None, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xEC */ entry("CPX", Operation::Cpx, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::X, RegisterSet::P, MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C)),
    /* 0xED */ entry("SBC", Operation::Sbc, AddressingMode::Absolute, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xEE */ entry("INC", Operation::Inc, AddressingMode::Absolute, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xEF */ entry("ISB", Operation::Isb, AddressingMode::Absolute, 6, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xF0 */ entry("BEQ", Operation::Beq, AddressingMode::Relative, 2, Legality::Legal, RegisterSet::P, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xF1 */ entry("SBC", Operation::Sbc, AddressingMode::IndirectY, 5, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xF2 */ entry("KIL", Operation::Jam, AddressingMode::Implied, 2, Legality::Unusable, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xF3 */ entry("ISB", Operation::Isb, AddressingMode::IndirectY, 8, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xF4 */ entry("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xF5 */ entry("SBC", Operation::Sbc, AddressingMode::ZeroPageX, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xF6 */ entry("INC", Operation::Inc, AddressingMode::ZeroPageX, 6, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xF7 */ entry("ISB", Operation::Isb, AddressingMode::ZeroPageX, 6, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xF8 */ entry("SED", Operation::Sed, AddressingMode::Implied, 2, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::None, false, FlagSet::D),
    /* 0xF9 */ entry("SBC", Operation::Sbc, AddressingMode::AbsoluteY, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xFA */ entry("NOP", Operation::Nop, AddressingMode::Implied, 2, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, false, FlagSet::EMPTY),
    /* 0xFB */ entry("ISB", Operation::Isb, AddressingMode::AbsoluteY, 7, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xFC */ entry("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, Legality::Illegal, RegisterSet::EMPTY, RegisterSet::EMPTY, MemoryAccess::None, true, FlagSet::EMPTY),
    /* 0xFD */ entry("SBC", Operation::Sbc, AddressingMode::AbsoluteX, 4, Legality::Legal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::Read, true, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
    /* 0xFE */ entry("INC", Operation::Inc, AddressingMode::AbsoluteX, 7, Legality::Legal, RegisterSet::EMPTY, RegisterSet::P, MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z)),
    /* 0xFF */ entry("ISB", Operation::Isb, AddressingMode::AbsoluteX, 7, Legality::Illegal, RegisterSet::A.union(RegisterSet::P), RegisterSet::A.union(RegisterSet::P), MemoryAccess::ReadWrite, false, FlagSet::N.union(FlagSet::Z).union(FlagSet::C).union(FlagSet::V)),
];

/// All opcodes that may participate in enumeration for the given policy.
///
/// Legal opcodes are always included; stable undocumented opcodes join
/// when `include_illegal` is set. Unstable and jamming opcodes never do.
pub fn usable_opcodes(include_illegal: bool) -> Vec<u8> {
    (0u16..256)
        .filter(|&op| match OPCODE_TABLE[op as usize].legality {
            Legality::Legal => true,
            Legality::Illegal => include_illegal,
            Legality::Unstable | Legality::Unusable => false,
        })
        .map(|op| op as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legality_census() {
        let legal = OPCODE_TABLE
            .iter()
            .filter(|m| m.legality == Legality::Legal)
            .count();
        let unusable = OPCODE_TABLE
            .iter()
            .filter(|m| m.legality == Legality::Unusable)
            .count();
        assert_eq!(legal, 151); // the documented NMOS set
        assert_eq!(unusable, 12); // the KIL encodings
    }

    #[test]
    fn test_size_consistent_with_mode() {
        for (op, meta) in OPCODE_TABLE.iter().enumerate() {
            assert_eq!(
                meta.size_bytes,
                meta.addressing_mode.instruction_size(),
                "size mismatch at opcode 0x{:02X}",
                op
            );
        }
    }

    #[test]
    fn test_usable_opcode_filtering() {
        let legal_only = usable_opcodes(false);
        assert_eq!(legal_only.len(), 151);
        assert!(legal_only.contains(&0xA9)); // LDA #imm
        assert!(!legal_only.contains(&0xA7)); // LAX zp is undocumented

        let with_illegal = usable_opcodes(true);
        assert!(with_illegal.contains(&0xA7));
        assert!(!with_illegal.contains(&0x02)); // KIL never enumerates
        assert!(!with_illegal.contains(&0x0B)); // ANC is unstable
    }

    #[test]
    fn test_known_entries() {
        // STA absolute
        let sta = &OPCODE_TABLE[0x8D];
        assert_eq!(sta.mnemonic, "STA");
        assert_eq!(sta.base_cycles, 4);
        assert_eq!(sta.memory, MemoryAccess::Write);
        assert!(sta.reads.contains(RegisterSet::A));
        assert!(sta.writes.is_empty());
        assert!(!sta.page_penalty);

        // LDA abs,X carries the read page-cross penalty
        let lda_abx = &OPCODE_TABLE[0xBD];
        assert!(lda_abx.page_penalty);
        assert!(lda_abx.writes.contains(RegisterSet::A.union(RegisterSet::P)));

        // INC zp is read-modify-write
        let inc = &OPCODE_TABLE[0xE6];
        assert_eq!(inc.memory, MemoryAccess::ReadWrite);
        assert_eq!(inc.base_cycles, 5);

        // JMP indirect
        let jmp = &OPCODE_TABLE[0x6C];
        assert_eq!(jmp.addressing_mode, AddressingMode::Indirect);
        assert_eq!(jmp.base_cycles, 5);
    }

    #[test]
    fn test_flags_written_granularity() {
        // CLC touches only C; LDA touches only N and Z
        let clc = &OPCODE_TABLE[0x18];
        assert_eq!(clc.flags_written, FlagSet::C);

        let lda = &OPCODE_TABLE[0xA9];
        assert_eq!(lda.flags_written, FlagSet::N.union(FlagSet::Z));
        assert!(!lda.flags_written.contains(FlagSet::C));

        // PLP restores everything
        let plp = &OPCODE_TABLE[0x28];
        assert_eq!(plp.flags_written, FlagSet::ALL);
    }

    #[test]
    fn test_reads_include_index_registers() {
        // STA (d),Y reads A for the store and Y for the address
        let sta_iny = &OPCODE_TABLE[0x91];
        assert!(sta_iny.reads_with_indexing().contains(RegisterSet::A));
        assert!(sta_iny.reads_with_indexing().contains(RegisterSet::Y));
        assert!(!sta_iny.reads.contains(RegisterSet::Y));

        // LAX (d,X) depends on X even though the operation overwrites it
        let lax_inx = &OPCODE_TABLE[0xA3];
        assert!(lax_inx.reads_with_indexing().contains(RegisterSet::X));
    }

    #[test]
    fn test_register_set_operations() {
        let ax = RegisterSet::A.union(RegisterSet::X);
        assert!(ax.contains(RegisterSet::A));
        assert!(ax.contains(RegisterSet::X));
        assert!(!ax.contains(RegisterSet::Y));
        assert!(ax.intersects(RegisterSet::X.union(RegisterSet::SP)));
        assert!(!ax.intersects(RegisterSet::P));
        assert!(RegisterSet::EMPTY.is_empty());
    }
}
