//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the NMOS 6502. The mode
//! determines how many operand bytes follow an opcode and how the effective
//! address for the operation is formed.

/// 6502 addressing mode enumeration.
///
/// Every entry in the opcode table carries one of these. The interpreter
/// dispatches on the mode to resolve the effective address, and the
/// enumerator uses [`AddressingMode::operand_bytes`] to know how many
/// operand bytes a candidate instruction needs.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the
    /// address of the following instruction.
    Relative,

    /// Full 16-bit address, little-endian.
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Reads with the documented penalty flag cost one extra cycle when
    /// the indexed address crosses a page boundary.
    AbsoluteX,

    /// 16-bit address indexed by Y. Same page-cross penalty rule as
    /// [`AddressingMode::AbsoluteX`].
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-wrap bug: the high pointer byte is read
    /// from `(ptr & 0xFF00) | ((ptr + 1) & 0x00FF)`.
    Indirect,

    /// Indexed indirect: `(zp + X)` forms a zero-page pointer which is
    /// dereferenced (wrapping within the zero page).
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the zero-page pointer is dereferenced and then Y
    /// is added. Penalty-eligible reads cost one extra cycle on page cross.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode for this mode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction size in bytes (opcode plus operands).
    pub const fn instruction_size(self) -> u8 {
        1 + self.operand_bytes()
    }
}
