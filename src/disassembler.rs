//! # Table-Driven Disassembler
//!
//! Decodes machine code back into instructions using the opcode table.
//! The solution formatter builds its assembly listing on top of this,
//! and the decode/encode round trip doubles as a consistency check on
//! the table itself: re-encoding a decoded instruction must reproduce
//! the input bytes exactly.

use crate::addressing::AddressingMode;
use crate::opcodes::{Legality, OPCODE_TABLE};

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Address the instruction starts at.
    pub address: u16,
    /// The opcode byte.
    pub opcode: u8,
    /// Mnemonic from the opcode table.
    pub mnemonic: &'static str,
    /// Addressing mode from the opcode table.
    pub addressing_mode: AddressingMode,
    /// Operand bytes (0-2).
    pub operand_bytes: Vec<u8>,
    /// Total encoded size.
    pub size_bytes: u8,
    /// Base cycle cost.
    pub base_cycles: u8,
}

impl Instruction {
    /// Re-encodes the instruction to its exact byte form.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }

    /// The operand as a 16-bit value (little-endian for two bytes).
    fn operand_u16(&self) -> u16 {
        match self.operand_bytes.len() {
            1 => self.operand_bytes[0] as u16,
            2 => self.operand_bytes[0] as u16 | (self.operand_bytes[1] as u16) << 8,
            _ => 0,
        }
    }

    /// Formats the instruction as assembly text, e.g. `LDA #$2A` or
    /// `STA $0200,X`. Branch targets are resolved from the instruction
    /// address.
    pub fn to_assembly(&self) -> String {
        let operand = self.operand_u16();
        match self.addressing_mode {
            AddressingMode::Implied => self.mnemonic.to_string(),
            AddressingMode::Accumulator => format!("{} A", self.mnemonic),
            AddressingMode::Immediate => format!("{} #${:02X}", self.mnemonic, operand),
            AddressingMode::ZeroPage => format!("{} ${:02X}", self.mnemonic, operand),
            AddressingMode::ZeroPageX => format!("{} ${:02X},X", self.mnemonic, operand),
            AddressingMode::ZeroPageY => format!("{} ${:02X},Y", self.mnemonic, operand),
            AddressingMode::Relative => {
                let offset = self.operand_bytes[0] as i8;
                let target = self
                    .address
                    .wrapping_add(self.size_bytes as u16)
                    .wrapping_add_signed(offset as i16);
                format!("{} ${:04X}", self.mnemonic, target)
            }
            AddressingMode::Absolute => format!("{} ${:04X}", self.mnemonic, operand),
            AddressingMode::AbsoluteX => format!("{} ${:04X},X", self.mnemonic, operand),
            AddressingMode::AbsoluteY => format!("{} ${:04X},Y", self.mnemonic, operand),
            AddressingMode::Indirect => format!("{} (${:04X})", self.mnemonic, operand),
            AddressingMode::IndirectX => format!("{} (${:02X},X)", self.mnemonic, operand),
            AddressingMode::IndirectY => format!("{} (${:02X}),Y", self.mnemonic, operand),
        }
    }
}

/// Decodes one instruction from the front of `bytes`.
///
/// Returns `None` for jamming/unstable opcodes and for truncated
/// operand bytes; callers emit those as data bytes instead.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let opcode = *bytes.first()?;
    let meta = &OPCODE_TABLE[opcode as usize];

    if matches!(meta.legality, Legality::Unusable | Legality::Unstable) {
        return None;
    }
    if bytes.len() < meta.size_bytes as usize {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: meta.mnemonic,
        addressing_mode: meta.addressing_mode,
        operand_bytes: bytes[1..meta.size_bytes as usize].to_vec(),
        size_bytes: meta.size_bytes,
        base_cycles: meta.base_cycles,
    })
}

/// Decodes a whole byte slice into instructions. Undecodable bytes
/// become one-byte `.byte` pseudo-instructions.
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pos = 0;
    let mut address = start_address;

    while pos < bytes.len() {
        match decode_instruction(&bytes[pos..], address) {
            Some(instr) => {
                pos += instr.size_bytes as usize;
                address = address.wrapping_add(instr.size_bytes as u16);
                instructions.push(instr);
            }
            None => {
                instructions.push(Instruction {
                    address,
                    opcode: bytes[pos],
                    mnemonic: ".byte",
                    addressing_mode: AddressingMode::Implied,
                    operand_bytes: Vec::new(),
                    size_bytes: 1,
                    base_cycles: 0,
                });
                pos += 1;
                address = address.wrapping_add(1);
            }
        }
    }

    instructions
}
