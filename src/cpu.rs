//! # CPU State and Execution
//!
//! The [`Cpu`] struct holds the 6502 register file and drives the
//! fetch-decode-execute cycle. Dispatch is table-driven: the opcode
//! indexes [`OPCODE_TABLE`](crate::opcodes::OPCODE_TABLE), whose entry
//! carries a tagged `(addressing_mode, operation)` pair. The mode
//! resolves the effective address; the operation consumes it.
//!
//! The interpreter is the semantic oracle for equivalence checking, so
//! cycle accounting follows the NMOS tables exactly: base cycles per
//! opcode, one extra cycle for a taken branch, one more if the branch
//! target is on a different page, and one extra cycle for page-crossing
//! reads on penalty-eligible opcodes.
//!
//! Memory is passed into [`Cpu::step`] by exclusive mutable reference;
//! the CPU owns no bus. Faults (illegal access, unusable opcode,
//! instruction cap) are returned as values and never panic.

use crate::addressing::AddressingMode;
use crate::memory::Bus;
use crate::opcodes::OPCODE_TABLE;
use crate::{instructions, Fault};

/// Outcome status of a single [`Cpu::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The instruction completed and execution may continue.
    Continue,
    /// The instruction requested a stop (BRK).
    Halted,
}

/// How a bounded execution run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The program counter reached the end of the window.
    Completed,
    /// A BRK stopped execution.
    Halted,
    /// Execution faulted; the candidate is rejected.
    Faulted(Fault),
}

/// Aggregate result of [`Cpu::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Total cycles consumed, including penalties.
    pub cycles: u64,
    /// Instructions retired.
    pub instructions: usize,
    /// How the run ended.
    pub status: RunStatus,
}

impl ExecutionOutcome {
    /// True if the run ended without a fault.
    pub fn is_ok(&self) -> bool {
        !matches!(self.status, RunStatus::Faulted(_))
    }

    /// The fault, if the run faulted.
    pub fn fault(&self) -> Option<&Fault> {
        match &self.status {
            RunStatus::Faulted(f) => Some(f),
            _ => None,
        }
    }
}

/// Resolved operand of an instruction, produced by addressing-mode
/// resolution and consumed by the operation handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Implied: no operand.
    None,
    /// The operation works on the accumulator.
    Accumulator,
    /// The operation works on the byte at this effective address.
    /// Immediate operands resolve here too (the address of the operand
    /// byte in the instruction stream).
    Address(u16),
    /// Signed branch displacement.
    Relative(i8),
}

/// 6502 register file and flags.
///
/// Fields are public: the verifier seeds arbitrary states and compares
/// final states field by field. Reset defaults are `sp = 0xFF` with all
/// flags clear; [`Cpu::reset`] performs the documented power-on sequence
/// instead (vector fetch, `sp = 0xFD`, I set).
///
/// # Examples
///
/// ```
/// use opt6502::{Cpu, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x1000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = Cpu::new();
/// cpu.pc = 0x1000;
/// let (cycles, _) = cpu.step(&mut mem).unwrap();
/// assert_eq!(cpu.a, 0x42);
/// assert_eq!(cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpu {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (stack lives at `0x0100 + sp`).
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
    /// Carry flag.
    pub flag_c: bool,
    /// Zero flag.
    pub flag_z: bool,
    /// Interrupt disable flag.
    pub flag_i: bool,
    /// Decimal mode flag.
    pub flag_d: bool,
    /// Break flag.
    pub flag_b: bool,
    /// Overflow flag.
    pub flag_v: bool,
    /// Negative flag.
    pub flag_n: bool,
}

impl Cpu {
    /// Creates a CPU in the default input state used by the verifier:
    /// registers zero, `sp = 0xFF`, all flags clear, `pc = 0`.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
        }
    }

    /// Performs the documented power-on reset sequence: the dummy stack
    /// reads, PC from the vector at `$FFFC`, `sp = 0xFD`, I flag set.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) -> Result<(), Fault> {
        // Dummy read pattern of the NMOS reset sequence
        bus.read(0x00FF)?;
        bus.read(0x00FF)?;
        bus.read(0x00FF)?;
        bus.read(0x0100)?;
        bus.read(0x01FF)?;
        bus.read(0x01FE)?;

        self.pc = bus.read_u16(0xFFFC)?;
        self.sp = 0xFD;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = true;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;
        Ok(())
    }

    /// Packs the flags into the status byte (NV-BDIZC, bit 5 reads 1).
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;
        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }
        status
    }

    /// Unpacks a status byte into the individual flags. The unused bit 5
    /// is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_b = value & 0b0001_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    /// Sets Z and N from a result byte.
    pub(crate) fn update_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Executes one instruction and returns the cycles it consumed plus
    /// the continue/halt status.
    ///
    /// The cycle count is the base-table value plus the taken-branch and
    /// page-cross penalties where they apply.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<(u8, Status), Fault> {
        let opcode = bus.read(self.pc)?;
        let meta = &OPCODE_TABLE[opcode as usize];

        if !meta.is_executable() {
            return Err(Fault::UnusableOpcode { opcode });
        }

        self.pc = self.pc.wrapping_add(1);
        let (operand, page_crossed) = self.fetch_operand(bus, meta.addressing_mode)?;

        let (extra_cycles, status) =
            instructions::dispatch(self, bus, meta.operation, operand)?;

        let mut cycles = meta.base_cycles + extra_cycles;
        if page_crossed && meta.page_penalty {
            cycles += 1;
        }

        Ok((cycles, status))
    }

    /// Runs instructions from `start_pc` until the program counter lands
    /// exactly on `end_pc` (normal completion), a BRK halts execution,
    /// a fault occurs, or `max_instructions` have retired.
    ///
    /// Control transfers are legal anywhere inside `[start_pc, end_pc)`;
    /// leaving the window by any other route is a
    /// [`Fault::ControlEscape`].
    pub fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        start_pc: u16,
        end_pc: u16,
        max_instructions: usize,
    ) -> ExecutionOutcome {
        self.pc = start_pc;
        let mut cycles: u64 = 0;
        let mut instructions: usize = 0;

        loop {
            if self.pc == end_pc {
                return ExecutionOutcome {
                    cycles,
                    instructions,
                    status: RunStatus::Completed,
                };
            }
            if self.pc < start_pc || self.pc > end_pc {
                return ExecutionOutcome {
                    cycles,
                    instructions,
                    status: RunStatus::Faulted(Fault::ControlEscape { pc: self.pc }),
                };
            }
            if instructions >= max_instructions {
                return ExecutionOutcome {
                    cycles,
                    instructions,
                    status: RunStatus::Faulted(Fault::InstructionLimit {
                        limit: max_instructions,
                    }),
                };
            }

            match self.step(bus) {
                Ok((step_cycles, Status::Continue)) => {
                    cycles += step_cycles as u64;
                    instructions += 1;
                }
                Ok((step_cycles, Status::Halted)) => {
                    cycles += step_cycles as u64;
                    instructions += 1;
                    return ExecutionOutcome {
                        cycles,
                        instructions,
                        status: RunStatus::Halted,
                    };
                }
                Err(fault) => {
                    return ExecutionOutcome {
                        cycles,
                        instructions,
                        status: RunStatus::Faulted(fault),
                    };
                }
            }
        }
    }

    /// Resolves the operand for `mode`, advancing the program counter
    /// past the operand bytes. Returns the operand and whether address
    /// computation crossed a page boundary.
    fn fetch_operand<B: Bus>(
        &mut self,
        bus: &mut B,
        mode: AddressingMode,
    ) -> Result<(Operand, bool), Fault> {
        match mode {
            AddressingMode::Implied => Ok((Operand::None, false)),
            AddressingMode::Accumulator => Ok((Operand::Accumulator, false)),
            AddressingMode::Immediate => {
                let ea = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Ok((Operand::Address(ea), false))
            }
            AddressingMode::ZeroPage => {
                let ea = bus.read(self.pc)? as u16;
                self.pc = self.pc.wrapping_add(1);
                Ok((Operand::Address(ea), false))
            }
            AddressingMode::ZeroPageX => {
                let base = bus.read(self.pc)?;
                self.pc = self.pc.wrapping_add(1);
                Ok((Operand::Address(base.wrapping_add(self.x) as u16), false))
            }
            AddressingMode::ZeroPageY => {
                let base = bus.read(self.pc)?;
                self.pc = self.pc.wrapping_add(1);
                Ok((Operand::Address(base.wrapping_add(self.y) as u16), false))
            }
            AddressingMode::Relative => {
                let offset = bus.read(self.pc)? as i8;
                self.pc = self.pc.wrapping_add(1);
                Ok((Operand::Relative(offset), false))
            }
            AddressingMode::Absolute => {
                let ea = bus.read_u16(self.pc)?;
                self.pc = self.pc.wrapping_add(2);
                Ok((Operand::Address(ea), false))
            }
            AddressingMode::AbsoluteX => {
                let base = bus.read_u16(self.pc)?;
                self.pc = self.pc.wrapping_add(2);
                let ea = base.wrapping_add(self.x as u16);
                let crossed = base & 0xFF00 != ea & 0xFF00;
                Ok((Operand::Address(ea), crossed))
            }
            AddressingMode::AbsoluteY => {
                let base = bus.read_u16(self.pc)?;
                self.pc = self.pc.wrapping_add(2);
                let ea = base.wrapping_add(self.y as u16);
                let crossed = base & 0xFF00 != ea & 0xFF00;
                Ok((Operand::Address(ea), crossed))
            }
            AddressingMode::Indirect => {
                let ptr = bus.read_u16(self.pc)?;
                self.pc = self.pc.wrapping_add(2);
                // NMOS page-wrap bug: the high byte of the pointer never
                // carries into the next page.
                let hi_ptr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let lo = bus.read(ptr)? as u16;
                let hi = bus.read(hi_ptr)? as u16;
                Ok((Operand::Address((hi << 8) | lo), false))
            }
            AddressingMode::IndirectX => {
                let zp = bus.read(self.pc)?.wrapping_add(self.x);
                self.pc = self.pc.wrapping_add(1);
                let lo = bus.read(zp as u16)? as u16;
                let hi = bus.read(zp.wrapping_add(1) as u16)? as u16;
                Ok((Operand::Address((hi << 8) | lo), false))
            }
            AddressingMode::IndirectY => {
                let zp = bus.read(self.pc)?;
                self.pc = self.pc.wrapping_add(1);
                let lo = bus.read(zp as u16)? as u16;
                let hi = bus.read(zp.wrapping_add(1) as u16)? as u16;
                let base = (hi << 8) | lo;
                let ea = base.wrapping_add(self.y as u16);
                let crossed = base & 0xFF00 != ea & 0xFF00;
                Ok((Operand::Address(ea), crossed))
            }
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
