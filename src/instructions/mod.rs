//! # 6502 Instruction Implementations
//!
//! Operation handlers, organized by family. Each handler takes the CPU,
//! the bus, and the operand resolved by addressing-mode dispatch, and
//! returns any extra cycles beyond the opcode's base cost (only branches
//! report extra cycles; the page-cross read penalty is applied by the
//! step loop from table metadata).
//!
//! ## Families
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **illegal**: the stable undocumented compositions LAX, SAX, DCP,
//!   ISB, SLO, RLA, SRE, RRA

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod illegal;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::cpu::{Cpu, Operand, Status};
use crate::memory::Bus;
use crate::opcodes::Operation;
use crate::Fault;

/// Dispatches one decoded operation. Returns extra cycles beyond the
/// base table value and the continue/halt status.
pub(crate) fn dispatch<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operation: Operation,
    operand: Operand,
) -> Result<(u8, Status), Fault> {
    let extra = match operation {
        Operation::Adc => alu::execute_adc(cpu, bus, operand)?,
        Operation::And => alu::execute_and(cpu, bus, operand)?,
        Operation::Asl => shifts::execute_asl(cpu, bus, operand)?,
        Operation::Bcc => {
            branches::execute_branch(cpu, operand, branches::BranchCondition::CarryClear)
        }
        Operation::Bcs => {
            branches::execute_branch(cpu, operand, branches::BranchCondition::CarrySet)
        }
        Operation::Beq => branches::execute_branch(cpu, operand, branches::BranchCondition::Equal),
        Operation::Bit => alu::execute_bit(cpu, bus, operand)?,
        Operation::Bmi => branches::execute_branch(cpu, operand, branches::BranchCondition::Minus),
        Operation::Bne => {
            branches::execute_branch(cpu, operand, branches::BranchCondition::NotEqual)
        }
        Operation::Bpl => branches::execute_branch(cpu, operand, branches::BranchCondition::Plus),
        Operation::Brk => return Ok((0, Status::Halted)),
        Operation::Bvc => {
            branches::execute_branch(cpu, operand, branches::BranchCondition::OverflowClear)
        }
        Operation::Bvs => {
            branches::execute_branch(cpu, operand, branches::BranchCondition::OverflowSet)
        }
        Operation::Clc => flags::execute_clc(cpu),
        Operation::Cld => flags::execute_cld(cpu),
        Operation::Cli => flags::execute_cli(cpu),
        Operation::Clv => flags::execute_clv(cpu),
        Operation::Cmp => alu::execute_cmp(cpu, bus, operand)?,
        Operation::Cpx => alu::execute_cpx(cpu, bus, operand)?,
        Operation::Cpy => alu::execute_cpy(cpu, bus, operand)?,
        Operation::Dec => inc_dec::execute_dec(cpu, bus, operand)?,
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),
        Operation::Eor => alu::execute_eor(cpu, bus, operand)?,
        Operation::Inc => inc_dec::execute_inc(cpu, bus, operand)?,
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, bus, operand)?,
        Operation::Lda => load_store::execute_lda(cpu, bus, operand)?,
        Operation::Ldx => load_store::execute_ldx(cpu, bus, operand)?,
        Operation::Ldy => load_store::execute_ldy(cpu, bus, operand)?,
        Operation::Lsr => shifts::execute_lsr(cpu, bus, operand)?,
        Operation::Nop => 0,
        Operation::Ora => alu::execute_ora(cpu, bus, operand)?,
        Operation::Pha => stack::execute_pha(cpu, bus)?,
        Operation::Php => stack::execute_php(cpu, bus)?,
        Operation::Pla => stack::execute_pla(cpu, bus)?,
        Operation::Plp => stack::execute_plp(cpu, bus)?,
        Operation::Rol => shifts::execute_rol(cpu, bus, operand)?,
        Operation::Ror => shifts::execute_ror(cpu, bus, operand)?,
        Operation::Rti => control::execute_rti(cpu, bus)?,
        Operation::Rts => control::execute_rts(cpu, bus)?,
        Operation::Sbc => alu::execute_sbc(cpu, bus, operand)?,
        Operation::Sec => flags::execute_sec(cpu),
        Operation::Sed => flags::execute_sed(cpu),
        Operation::Sei => flags::execute_sei(cpu),
        Operation::Sta => load_store::execute_sta(cpu, bus, operand)?,
        Operation::Stx => load_store::execute_stx(cpu, bus, operand)?,
        Operation::Sty => load_store::execute_sty(cpu, bus, operand)?,
        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Txs => transfer::execute_txs(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Lax => illegal::execute_lax(cpu, bus, operand)?,
        Operation::Sax => illegal::execute_sax(cpu, bus, operand)?,
        Operation::Dcp => illegal::execute_dcp(cpu, bus, operand)?,
        Operation::Isb => illegal::execute_isb(cpu, bus, operand)?,
        Operation::Slo => illegal::execute_slo(cpu, bus, operand)?,
        Operation::Rla => illegal::execute_rla(cpu, bus, operand)?,
        Operation::Sre => illegal::execute_sre(cpu, bus, operand)?,
        Operation::Rra => illegal::execute_rra(cpu, bus, operand)?,
        // Legality is checked before dispatch; a Jam can never reach here.
        Operation::Jam => unreachable!("jam opcodes are rejected before dispatch"),
    };
    Ok((extra, Status::Continue))
}

/// Reads the byte an operand designates: the accumulator or the byte at
/// the effective address.
pub(crate) fn read_operand<B: Bus>(
    cpu: &Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    match operand {
        Operand::Accumulator => Ok(cpu.a),
        Operand::Address(ea) => bus.read(ea),
        _ => unreachable!("operation requires a value operand"),
    }
}

/// Writes a byte back to the location an operand designates.
pub(crate) fn write_operand<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
    value: u8,
) -> Result<(), Fault> {
    match operand {
        Operand::Accumulator => {
            cpu.a = value;
            Ok(())
        }
        Operand::Address(ea) => bus.write(ea, value),
        _ => unreachable!("operation requires a writable operand"),
    }
}

const STACK_BASE: u16 = 0x0100;

/// Pushes a byte: write at `0x0100 + sp`, then decrement.
pub(crate) fn push<B: Bus>(cpu: &mut Cpu, bus: &mut B, value: u8) -> Result<(), Fault> {
    bus.write(STACK_BASE + cpu.sp as u16, value)?;
    cpu.sp = cpu.sp.wrapping_sub(1);
    Ok(())
}

/// Pulls a byte: increment, then read at `0x0100 + sp`.
pub(crate) fn pull<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u8, Fault> {
    cpu.sp = cpu.sp.wrapping_add(1);
    bus.read(STACK_BASE + cpu.sp as u16)
}

/// Pushes a 16-bit word, high byte first.
pub(crate) fn push_u16<B: Bus>(cpu: &mut Cpu, bus: &mut B, value: u16) -> Result<(), Fault> {
    push(cpu, bus, (value >> 8) as u8)?;
    push(cpu, bus, (value & 0xFF) as u8)
}

/// Pulls a 16-bit word, low byte first.
pub(crate) fn pull_u16<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u16, Fault> {
    let lo = pull(cpu, bus)? as u16;
    let hi = pull(cpu, bus)? as u16;
    Ok((hi << 8) | lo)
}
