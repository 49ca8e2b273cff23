//! # Stable Undocumented Instructions
//!
//! The undocumented opcodes with reliable behavior, implemented as the
//! documented compositions: LAX = LDA+LDX, SAX stores `A & X`, and the
//! read-modify-write pairs DCP (DEC+CMP), ISB (INC+SBC), SLO (ASL+ORA),
//! RLA (ROL+AND), SRE (LSR+EOR), RRA (ROR+ADC).
//!
//! Truly unstable opcodes (ANC, ARR, XAA, ...) are classed unusable in
//! the opcode table and never reach these handlers.

use super::{alu, inc_dec, shifts, write_operand};
use crate::cpu::{Cpu, Operand};
use crate::memory::Bus;
use crate::Fault;

/// Executes LAX: loads A and X with the same value.
pub(crate) fn execute_lax<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = super::read_operand(cpu, bus, operand)?;
    cpu.a = value;
    cpu.x = value;
    cpu.update_zn(value);
    Ok(0)
}

/// Executes SAX: stores `A & X` without touching the flags.
pub(crate) fn execute_sax<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = cpu.a & cpu.x;
    write_operand(cpu, bus, operand, value)?;
    Ok(0)
}

/// Executes DCP: DEC on memory followed by CMP against the result.
pub(crate) fn execute_dcp<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    inc_dec::execute_dec(cpu, bus, operand)?;
    alu::execute_cmp(cpu, bus, operand)?;
    Ok(0)
}

/// Executes ISB: INC on memory followed by SBC of the result.
pub(crate) fn execute_isb<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    inc_dec::execute_inc(cpu, bus, operand)?;
    alu::execute_sbc(cpu, bus, operand)?;
    Ok(0)
}

/// Executes SLO: ASL on memory followed by ORA of the result.
pub(crate) fn execute_slo<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    shifts::execute_asl(cpu, bus, operand)?;
    alu::execute_ora(cpu, bus, operand)?;
    Ok(0)
}

/// Executes RLA: ROL on memory followed by AND of the result.
pub(crate) fn execute_rla<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    shifts::execute_rol(cpu, bus, operand)?;
    alu::execute_and(cpu, bus, operand)?;
    Ok(0)
}

/// Executes SRE: LSR on memory followed by EOR of the result.
pub(crate) fn execute_sre<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    shifts::execute_lsr(cpu, bus, operand)?;
    alu::execute_eor(cpu, bus, operand)?;
    Ok(0)
}

/// Executes RRA: ROR on memory followed by ADC of the result.
pub(crate) fn execute_rra<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    shifts::execute_ror(cpu, bus, operand)?;
    alu::execute_adc(cpu, bus, operand)?;
    Ok(0)
}
