//! # Increment and Decrement Instructions
//!
//! INC and DEC are read-modify-write on memory; INX, INY, DEX, DEY work
//! on the index registers. All set Z and N from the result.

use super::{read_operand, write_operand};
use crate::cpu::{Cpu, Operand};
use crate::memory::Bus;
use crate::Fault;

/// Executes INC (Increment Memory).
pub(crate) fn execute_inc<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let result = read_operand(cpu, bus, operand)?.wrapping_add(1);
    cpu.update_zn(result);
    write_operand(cpu, bus, operand, result)?;
    Ok(0)
}

/// Executes DEC (Decrement Memory).
pub(crate) fn execute_dec<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let result = read_operand(cpu, bus, operand)?.wrapping_sub(1);
    cpu.update_zn(result);
    write_operand(cpu, bus, operand, result)?;
    Ok(0)
}

/// Executes INX.
pub(crate) fn execute_inx(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
    0
}

/// Executes INY.
pub(crate) fn execute_iny(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
    0
}

/// Executes DEX.
pub(crate) fn execute_dex(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
    0
}

/// Executes DEY.
pub(crate) fn execute_dey(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
    0
}
