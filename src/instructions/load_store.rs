//! # Load and Store Instructions
//!
//! LDA, LDX, LDY set Z and N from the loaded value. STA, STX, STY leave
//! the flags alone.

use super::{read_operand, write_operand};
use crate::cpu::{Cpu, Operand};
use crate::memory::Bus;
use crate::Fault;

/// Executes LDA (Load Accumulator).
pub(crate) fn execute_lda<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    cpu.a = read_operand(cpu, bus, operand)?;
    cpu.update_zn(cpu.a);
    Ok(0)
}

/// Executes LDX (Load X Register).
pub(crate) fn execute_ldx<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    cpu.x = read_operand(cpu, bus, operand)?;
    cpu.update_zn(cpu.x);
    Ok(0)
}

/// Executes LDY (Load Y Register).
pub(crate) fn execute_ldy<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    cpu.y = read_operand(cpu, bus, operand)?;
    cpu.update_zn(cpu.y);
    Ok(0)
}

/// Executes STA (Store Accumulator).
pub(crate) fn execute_sta<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = cpu.a;
    write_operand(cpu, bus, operand, value)?;
    Ok(0)
}

/// Executes STX (Store X Register).
pub(crate) fn execute_stx<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = cpu.x;
    write_operand(cpu, bus, operand, value)?;
    Ok(0)
}

/// Executes STY (Store Y Register).
pub(crate) fn execute_sty<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = cpu.y;
    write_operand(cpu, bus, operand, value)?;
    Ok(0)
}
