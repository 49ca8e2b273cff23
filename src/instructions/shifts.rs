//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR on the accumulator or on memory (read-modify-write).
//! The carry flag receives the bit shifted out; rotates shift the old
//! carry in at the other end.

use super::{read_operand, write_operand};
use crate::cpu::{Cpu, Operand};
use crate::memory::Bus;
use crate::Fault;

/// Executes ASL (Arithmetic Shift Left). Bit 7 lands in carry.
pub(crate) fn execute_asl<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = read_operand(cpu, bus, operand)?;
    let result = value << 1;
    cpu.flag_c = value & 0x80 != 0;
    cpu.update_zn(result);
    write_operand(cpu, bus, operand, result)?;
    Ok(0)
}

/// Executes LSR (Logical Shift Right). Bit 0 lands in carry; N clears.
pub(crate) fn execute_lsr<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = read_operand(cpu, bus, operand)?;
    let result = value >> 1;
    cpu.flag_c = value & 0x01 != 0;
    cpu.update_zn(result);
    write_operand(cpu, bus, operand, result)?;
    Ok(0)
}

/// Executes ROL (Rotate Left through carry).
pub(crate) fn execute_rol<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = read_operand(cpu, bus, operand)?;
    let result = (value << 1) | cpu.flag_c as u8;
    cpu.flag_c = value & 0x80 != 0;
    cpu.update_zn(result);
    write_operand(cpu, bus, operand, result)?;
    Ok(0)
}

/// Executes ROR (Rotate Right through carry).
pub(crate) fn execute_ror<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let value = read_operand(cpu, bus, operand)?;
    let result = (value >> 1) | ((cpu.flag_c as u8) << 7);
    cpu.flag_c = value & 0x01 != 0;
    cpu.update_zn(result);
    write_operand(cpu, bus, operand, result)?;
    Ok(0)
}
