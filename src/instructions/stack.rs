//! # Stack Instructions
//!
//! Push and pull of the accumulator and the status register. PHP pushes
//! the status byte with the B bit set; PLA updates Z and N from the
//! pulled value.

use super::{pull, push};
use crate::cpu::Cpu;
use crate::memory::Bus;
use crate::Fault;

/// Executes PHA (Push Accumulator).
pub(crate) fn execute_pha<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u8, Fault> {
    let value = cpu.a;
    push(cpu, bus, value)?;
    Ok(0)
}

/// Executes PHP (Push Processor Status). The pushed byte always has the
/// B bit set, per the NMOS convention.
pub(crate) fn execute_php<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u8, Fault> {
    let status = cpu.status() | 0b0001_0000;
    push(cpu, bus, status)?;
    Ok(0)
}

/// Executes PLA (Pull Accumulator).
pub(crate) fn execute_pla<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u8, Fault> {
    cpu.a = pull(cpu, bus)?;
    cpu.update_zn(cpu.a);
    Ok(0)
}

/// Executes PLP (Pull Processor Status). The unused bit is discarded by
/// the flag unpacking.
pub(crate) fn execute_plp<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u8, Fault> {
    let status = pull(cpu, bus)?;
    cpu.set_status(status);
    Ok(0)
}
