//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI. BRK is handled in the dispatcher as an explicit
//! halt (candidates are straight-line sequences; vectoring through
//! `$FFFE` is out of scope). NOP needs no handler.

use super::{pull, pull_u16, push_u16};
use crate::cpu::{Cpu, Operand};
use crate::memory::Bus;
use crate::Fault;

/// Executes JMP. The operand resolution already handled the indirect
/// page-wrap bug.
pub(crate) fn execute_jmp(cpu: &mut Cpu, operand: Operand) -> u8 {
    match operand {
        Operand::Address(target) => cpu.pc = target,
        _ => unreachable!("JMP uses absolute or indirect addressing"),
    }
    0
}

/// Executes JSR: pushes the return address minus one, then jumps.
pub(crate) fn execute_jsr<B: Bus>(
    cpu: &mut Cpu,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, Fault> {
    let target = match operand {
        Operand::Address(target) => target,
        _ => unreachable!("JSR uses absolute addressing"),
    };
    let return_addr = cpu.pc.wrapping_sub(1);
    push_u16(cpu, bus, return_addr)?;
    cpu.pc = target;
    Ok(0)
}

/// Executes RTS: pulls the return address and resumes one byte past it.
pub(crate) fn execute_rts<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u8, Fault> {
    let addr = pull_u16(cpu, bus)?;
    cpu.pc = addr.wrapping_add(1);
    Ok(0)
}

/// Executes RTI: pulls the status register, then the return address.
pub(crate) fn execute_rti<B: Bus>(cpu: &mut Cpu, bus: &mut B) -> Result<u8, Fault> {
    let status = pull(cpu, bus)?;
    cpu.set_status(status);
    cpu.pc = pull_u16(cpu, bus)?;
    Ok(0)
}
