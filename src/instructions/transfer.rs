//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All except TXS set Z and N from the
//! transferred value.

use crate::cpu::Cpu;

/// Executes TAX (Transfer A to X).
pub(crate) fn execute_tax(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
    0
}

/// Executes TAY (Transfer A to Y).
pub(crate) fn execute_tay(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
    0
}

/// Executes TXA (Transfer X to A).
pub(crate) fn execute_txa(cpu: &mut Cpu) -> u8 {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
    0
}

/// Executes TYA (Transfer Y to A).
pub(crate) fn execute_tya(cpu: &mut Cpu) -> u8 {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
    0
}

/// Executes TSX (Transfer SP to X).
pub(crate) fn execute_tsx(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
    0
}

/// Executes TXS (Transfer X to SP). Flags are not affected.
pub(crate) fn execute_txs(cpu: &mut Cpu) -> u8 {
    cpu.sp = cpu.x;
    0
}
