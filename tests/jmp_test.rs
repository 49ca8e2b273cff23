//! JMP tests, including the NMOS indirect page-wrap bug, and the
//! window semantics of bounded execution.

use opt6502::cpu::RunStatus;
use opt6502::{Bus, Cpu, Fault, FlatMemory};

fn setup(program: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = FlatMemory::new();
    mem.load(0x1000, program);
    let mut cpu = Cpu::new();
    cpu.pc = 0x1000;
    (cpu, mem)
}

#[test]
fn test_jmp_absolute() {
    let (mut cpu, mut mem) = setup(&[0x4C, 0x34, 0x12]); // JMP $1234

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cycles, 3);
}

#[test]
fn test_jmp_indirect() {
    let (mut cpu, mut mem) = setup(&[0x6C, 0x20, 0x30]); // JMP ($3020)
    mem.write(0x3020, 0xCD).unwrap();
    mem.write(0x3021, 0xAB).unwrap();

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc, 0xABCD);
    assert_eq!(cycles, 5);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    // Pointer at $xxFF reads its high byte from $xx00, not $xxFF+1
    let (mut cpu, mut mem) = setup(&[0x6C, 0xFF, 0x30]); // JMP ($30FF)
    mem.write(0x30FF, 0x11).unwrap();
    mem.write(0x3100, 0x22).unwrap(); // ignored by the bug
    mem.write(0x3000, 0x33).unwrap(); // actual high byte

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc, 0x3311);
}

#[test]
fn test_brk_halts_execution() {
    // LDA #$01; BRK; LDA #$02 (never reached)
    let (mut cpu, mut mem) = setup(&[0xA9, 0x01, 0x00, 0xA9, 0x02]);

    let outcome = cpu.execute(&mut mem, 0x1000, 0x1005, 16);

    assert_eq!(outcome.status, RunStatus::Halted);
    assert_eq!(cpu.a, 0x01);
    assert_eq!(outcome.instructions, 2);
}

#[test]
fn test_branch_within_window_is_legal() {
    // LDX #$00; INX; CPX #$03; BNE -5 (back to INX); window end
    let (mut cpu, mut mem) = setup(&[0xA2, 0x00, 0xE8, 0xE0, 0x03, 0xD0, 0xFB]);

    let outcome = cpu.execute(&mut mem, 0x1000, 0x1007, 64);

    assert_eq!(outcome.status, RunStatus::Completed);
    assert_eq!(cpu.x, 0x03);
}

#[test]
fn test_jump_out_of_window_faults() {
    let (mut cpu, mut mem) = setup(&[0x4C, 0x00, 0x80]); // JMP $8000

    let outcome = cpu.execute(&mut mem, 0x1000, 0x1003, 16);

    assert_eq!(
        outcome.status,
        RunStatus::Faulted(Fault::ControlEscape { pc: 0x8000 })
    );
}

#[test]
fn test_infinite_loop_hits_instruction_cap() {
    let (mut cpu, mut mem) = setup(&[0x4C, 0x00, 0x10]); // JMP $1000

    let outcome = cpu.execute(&mut mem, 0x1000, 0x1003, 10);

    assert_eq!(
        outcome.status,
        RunStatus::Faulted(Fault::InstructionLimit { limit: 10 })
    );
    assert_eq!(outcome.instructions, 10);
}
