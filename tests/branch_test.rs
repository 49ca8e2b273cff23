//! Branch instruction tests: condition polarity and the uniform
//! taken / page-cross cycle rules across all eight branches.

use opt6502::{Cpu, FlatMemory};

fn setup(program: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = FlatMemory::new();
    mem.load(0x1000, program);
    let mut cpu = Cpu::new();
    cpu.pc = 0x1000;
    (cpu, mem)
}

fn setup_at(addr: u16, program: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = FlatMemory::new();
    mem.load(addr, program);
    let mut cpu = Cpu::new();
    cpu.pc = addr;
    (cpu, mem)
}

#[test]
fn test_bne_taken() {
    let (mut cpu, mut mem) = setup(&[0xD0, 0x10]); // BNE +16
    cpu.flag_z = false;

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc, 0x1012);
    assert_eq!(cycles, 3); // 2 base + 1 taken
}

#[test]
fn test_bne_not_taken() {
    let (mut cpu, mut mem) = setup(&[0xD0, 0x10]);
    cpu.flag_z = true;

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc, 0x1002);
    assert_eq!(cycles, 2);
}

#[test]
fn test_branch_page_cross_costs_two_extra() {
    // Branch at $10FE with offset +4: target $1104 is on the next page
    // relative to the branch, 2 + 1 + 1 cycles.
    let (mut cpu, mut mem) = setup_at(0x10FE, &[0xF0, 0x04]); // BEQ +4
    cpu.flag_z = true;

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc, 0x1104);
    assert_eq!(cycles, 4);
}

#[test]
fn test_backward_branch_page_cross() {
    let (mut cpu, mut mem) = setup(&[0x90, 0xF0]); // BCC -16
    cpu.flag_c = false;

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc, 0x0FF2);
    assert_eq!(cycles, 4);
}

#[test]
fn test_all_eight_branches_share_timing() {
    // (opcode, flag setter, taken)
    let cases: [(u8, fn(&mut Cpu)); 8] = [
        (0x90, |c| c.flag_c = false), // BCC
        (0xB0, |c| c.flag_c = true),  // BCS
        (0xF0, |c| c.flag_z = true),  // BEQ
        (0xD0, |c| c.flag_z = false), // BNE
        (0x30, |c| c.flag_n = true),  // BMI
        (0x10, |c| c.flag_n = false), // BPL
        (0x50, |c| c.flag_v = false), // BVC
        (0x70, |c| c.flag_v = true),  // BVS
    ];

    for (opcode, make_taken) in cases {
        let (mut cpu, mut mem) = setup(&[opcode, 0x02]);
        make_taken(&mut cpu);
        let (cycles, _) = cpu.step(&mut mem).unwrap();
        assert_eq!(cycles, 3, "taken branch 0x{opcode:02X} must cost 3");
        assert_eq!(cpu.pc, 0x1004);
    }
}

#[test]
fn test_branch_conditions_not_taken() {
    let cases: [(u8, fn(&mut Cpu)); 4] = [
        (0x90, |c| c.flag_c = true),  // BCC with carry set
        (0xF0, |c| c.flag_z = false), // BEQ with zero clear
        (0x30, |c| c.flag_n = false), // BMI with positive
        (0x70, |c| c.flag_v = false), // BVS without overflow
    ];

    for (opcode, make_not_taken) in cases {
        let (mut cpu, mut mem) = setup(&[opcode, 0x02]);
        make_not_taken(&mut cpu);
        let (cycles, _) = cpu.step(&mut mem).unwrap();
        assert_eq!(cycles, 2, "untaken branch 0x{opcode:02X} must cost 2");
        assert_eq!(cpu.pc, 0x1002);
    }
}
