//! Tests for ADC in binary and NMOS decimal mode.
//!
//! Covers the documented flag semantics, the signed-overflow boundary,
//! and the page-crossing cycle penalty on indexed reads.

use opt6502::{Cpu, FlatMemory};

/// CPU positioned at 0x1000 over the given program bytes.
fn setup(program: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = FlatMemory::new();
    mem.load(0x1000, program);
    let mut cpu = Cpu::new();
    cpu.pc = 0x1000;
    (cpu, mem)
}

#[test]
fn test_adc_immediate_basic() {
    let (mut cpu, mut mem) = setup(&[0x69, 0x05]); // ADC #$05
    cpu.a = 0x10;

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x15);
    assert_eq!(cycles, 2);
    assert!(!cpu.flag_c);
    assert!(!cpu.flag_z);
    assert!(!cpu.flag_v);
    assert!(!cpu.flag_n);
}

#[test]
fn test_adc_carry_in_and_out() {
    let (mut cpu, mut mem) = setup(&[0x69, 0xFF]); // ADC #$FF
    cpu.a = 0x01;
    cpu.flag_c = true;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x01); // 0x01 + 0xFF + 1 = 0x101
    assert!(cpu.flag_c);
    assert!(!cpu.flag_z);
}

#[test]
fn test_adc_signed_overflow_boundary() {
    // 0x7F + 0x01 with C=0: V=1, N=1, Z=0, C=0, A=0x80
    let (mut cpu, mut mem) = setup(&[0x69, 0x01]);
    cpu.a = 0x7F;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x80);
    assert!(cpu.flag_v);
    assert!(cpu.flag_n);
    assert!(!cpu.flag_z);
    assert!(!cpu.flag_c);
}

#[test]
fn test_adc_no_overflow_on_mixed_signs() {
    let (mut cpu, mut mem) = setup(&[0x69, 0xFF]); // ADC #-1
    cpu.a = 0x10;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x0F);
    assert!(!cpu.flag_v);
    assert!(cpu.flag_c); // unsigned wrap
}

#[test]
fn test_adc_decimal_simple() {
    // BCD 0x09 + 0x01 (D=1, C=0) = 0x10, C=0 on NMOS
    let (mut cpu, mut mem) = setup(&[0x69, 0x01]);
    cpu.a = 0x09;
    cpu.flag_d = true;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x10);
    assert!(!cpu.flag_c);
}

#[test]
fn test_adc_decimal_carry_out() {
    // BCD 0x99 + 0x01 = 0x00 with carry
    let (mut cpu, mut mem) = setup(&[0x69, 0x01]);
    cpu.a = 0x99;
    cpu.flag_d = true;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flag_c);
}

#[test]
fn test_adc_decimal_overflow_is_high_bit_of_corrected_sum() {
    // Decimal-mode V is not the binary signed-overflow test: it is set
    // whenever the corrected sum has any bit from 7 up. 0x90 + 0x01
    // stays 0x91, where the signed-overflow XOR would leave V clear.
    let (mut cpu, mut mem) = setup(&[0x69, 0x01]);
    cpu.a = 0x90;
    cpu.flag_d = true;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x91);
    assert!(cpu.flag_v);
    assert!(cpu.flag_n);
    assert!(!cpu.flag_c);
    assert!(!cpu.flag_z);
}

#[test]
fn test_adc_decimal_negative_from_pre_correction_sum() {
    // 0x50 + 0x50 corrects to 0x00 with carry out, but N reflects the
    // pre-correction intermediate 0xA0 and V the corrected 0x100.
    let (mut cpu, mut mem) = setup(&[0x69, 0x50]);
    cpu.a = 0x50;
    cpu.flag_d = true;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flag_n);
    assert!(cpu.flag_v);
    assert!(cpu.flag_c);
    assert!(!cpu.flag_z); // Z tracks the binary sum 0xA0
}

#[test]
fn test_adc_decimal_zero_flag_from_binary_sum() {
    // NMOS quirk: Z reflects the binary sum, not the adjusted result.
    // 0x99 + 0x67 = 0x100 binary (Z set), decimal result 0x66.
    let (mut cpu, mut mem) = setup(&[0x69, 0x67]);
    cpu.a = 0x99;
    cpu.flag_d = true;

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x66);
    assert!(cpu.flag_z);
    assert!(cpu.flag_c);
}

#[test]
fn test_adc_absolute_x_page_cross_penalty() {
    // ADC $10F0,X with X=0x20 crosses into $1110: 4+1 cycles
    let (mut cpu, mut mem) = setup(&[0x7D, 0xF0, 0x10]);
    mem.load(0x1110, &[0x02]);
    cpu.x = 0x20;
    cpu.a = 0x01;

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x03);
    assert_eq!(cycles, 5);
}

#[test]
fn test_adc_absolute_x_no_penalty_same_page() {
    let (mut cpu, mut mem) = setup(&[0x7D, 0x00, 0x11]);
    mem.load(0x1110, &[0x02]);
    cpu.x = 0x10;
    cpu.a = 0x01;

    let (cycles, _) = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a, 0x03);
    assert_eq!(cycles, 4);
}
