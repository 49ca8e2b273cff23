//! End-to-end scenarios: full searches over small specs and
//! verifier-level checks for the larger ones. Where a scenario needs a
//! relation the spec format cannot state directly (copy one location to
//! another, swap two registers), it is expressed as a family of
//! exhaustive-EXACT instantiations and every instantiation is checked.

use std::time::Duration;

use opt6502::optimizer::{Optimizer, SearchOptions};
use opt6502::parser::parse_spec;
use opt6502::spec::{MemoryRegion, OptimizationSpec};
use opt6502::value::Value;
use opt6502::verifier::Verifier;

fn search(spec: OptimizationSpec, options: SearchOptions) -> Option<Vec<u8>> {
    let mut optimizer = Optimizer::new(spec, options).unwrap();
    optimizer
        .run(Duration::from_secs(120))
        .best
        .map(|s| s.bytes)
}

// ---------- Scenario 1: zero the accumulator ----------

fn zero_a_spec() -> OptimizationSpec {
    parse_spec(
        "OPTIMIZE_FOR: size\n\
         CPU_OUT\n\
         A: 0x00\n\
         FLAGS_OUT\n\
         Z: 1\n\
         N: 0\n\
         RUN: 0x1000\n",
    )
    .unwrap()
}

#[test]
fn test_scenario_zero_accumulator() {
    let best = search(zero_a_spec(), SearchOptions::default()).expect("a solution exists");

    // LDA #$00 is optimal at two bytes; AND #$00 ties and is equally
    // acceptable. No single byte zeroes A for every input.
    assert_eq!(best.len(), 2);

    let verifier = Verifier::new(zero_a_spec());
    assert!(verifier.verify(&[0xA9, 0x00])); // LDA #$00

    // TXA depends on X, which is universally quantified
    let err = verifier.verify_with_explanation(&[0x8A]).unwrap_err();
    assert!(err.contains('A') || err.contains('Z'));
}

// ---------- Scenario 2: preserve A, set carry ----------

#[test]
fn test_scenario_preserve_a_set_carry() {
    let spec = parse_spec(
        "OPTIMIZE_FOR: size\n\
         CPU_OUT\n\
         A: SAME\n\
         FLAGS_OUT\n\
         C: 1\n\
         RUN: 0x1000\n",
    )
    .unwrap();

    let best = search(spec, SearchOptions::default()).expect("SEC exists");
    assert_eq!(best, vec![0x38]); // SEC
}

#[test]
fn test_speed_goal_keeps_searching_and_wins_on_cycles() {
    let spec = parse_spec(
        "OPTIMIZE_FOR: speed\n\
         CPU_OUT\n\
         A: SAME\n\
         FLAGS_OUT\n\
         C: 1\n\
         RUN: 0x1000\n",
    )
    .unwrap();

    let options = SearchOptions {
        opcode_filter: Some(vec![0x38, 0xEA]), // SEC, NOP
        ..SearchOptions::default()
    };
    let mut optimizer = Optimizer::new(spec, options).unwrap();
    let outcome = optimizer.run(Duration::from_secs(30));

    let best = outcome.best.expect("SEC exists");
    assert_eq!(best.bytes, vec![0x38]);
    assert_eq!(best.cycles, 2); // nothing beats a bare SEC
    assert!(!outcome.timed_out);
    // Speed searches keep going past the first hit
    assert!(outcome.sequences_tested > 1);
}

// ---------- Scenario 3: copy zero page $80 to $81 ----------

fn copy_spec(input: u8) -> OptimizationSpec {
    let mut spec = OptimizationSpec::default();
    spec.run_address = 0x1000;
    spec.input_memory = vec![MemoryRegion::new(0x80, vec![Value::Exact(input)])];
    spec.output_memory = vec![
        MemoryRegion::new(0x80, vec![Value::Same]),
        MemoryRegion::new(0x81, vec![Value::Exact(input)]),
    ];
    spec
}

#[test]
fn test_scenario_copy_zero_page() {
    let copy = [0xA5, 0x80, 0x85, 0x81]; // LDA $80; STA $81

    // The copy works for every instantiation of the input byte
    for input in [0x00, 0x42, 0xFF] {
        let verifier = Verifier::new(copy_spec(input));
        assert!(verifier.verify(&copy), "copy must verify for 0x{input:02X}");
    }

    // A hardcoded store only matches one instantiation
    let verifier = Verifier::new(copy_spec(0x42));
    let err = verifier
        .verify_with_explanation(&[0xA9, 0x00, 0x85, 0x81]) // LDA #$00; STA $81
        .unwrap_err();
    assert!(err.contains("0081"));
}

#[test]
fn test_scenario_copy_search_finds_four_bytes() {
    let options = SearchOptions {
        opcode_filter: Some(vec![0x85, 0xA5]), // STA zp, LDA zp
        ..SearchOptions::default()
    };
    let best = search(copy_spec(0x42), options).expect("copy exists");
    assert_eq!(best, vec![0xA5, 0x80, 0x85, 0x81]);
}

// ---------- Scenario 4: increment a memory byte ----------

fn increment_spec(input: u8, output: u8) -> OptimizationSpec {
    let mut spec = OptimizationSpec::default();
    spec.run_address = 0x1000;
    spec.input_memory = vec![MemoryRegion::new(0x10, vec![Value::Exact(input)])];
    spec.output_memory = vec![MemoryRegion::new(0x10, vec![Value::Exact(output)])];
    spec
}

#[test]
fn test_scenario_increment_memory() {
    let inc = [0xE6, 0x10]; // INC $10

    // Exhaustive-EXACT pair covering the wrap
    for (input, output) in [(0x00, 0x01), (0xFF, 0x00)] {
        let verifier = Verifier::new(increment_spec(input, output));
        assert!(verifier.verify(&inc));
    }

    // A constant store passes the first instantiation but not the wrap
    let constant = [0xA9, 0x01, 0x85, 0x10]; // LDA #$01; STA $10
    assert!(Verifier::new(increment_spec(0x00, 0x01)).verify(&constant));
    let err = Verifier::new(increment_spec(0xFF, 0x00))
        .verify_with_explanation(&constant)
        .unwrap_err();
    assert!(err.contains("0010"));
}

#[test]
fn test_scenario_increment_search() {
    let options = SearchOptions {
        opcode_filter: Some(vec![0x85, 0xA9, 0xC6, 0xE6]),
        ..SearchOptions::default()
    };
    let best = search(increment_spec(0x00, 0x01), options).expect("INC exists");
    assert_eq!(best, vec![0xE6, 0x10]);
}

// ---------- Scenario 5: swap A and X ----------

fn swap_spec(a: u8, x: u8) -> OptimizationSpec {
    let mut spec = OptimizationSpec::default();
    spec.run_address = 0x1000;
    spec.input_cpu.a = Value::Exact(a);
    spec.input_cpu.x = Value::Exact(x);
    spec.input_cpu.sp = Value::Exact(0xFF);
    spec.output_cpu.a = Value::Exact(x);
    spec.output_cpu.x = Value::Exact(a);
    spec.output_cpu.sp = Value::Same;
    // One stack byte is the only memory the candidate may touch
    spec.output_memory = vec![MemoryRegion::new(0x01FF, vec![Value::Any])];
    spec
}

#[test]
fn test_scenario_swap_a_x() {
    // PHA; TXA; TAY; PLA; TAX; TYA
    let swap = [0x48, 0x8A, 0xA8, 0x68, 0xAA, 0x98];

    for (a, x) in [(0x11, 0x22), (0xAB, 0x05), (0x00, 0xFF)] {
        let verifier = Verifier::new(swap_spec(a, x));
        assert!(
            verifier.verify(&swap),
            "swap must verify for A=0x{a:02X} X=0x{x:02X}"
        );
    }

    // TAX; TXA leaves both registers holding the old A
    let err = Verifier::new(swap_spec(0x11, 0x22))
        .verify_with_explanation(&[0xAA, 0x8A])
        .unwrap_err();
    assert!(err.contains("register"));
}

#[test]
fn test_scenario_swap_search_is_six_bytes() {
    // Pure transfers cannot swap A and X (X is only writable from A),
    // so the optimum routes one value through the stack: six one-byte
    // instructions.
    let options = SearchOptions {
        opcode_filter: Some(vec![0x48, 0x68, 0x8A, 0x98, 0xA8, 0xAA]),
        per_length_budget: 200_000,
        ..SearchOptions::default()
    };
    let best = search(swap_spec(0x11, 0x22), options).expect("stack swap exists");
    assert_eq!(best.len(), 6);

    // Whatever ordering won, it must be a genuine swap on the other
    // instantiations too
    for (a, x) in [(0xAB, 0x05), (0x3C, 0xC3)] {
        assert!(Verifier::new(swap_spec(a, x)).verify(&best));
    }
}

// ---------- Scenario 6: clear a four-byte block ----------

fn clear_block_spec() -> OptimizationSpec {
    parse_spec(
        "OPTIMIZE_FOR: size\n\
         MEMORY_OUT\n\
         0x0200: 0x00:4\n\
         RUN: 0x1000\n",
    )
    .unwrap()
}

#[test]
fn test_scenario_clear_block() {
    let clear = [
        0xA9, 0x00, // LDA #$00
        0x8D, 0x00, 0x02, // STA $0200
        0x8D, 0x01, 0x02, // STA $0201
        0x8D, 0x02, 0x02, // STA $0202
        0x8D, 0x03, 0x02, // STA $0203
    ];

    let verifier = Verifier::new(clear_block_spec());
    assert!(verifier.verify(&clear));

    // Dropping the last store leaves $0203 unconstrained only if the
    // input already held zero; the input is outside the declared
    // regions, so it reads as zero... but the postcondition checks the
    // byte explicitly, and an incomplete clear with a nonzero A fails.
    let wrong = [
        0xA9, 0x01, // LDA #$01
        0x8D, 0x00, 0x02,
        0x8D, 0x01, 0x02,
        0x8D, 0x02, 0x02,
        0x8D, 0x03, 0x02,
    ];
    let err = verifier.verify_with_explanation(&wrong).unwrap_err();
    assert!(err.contains("0200"));
}

#[test]
fn test_scenario_clear_block_with_x_loop_alternative() {
    // The indexed variant also verifies (LDX #$00; LDA #$00; then
    // STA $0200,X / INX four times) even though it is longer.
    let indexed = [
        0xA2, 0x00, // LDX #$00
        0xA9, 0x00, // LDA #$00
        0x9D, 0x00, 0x02, // STA $0200,X
        0xE8, // INX
        0x9D, 0x00, 0x02, 0xE8, 0x9D, 0x00, 0x02, 0xE8, 0x9D, 0x00, 0x02,
    ];
    assert!(Verifier::new(clear_block_spec()).verify(&indexed));
}
