//! # Solution Formatter
//!
//! Renders a solved byte sequence in the supported output shapes:
//! an assembly listing, a raw hex dump, a C array, or BASIC DATA
//! statements, plus a small statistics block.

use std::fmt::Write as _;

use crate::disassembler::disassemble;

/// Output format for a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Assembly listing with per-instruction size/cycle comments.
    Assembly,
    /// Plain hex dump, 16 bytes per row.
    Binary,
    /// C array literal.
    CArray,
    /// BASIC DATA statements.
    BasicData,
}

impl OutputFormat {
    /// Parses a CLI format name.
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.to_ascii_lowercase().as_str() {
            "asm" => Some(OutputFormat::Assembly),
            "bin" => Some(OutputFormat::Binary),
            "c" => Some(OutputFormat::CArray),
            "basic" => Some(OutputFormat::BasicData),
            _ => None,
        }
    }
}

/// Renders `solution` at `run_address` in the requested format.
pub fn format_solution(solution: &[u8], run_address: u16, format: OutputFormat) -> String {
    match format {
        OutputFormat::Assembly => format_assembly(solution, run_address),
        OutputFormat::Binary => format_hex(solution),
        OutputFormat::CArray => format_c_array(solution),
        OutputFormat::BasicData => format_basic_data(solution),
    }
}

/// A short statistics block: size in bytes, cycles when known.
pub fn format_statistics(solution: &[u8], cycles: Option<u64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Size: {} bytes", solution.len());
    match cycles {
        Some(cycles) => {
            let _ = writeln!(out, "Cycles: {cycles}");
        }
        None => {
            let _ = writeln!(out, "Cycles: unknown");
        }
    }
    out
}

fn format_assembly(solution: &[u8], run_address: u16) -> String {
    let mut out = String::new();
    for instr in disassemble(solution, run_address) {
        let text = if instr.mnemonic == ".byte" {
            format!(".byte ${:02X}", instr.opcode)
        } else {
            instr.to_assembly()
        };
        let _ = writeln!(
            out,
            "        {:<16}; {} bytes, {} cycles",
            text, instr.size_bytes, instr.base_cycles
        );
    }
    out
}

fn format_hex(solution: &[u8]) -> String {
    let mut out = String::new();
    for (i, byte) in solution.iter().enumerate() {
        if i > 0 {
            out.push(if i % 16 == 0 { '\n' } else { ' ' });
        }
        let _ = write!(out, "{byte:02X}");
    }
    out.push('\n');
    out
}

fn format_c_array(solution: &[u8]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "const unsigned char optimized_code[{}] = {{",
        solution.len()
    );
    for chunk in solution.chunks(8) {
        let row: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
        let _ = writeln!(out, "    {},", row.join(", "));
    }
    let _ = writeln!(out, "}};");
    out
}

fn format_basic_data(solution: &[u8]) -> String {
    let mut out = String::new();
    let mut line_no = 10;
    for chunk in solution.chunks(8) {
        let row: Vec<String> = chunk.iter().map(|b| b.to_string()).collect();
        let _ = writeln!(out, "{} DATA {}", line_no, row.join(","));
        line_no += 10;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: [u8; 5] = [0xA9, 0x00, 0x8D, 0x00, 0x02]; // LDA #$00; STA $0200

    #[test]
    fn test_assembly_listing() {
        let text = format_solution(&PROGRAM, 0x1000, OutputFormat::Assembly);
        assert!(text.contains("LDA #$00"));
        assert!(text.contains("STA $0200"));
        assert!(text.contains("; 2 bytes, 2 cycles"));
    }

    #[test]
    fn test_hex_dump() {
        let text = format_solution(&PROGRAM, 0x1000, OutputFormat::Binary);
        assert_eq!(text, "A9 00 8D 00 02\n");
    }

    #[test]
    fn test_c_array() {
        let text = format_solution(&PROGRAM, 0x1000, OutputFormat::CArray);
        assert!(text.starts_with("const unsigned char optimized_code[5]"));
        assert!(text.contains("0xA9, 0x00, 0x8D, 0x00, 0x02"));
    }

    #[test]
    fn test_basic_data() {
        let text = format_solution(&PROGRAM, 0x1000, OutputFormat::BasicData);
        assert_eq!(text, "10 DATA 169,0,141,0,2\n");
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("asm"), Some(OutputFormat::Assembly));
        assert_eq!(OutputFormat::from_name("BIN"), Some(OutputFormat::Binary));
        assert_eq!(OutputFormat::from_name("nope"), None);
    }

    #[test]
    fn test_statistics() {
        let text = format_statistics(&PROGRAM, Some(6));
        assert!(text.contains("Size: 5 bytes"));
        assert!(text.contains("Cycles: 6"));
    }
}
