//! # Specification File Parser
//!
//! Parses the line-oriented spec format into an
//! [`OptimizationSpec`](crate::spec::OptimizationSpec):
//!
//! ```text
//! # Zero the accumulator, as small as possible
//! OPTIMIZE_FOR: size
//! CPU_OUT
//!     A: 0x00
//! FLAGS_OUT
//!     Z: 1
//!     N: 0
//! MEMORY_IN
//!     0x80: ? ?
//! MEMORY_OUT
//!     0x80: SAME:2
//! RUN: 0x1000
//! ```
//!
//! Directives are recognized at line granularity: `OPTIMIZE_FOR`,
//! `CPU_IN`/`CPU_OUT`, `FLAGS_IN`/`FLAGS_OUT`, `MEMORY_IN`/`MEMORY_OUT`,
//! `OPTIMIZE`/`OPTIMIZE_RO` ... `END`, and `RUN`. Comments start with
//! `#` or `;`. Memory values accept a `:N` repeat suffix (`0x00:4`
//! expands to four zero bytes). `SAME` and `EQU` are accepted in output
//! blocks only.

use tracing::debug;

use crate::spec::{CodeBlock, CpuValues, FlagValues, Goal, MemoryRegion, OptimizationSpec};
use crate::value::{parse_numeric, Value};
use crate::SpecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    CpuIn,
    CpuOut,
    FlagsIn,
    FlagsOut,
    MemoryIn,
    MemoryOut,
}

/// Parses spec source text into a validated [`OptimizationSpec`].
///
/// Returns a [`SpecError`] carrying the 1-based line number for any
/// lexical or structural problem.
pub fn parse_spec(source: &str) -> Result<OptimizationSpec, SpecError> {
    let mut spec = OptimizationSpec::default();
    let mut block = Block::None;
    let mut saw_run = false;

    let lines: Vec<&str> = source.lines().collect();
    let mut index = 0;

    while index < lines.len() {
        let line_no = index + 1;
        let text = strip_comment(lines[index]).trim();
        index += 1;

        if text.is_empty() {
            continue;
        }

        let (head, rest) = match text.split_once(':') {
            Some((head, rest)) => (head.trim(), Some(rest.trim())),
            None => (text, None),
        };
        let keyword = head.to_ascii_uppercase();

        match keyword.as_str() {
            "OPTIMIZE_FOR" => {
                let goal_text = rest.unwrap_or_default();
                spec.goal = match goal_text.to_ascii_lowercase().as_str() {
                    "size" => Goal::Size,
                    "speed" => Goal::Speed,
                    other => {
                        return Err(parse_error(
                            line_no,
                            format!("unknown optimization goal '{other}'"),
                        ))
                    }
                };
                debug!(goal = ?spec.goal, "parsed optimization goal");
                block = Block::None;
            }
            "CPU_IN" => block = Block::CpuIn,
            "CPU_OUT" => block = Block::CpuOut,
            "FLAGS_IN" => block = Block::FlagsIn,
            "FLAGS_OUT" => block = Block::FlagsOut,
            "MEMORY_IN" => block = Block::MemoryIn,
            "MEMORY_OUT" => block = Block::MemoryOut,
            "RUN" => {
                let addr_text = rest.ok_or_else(|| {
                    parse_error(line_no, "expected address after RUN".to_string())
                })?;
                spec.run_address = parse_address(addr_text, line_no)?;
                saw_run = true;
                block = Block::None;
            }
            _ if keyword.starts_with("OPTIMIZE_RO") || keyword.starts_with("OPTIMIZE") => {
                let read_only = keyword.starts_with("OPTIMIZE_RO");
                let directive_len = if read_only { "OPTIMIZE_RO".len() } else { "OPTIMIZE".len() };
                let addr_text = head[directive_len..].trim();
                if addr_text.is_empty() {
                    return Err(parse_error(
                        line_no,
                        "expected address after OPTIMIZE".to_string(),
                    ));
                }
                let address = parse_address(addr_text, line_no)?;

                // Collect bytes, continuing across lines until END
                let mut bytes = Vec::new();
                let mut done = collect_code_bytes(
                    rest.unwrap_or_default(),
                    &mut bytes,
                    line_no,
                )?;
                while !done {
                    if index >= lines.len() {
                        return Err(parse_error(
                            line_no,
                            "OPTIMIZE block missing END".to_string(),
                        ));
                    }
                    let cont = strip_comment(lines[index]).trim();
                    let cont_no = index + 1;
                    index += 1;
                    done = collect_code_bytes(cont, &mut bytes, cont_no)?;
                }

                debug!(address, len = bytes.len(), read_only, "parsed code block");
                spec.code_blocks.push(CodeBlock {
                    address,
                    bytes,
                    read_only,
                });
                block = Block::None;
            }
            _ => {
                let value_text = rest.ok_or_else(|| {
                    parse_error(line_no, format!("unexpected line '{text}'"))
                })?;
                match block {
                    Block::CpuIn => {
                        parse_register_line(&mut spec.input_cpu, head, value_text, false, line_no)?
                    }
                    Block::CpuOut => {
                        parse_register_line(&mut spec.output_cpu, head, value_text, true, line_no)?
                    }
                    Block::FlagsIn => {
                        parse_flag_line(&mut spec.input_flags, head, value_text, false, line_no)?
                    }
                    Block::FlagsOut => {
                        parse_flag_line(&mut spec.output_flags, head, value_text, true, line_no)?
                    }
                    Block::MemoryIn => {
                        let region = parse_memory_line(head, value_text, false, line_no)?;
                        spec.input_memory.push(region);
                    }
                    Block::MemoryOut => {
                        let region = parse_memory_line(head, value_text, true, line_no)?;
                        spec.output_memory.push(region);
                    }
                    Block::None => {
                        return Err(parse_error(
                            line_no,
                            format!("unexpected line '{text}' outside any block"),
                        ))
                    }
                }
            }
        }
    }

    if !saw_run {
        return Err(SpecError::MissingRunAddress);
    }

    spec.validate()?;
    Ok(spec)
}

fn strip_comment(line: &str) -> &str {
    let end = line
        .find(|c| c == '#' || c == ';')
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_error(line: usize, message: String) -> SpecError {
    SpecError::Parse { line, message }
}

fn parse_address(text: &str, line_no: usize) -> Result<u16, SpecError> {
    parse_numeric(text)
        .map_err(|e| parse_error(line_no, e.to_string()))
}

/// Parses a symbolic value, enforcing the output-only keywords.
fn parse_value(text: &str, is_output: bool, line_no: usize) -> Result<Value, SpecError> {
    let upper = text.to_ascii_uppercase();
    match upper.as_str() {
        "SAME" => {
            if !is_output {
                return Err(SpecError::OutputOnlyKeyword {
                    line: line_no,
                    keyword: "SAME",
                });
            }
            Ok(Value::Same)
        }
        "EQU" => {
            if !is_output {
                return Err(SpecError::OutputOnlyKeyword {
                    line: line_no,
                    keyword: "EQU",
                });
            }
            Ok(Value::Equ)
        }
        _ => Value::parse(text).map_err(|e| parse_error(line_no, e.to_string())),
    }
}

fn parse_register_line(
    cpu: &mut CpuValues,
    name: &str,
    value_text: &str,
    is_output: bool,
    line_no: usize,
) -> Result<(), SpecError> {
    let value = parse_value(value_text, is_output, line_no)?;
    match name.to_ascii_uppercase().as_str() {
        "A" => cpu.a = value,
        "X" => cpu.x = value,
        "Y" => cpu.y = value,
        "SP" => cpu.sp = value,
        other => {
            return Err(parse_error(
                line_no,
                format!("unknown register '{other}'"),
            ))
        }
    }
    Ok(())
}

fn parse_flag_line(
    flags: &mut FlagValues,
    name: &str,
    value_text: &str,
    is_output: bool,
    line_no: usize,
) -> Result<(), SpecError> {
    let value = parse_value(value_text, is_output, line_no)?;
    if let Value::Exact(v) = value {
        if v > 1 {
            return Err(parse_error(
                line_no,
                format!("flag value must be 0 or 1, got {v}"),
            ));
        }
    }
    match name.to_ascii_uppercase().as_str() {
        "C" => flags.c = value,
        "Z" => flags.z = value,
        "I" => flags.i = value,
        "D" => flags.d = value,
        "B" => flags.b = value,
        "V" => flags.v = value,
        "N" => flags.n = value,
        other => {
            return Err(parse_error(line_no, format!("unknown flag '{other}'")))
        }
    }
    Ok(())
}

/// Parses a `ADDRESS: v v v ...` memory line. Each value token may carry
/// a `:N` repeat suffix.
fn parse_memory_line(
    addr_text: &str,
    values_text: &str,
    is_output: bool,
    line_no: usize,
) -> Result<MemoryRegion, SpecError> {
    let address = parse_address(addr_text, line_no)?;
    let mut bytes = Vec::new();

    for token in values_text.split_whitespace() {
        let (value_text, repeat) = match token.rsplit_once(':') {
            Some((value, count)) if count.chars().all(|c| c.is_ascii_digit()) => {
                let repeat: usize = count.parse().map_err(|_| {
                    parse_error(line_no, format!("bad repeat count in '{token}'"))
                })?;
                (value, repeat)
            }
            _ => (token, 1),
        };
        if repeat == 0 {
            return Err(parse_error(
                line_no,
                format!("repeat count must be positive in '{token}'"),
            ));
        }
        let value = parse_value(value_text, is_output, line_no)?;
        bytes.extend(std::iter::repeat(value).take(repeat));
    }

    if bytes.is_empty() {
        return Err(parse_error(
            line_no,
            "memory region needs at least one value".to_string(),
        ));
    }

    Ok(MemoryRegion::new(address, bytes))
}

/// Adds the code bytes on one line to `bytes`. Returns true when the END
/// terminator was seen.
fn collect_code_bytes(
    text: &str,
    bytes: &mut Vec<u8>,
    line_no: usize,
) -> Result<bool, SpecError> {
    for token in text.split_whitespace() {
        if token.eq_ignore_ascii_case("end") {
            return Ok(true);
        }
        bytes.push(parse_code_byte(token, line_no)?);
    }
    Ok(false)
}

/// Parses a byte inside a code block. Bare digit strings are
/// hexadecimal here (machine-code listings), unlike memory values.
fn parse_code_byte(text: &str, line_no: usize) -> Result<u8, SpecError> {
    if text.contains('?') {
        return Err(parse_error(
            line_no,
            "wildcard values are not allowed in code blocks".to_string(),
        ));
    }
    let number = if text.chars().all(|c| c.is_ascii_hexdigit()) && !text.is_empty() {
        u16::from_str_radix(text, 16)
            .map_err(|_| parse_error(line_no, format!("bad code byte '{text}'")))?
    } else {
        parse_numeric(text).map_err(|e| parse_error(line_no, e.to_string()))?
    };
    if number > 0xFF {
        return Err(parse_error(
            line_no,
            format!("code byte '{text}' out of range"),
        ));
    }
    Ok(number as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_spec() {
        let spec = parse_spec(
            "OPTIMIZE_FOR: size\n\
             CPU_OUT\n\
             A: 0x00\n\
             RUN: 0x1000\n",
        )
        .unwrap();
        assert_eq!(spec.goal, Goal::Size);
        assert_eq!(spec.run_address, 0x1000);
        assert_eq!(spec.output_cpu.a, Value::Exact(0));
        assert_eq!(spec.output_cpu.x, Value::Any);
    }

    #[test]
    fn test_parse_flags_and_comments() {
        let spec = parse_spec(
            "# goal line\n\
             OPTIMIZE_FOR: speed\n\
             FLAGS_OUT\n\
             C: 1 ; set carry\n\
             Z: 0\n\
             RUN: $2000\n",
        )
        .unwrap();
        assert_eq!(spec.goal, Goal::Speed);
        assert_eq!(spec.output_flags.c, Value::Exact(1));
        assert_eq!(spec.output_flags.z, Value::Exact(0));
        assert_eq!(spec.output_flags.n, Value::Any);
    }

    #[test]
    fn test_parse_memory_with_repeat() {
        let spec = parse_spec(
            "MEMORY_OUT\n\
             0x0200: 0x00:4\n\
             RUN: 0x1000\n",
        )
        .unwrap();
        assert_eq!(spec.output_memory.len(), 1);
        let region = &spec.output_memory[0];
        assert_eq!(region.address, 0x0200);
        assert_eq!(region.bytes, vec![Value::Exact(0); 4]);
    }

    #[test]
    fn test_parse_memory_wildcards_and_same() {
        let spec = parse_spec(
            "MEMORY_IN\n\
             0x80: ?\n\
             MEMORY_OUT\n\
             0x80: SAME\n\
             0x81: SAME\n\
             RUN: 0x1000\n",
        )
        .unwrap();
        assert_eq!(spec.input_memory[0].bytes, vec![Value::Any]);
        assert_eq!(spec.output_memory[0].bytes, vec![Value::Same]);
    }

    #[test]
    fn test_same_rejected_in_input_block() {
        let err = parse_spec(
            "MEMORY_IN\n\
             0x80: SAME\n\
             RUN: 0x1000\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SpecError::OutputOnlyKeyword { keyword: "SAME", line: 2 }
        ));
    }

    #[test]
    fn test_parse_code_block() {
        let spec = parse_spec(
            "OPTIMIZE 0xC000: A9 00 8D 00 02 END\n\
             RUN: 0xC000\n",
        )
        .unwrap();
        assert_eq!(spec.code_blocks.len(), 1);
        let block = &spec.code_blocks[0];
        assert_eq!(block.address, 0xC000);
        assert_eq!(block.bytes, vec![0xA9, 0x00, 0x8D, 0x00, 0x02]);
        assert!(!block.read_only);
    }

    #[test]
    fn test_parse_multiline_readonly_code_block() {
        let spec = parse_spec(
            "OPTIMIZE_RO 0xC000:\n\
             A9 01\n\
             60\n\
             END\n\
             RUN: 0x1000\n",
        )
        .unwrap();
        let block = &spec.code_blocks[0];
        assert!(block.read_only);
        assert_eq!(block.bytes, vec![0xA9, 0x01, 0x60]);
    }

    #[test]
    fn test_missing_run_address() {
        assert!(matches!(
            parse_spec("OPTIMIZE_FOR: size\n"),
            Err(SpecError::MissingRunAddress)
        ));
    }

    #[test]
    fn test_unterminated_code_block() {
        let err = parse_spec("OPTIMIZE 0xC000: A9 00\nRUN: 0x1000\n").unwrap_err();
        assert!(matches!(err, SpecError::Parse { .. }));
    }

    #[test]
    fn test_unknown_register_reports_line() {
        let err = parse_spec(
            "CPU_IN\n\
             Q: 0\n\
             RUN: 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::Parse { line: 2, .. }));
    }
}
