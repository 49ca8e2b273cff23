//! # Symbolic Byte Values
//!
//! A [`Value`] is the tri-state (plus one reserved state) byte used by
//! optimization specifications:
//!
//! - `Exact(v)`: the byte must hold `v`.
//! - `Any`: unconstrained; universally quantified on the input side,
//!   don't-care on the output side.
//! - `Same`: the output byte must equal the corresponding input byte
//!   (preservation). Only valid in output contexts.
//! - `Equ`: reserved for code-block equivalence in the spec syntax;
//!   parsed but not interpreted by the search core.
//!
//! The literal grammar accepted by [`Value::parse`] and
//! [`parse_numeric`] covers `0xNN`, `$NN`, `NNh`, `0bNNN`, `%NNN`,
//! plain decimal, and the `?`/`??`/`ANY` wildcard spellings.

use thiserror::Error;

/// Error produced when a value or numeric literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value literal '{literal}'")]
pub struct ValueParseError {
    /// The offending literal text.
    pub literal: String,
}

/// A symbolic byte in an optimization specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// The byte must hold exactly this value.
    Exact(u8),
    /// The byte is unconstrained.
    Any,
    /// The output byte must equal the input byte at the same location.
    Same,
    /// Code-block equivalence marker; not interpreted by the core.
    Equ,
}

impl Value {
    /// True for `Exact`.
    pub fn is_exact(&self) -> bool {
        matches!(self, Value::Exact(_))
    }

    /// The exact byte, if this is an `Exact` value.
    pub fn exact(&self) -> Option<u8> {
        match self {
            Value::Exact(v) => Some(*v),
            _ => None,
        }
    }

    /// Parses a value literal: a numeric literal in any supported base,
    /// or one of the wildcard spellings `?`, `??`, `ANY`.
    ///
    /// The keywords `SAME` and `EQU` are handled by the spec parser
    /// because their validity depends on context (output blocks only).
    ///
    /// # Examples
    ///
    /// ```
    /// use opt6502::value::Value;
    ///
    /// assert_eq!(Value::parse("0x2A").unwrap(), Value::Exact(0x2A));
    /// assert_eq!(Value::parse("$ff").unwrap(), Value::Exact(0xFF));
    /// assert_eq!(Value::parse("%1010").unwrap(), Value::Exact(0b1010));
    /// assert_eq!(Value::parse("?").unwrap(), Value::Any);
    /// ```
    pub fn parse(text: &str) -> Result<Value, ValueParseError> {
        let trimmed = text.trim();
        if trimmed == "?" || trimmed == "??" || trimmed.eq_ignore_ascii_case("any") {
            return Ok(Value::Any);
        }

        let number = parse_numeric(trimmed)?;
        if number > 0xFF {
            return Err(ValueParseError {
                literal: text.to_string(),
            });
        }
        Ok(Value::Exact(number as u8))
    }
}

/// Parses a numeric literal in any of the supported bases, up to 16 bits.
///
/// Accepted forms: `0xNNNN` / `$NNNN` / `NNNNh` (hexadecimal),
/// `0bNNN` / `%NNN` (binary), and decimal. Bare strings of hex digits
/// that contain a letter (e.g. `1A`) also parse as hexadecimal.
pub fn parse_numeric(text: &str) -> Result<u16, ValueParseError> {
    let trimmed = text.trim();
    let err = || ValueParseError {
        literal: text.to_string(),
    };

    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u16::from_str_radix(hex, 16)
    } else if let Some(hex) = trimmed.strip_prefix('$') {
        u16::from_str_radix(hex, 16)
    } else if let Some(hex) = trimmed
        .strip_suffix('h')
        .or_else(|| trimmed.strip_suffix('H'))
    {
        u16::from_str_radix(hex, 16)
    } else if let Some(bin) = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
    {
        u16::from_str_radix(bin, 2)
    } else if let Some(bin) = trimmed.strip_prefix('%') {
        u16::from_str_radix(bin, 2)
    } else if !trimmed.is_empty()
        && trimmed.chars().all(|c| c.is_ascii_hexdigit())
        && trimmed.chars().any(|c| c.is_ascii_alphabetic())
    {
        // All hex digits with at least one letter: implicit hexadecimal
        u16::from_str_radix(trimmed, 16)
    } else {
        trimmed.parse::<u16>()
    };

    parsed.map_err(|_| err())
}
