//! Simple TOML parser for the screen configuration
//!
//! This is a minimal, allocation-free parser that handles only the subset
//! needed for `screen.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - [section] headers
//! - Comments (# ...), including trailing comments after values
//!
//! NOT supported:
//! - Booleans, floats, arrays and inline tables
//! - Multi-line strings, escapes inside strings
//! - Dotted keys and nested section headers
//!
//! Unknown sections and keys are rejected so a typo cannot silently
//! leave a default in place.

use crate::controller::EndswitchPolicy;
use crate::infrared::PreambleCheck;

use super::types::ScreenConfig;

/// Parse error, with the 1-based line it occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed or unknown section header
    InvalidSection { line: usize },
    /// Line is neither a header nor `key = value`
    InvalidLine { line: usize },
    /// Key not known in this section
    UnknownKey { line: usize },
    /// Value has the wrong type or is out of range
    InvalidValue { line: usize },
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::InvalidSection { line } => write!(f, "line {}: invalid section", line),
            ParseError::InvalidLine { line } => write!(f, "line {}: expected key = value", line),
            ParseError::UnknownKey { line } => write!(f, "line {}: unknown key", line),
            ParseError::InvalidValue { line } => write!(f, "line {}: invalid value", line),
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Travel,
    Timing,
    Infrared,
    Endswitch,
}

/// A parsed scalar value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value<'a> {
    Integer(i64),
    String(&'a str),
}

/// Parse TOML configuration into a [`ScreenConfig`]
///
/// Keys that are not present keep their default values. The result is
/// not validated; call [`ScreenConfig::validate`] afterwards.
pub fn parse_config(input: &str) -> Result<ScreenConfig, ParseError> {
    let mut config = ScreenConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ParseError::InvalidSection { line: line_no });
            }
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(ParseError::InvalidSection { line: line_no })?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine { line: line_no })?;
        let value = parse_value(value).ok_or(ParseError::InvalidValue { line: line_no })?;
        apply_value(&mut config, section, key, value, line_no)?;
    }

    Ok(config)
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "travel" => Some(Section::Travel),
        "timing" => Some(Section::Timing),
        "infrared" => Some(Section::Infrared),
        "endswitch" => Some(Section::Endswitch),
        _ => None,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_value(value: &str) -> Option<Value<'_>> {
    if let Some(inner) = value.strip_prefix('"') {
        let inner = inner.strip_suffix('"')?;
        if inner.contains('"') {
            return None;
        }
        return Some(Value::String(inner));
    }
    // TOML allows underscores as digit separators
    let mut digits: heapless::String<24> = heapless::String::new();
    for ch in value.chars().filter(|&c| c != '_') {
        digits.push(ch).ok()?;
    }
    digits.parse::<i64>().ok().map(Value::Integer)
}

fn apply_value(
    config: &mut ScreenConfig,
    section: Section,
    key: &str,
    value: Value<'_>,
    line: usize,
) -> Result<(), ParseError> {
    let invalid = ParseError::InvalidValue { line };
    match (section, key) {
        (Section::Travel, "up_stop") => config.travel.up_stop = integer(value).ok_or(invalid)?,
        (Section::Travel, "down_stop") => {
            config.travel.down_stop = integer(value).ok_or(invalid)?
        }
        (Section::Timing, "rotation_timeout_ms") => {
            config.timing.rotation_timeout_ms = integer(value).ok_or(invalid)?
        }
        (Section::Timing, "extra_buttons_ms") => {
            config.timing.extra_buttons_ms = integer(value).ok_or(invalid)?
        }
        (Section::Infrared, "sample_period_us") => {
            config.infrared.sample_period_us = integer(value).ok_or(invalid)?
        }
        (Section::Infrared, "bit_threshold_us") => {
            config.infrared.bit_threshold_us = integer(value).ok_or(invalid)?
        }
        (Section::Infrared, "end_of_signal_us") => {
            config.infrared.end_of_signal_us = integer(value).ok_or(invalid)?
        }
        (Section::Infrared, "preamble") => {
            config.infrared.preamble = match value {
                Value::String("strict") => PreambleCheck::Strict,
                Value::String("lenient") => PreambleCheck::Lenient,
                _ => return Err(invalid),
            }
        }
        (Section::Endswitch, "policy") => {
            config.endswitch.policy = match value {
                Value::String("ignore_while_down") => EndswitchPolicy::IgnoreWhileDown,
                Value::String("always_home") => EndswitchPolicy::AlwaysHome,
                _ => return Err(invalid),
            }
        }
        _ => return Err(ParseError::UnknownKey { line }),
    }
    Ok(())
}

/// Range-checked integer conversion
fn integer<T: TryFrom<i64>>(value: Value<'_>) -> Option<T> {
    match value {
        Value::Integer(n) => T::try_from(n).ok(),
        _ => None,
    }
}
