//! Simple TOML parser for the scoreboard configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! scoreboard.toml. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings
//! - Arrays and inline tables
//! - Dotted keys

use heapless::String as HString;

use scoreline_core::config::{ScoreboardConfig, MAX_NAME_LEN};

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or does not fit
    InvalidValue,
    /// Line is neither a header nor a key = value pair
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Link,
    Display,
    Input,
    Feedback,
}

/// Parse TOML text into a [`ScoreboardConfig`]
///
/// Keys that are absent keep their defaults. Unknown keys are ignored.
pub fn parse_config(input: &str) -> Result<ScoreboardConfig, ParseError> {
    let mut config = ScoreboardConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a section header like "link"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "link" => Ok(Section::Link),
        "display" => Ok(Section::Display),
        "input" => Ok(Section::Input),
        "feedback" => Ok(Section::Feedback),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ScoreboardConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Link => match key {
            "device_name" => {
                let name = parse_string(value)?;
                config.link.device_name =
                    HString::<MAX_NAME_LEN>::try_from(name).map_err(|_| ParseError::InvalidValue)?;
            }
            "baudrate" => config.link.baudrate = parse_int(value)?,
            _ => {} // Ignore unknown keys
        },
        Section::Display => {
            if key == "intensity" {
                config.display.intensity = parse_int(value)?;
            }
        }
        Section::Input => {
            if key == "debounce_ms" {
                config.input.debounce_ms = parse_int(value)?;
            }
        }
        Section::Feedback => {
            if key == "pulse_ms" {
                config.feedback.pulse_ms = parse_int(value)?;
            }
        }
        // No root-level keys
        Section::Root => {}
    }
    Ok(())
}
