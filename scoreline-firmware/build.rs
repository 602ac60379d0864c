//! Build script for scoreline-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates scoreboard.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest name an HC-06 module accepts
const MAX_DEVICE_NAME_LEN: usize = 20;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate scoreboard.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=scoreboard.toml");

    let config_path = Path::new("scoreboard.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: scoreboard.toml not found!                               ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds scoreboard.toml at build time.              ║\n\
            ║  Please create one in the scoreline-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read scoreboard.toml                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in scoreboard.toml                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_link(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_durations(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid scoreboard configuration                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=scoreboard.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject unknown top-level sections; every known section is optional
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };

    for (name, value) in table {
        if !["link", "display", "input", "feedback"].contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

fn validate_link(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(link) = config.get("link") else {
        return;
    };

    match link.get("device_name") {
        Some(toml::Value::String(name)) => {
            if name.is_empty() {
                errors.push("[link] device_name cannot be empty".to_string());
            }
            if name.len() > MAX_DEVICE_NAME_LEN {
                errors.push(format!(
                    "[link] device_name longer than {} characters",
                    MAX_DEVICE_NAME_LEN
                ));
            }
        }
        Some(_) => errors.push("[link] device_name must be a string".to_string()),
        None => {}
    }

    match link.get("baudrate") {
        Some(toml::Value::Integer(baud)) if *baud <= 0 || *baud > u32::MAX as i64 => {
            errors.push("[link] baudrate must be a positive 32-bit integer".to_string());
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("[link] baudrate must be an integer".to_string()),
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    match config.get("display").and_then(|d| d.get("intensity")) {
        Some(toml::Value::Integer(level)) if !(0..=15).contains(level) => {
            errors.push("[display] intensity must be 0-15".to_string());
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("[display] intensity must be an integer".to_string()),
    }
}

fn validate_durations(config: &toml::Value, errors: &mut Vec<String>) {
    for (section, key) in [("input", "debounce_ms"), ("feedback", "pulse_ms")] {
        match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Integer(ms)) if *ms <= 0 || *ms > u32::MAX as i64 => {
                errors.push(format!("[{}] {} must be a positive 32-bit integer", section, key));
            }
            Some(toml::Value::Integer(_)) | None => {}
            Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
        }
    }
}
