//! Build script for screen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates screen.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use screen_core::config::{parse_config, ScreenConfig};

/// Tick rate of `screen_hal_rp2040::EmbassyTicks` (1 MHz >> 7)
const TICKS_PER_SECOND: u32 = 1_000_000 >> 7;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate screen.toml configuration at compile time
fn validate_config() {
    // Re-run if screen.toml changes
    println!("cargo:rerun-if-changed=screen.toml");

    let config_path = Path::new("screen.toml");

    if !config_path.exists() {
        fail(
            "screen.toml not found!",
            &[
                "The firmware embeds a screen.toml configuration file.",
                "Please create one in the screen-firmware directory.",
            ],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read screen.toml", &[&e.to_string()]),
    };

    // Full TOML parser with serde: syntax, types, unknown keys
    let config: ScreenConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            let lines: Vec<&str> = error_msg.lines().collect();
            fail("Invalid screen.toml", &lines);
        }
    };

    // Value ranges and cross-field constraints
    if let Err(e) = config.validate(TICKS_PER_SECOND) {
        fail("Invalid screen.toml values", &[&e.to_string()]);
    }

    // The firmware parses with the minimal on-target parser; it has to
    // agree with the full one
    match parse_config(&config_content) {
        Ok(parsed) if parsed == config => {}
        Ok(_) => fail(
            "screen.toml parses differently on target",
            &["Use only [section] headers, key = value pairs and # comments."],
        ),
        Err(e) => fail(
            "screen.toml is not supported by the on-target parser",
            &[&e.to_string()],
        ),
    }

    println!("cargo:warning=screen.toml validated successfully");
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[&str]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(details)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[&str]) -> String {
    lines
        .iter()
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
