//! Build script for smarthub-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates hub.toml and compiles it into a postcard blob

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use smarthub_core::config::{ConfigError, HubConfig};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    setup_linker(&out_dir);
    compile_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse, validate and serialize hub.toml into `$OUT_DIR/hub.bin`
fn compile_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=hub.toml");

    let config_path = Path::new("hub.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: hub.toml not found!                                      ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a hub.toml configuration file.            ║\n\
            ║  Please create one in the smarthub-firmware directory.           ║\n\
            ║  An empty file selects the built-in defaults.                    ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read hub.toml                                  ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: HubConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid hub.toml                                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: hub.toml failed validation                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(describe(e))
        );
    }

    let blob = postcard::to_allocvec(&config).unwrap();
    fs::write(out_dir.join("hub.bin"), &blob).unwrap();

    println!(
        "cargo:warning=hub.toml validated successfully ({} bytes)",
        blob.len()
    );
}

fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::InvalidInterval => {
            "[sampling] interval_ms and pulse_timeout_us must be non-zero"
        }
        ConfigError::InvalidDeadband => "[input] requires axis_low < axis_high <= 4095",
        ConfigError::InvalidThresholdRange => "[alarm.threshold.mapped] requires min <= max",
        ConfigError::InvalidBands => "[alarm] requires cold_below_x10 <= hot_above_x10",
        ConfigError::Decode => "configuration could not be decoded",
    }
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
