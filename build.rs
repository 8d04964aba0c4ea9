//! Build script for the Enphase summary proxy.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory during compilation, so a ready-to-edit template sits next
//! to the location where the application looks for its `.env` file.
//!
//! # File Operations
//!
//! The template is read from the crate root and copied to:
//! - Linux: `~/.local/share/enphase-proxy/.env.example`
//! - macOS: `~/Library/Application Support/enphase-proxy/.env.example`
//! - Windows: `%LOCALAPPDATA%/enphase-proxy/.env.example`
//!
//! A missing template produces a build warning instead of a failure;
//! directory creation or copy errors are critical and abort the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("enphase-proxy");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
