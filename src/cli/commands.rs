use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use js_structure::{analyze_file, scan_directory};

#[derive(Parser)]
#[command(name = "js-structure")]
#[command(about = "Extract the declaration structure of JavaScript/TypeScript files")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Print the structure of one file
    js-structure analyze src/app.ts

    # Single-line JSON, for piping into other tools
    js-structure analyze lib/util.js --compact

    # Analyze every JS/TS file under the current directory
    js-structure scan

    # Fail when any file has syntax errors
    js-structure scan ./src --fail-fast

Log verbosity is controlled with RUST_LOG (default: js_structure=info).
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single file and print its structure as JSON
    Analyze {
        /// Path to the JavaScript or TypeScript file
        file: PathBuf,

        /// Print compact single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Analyze every JavaScript/TypeScript file under a directory
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print compact single-line JSON
        #[arg(long)]
        compact: bool,

        /// Exit with an error if any file fails to parse
        #[arg(long)]
        fail_fast: bool,
    },
}

pub fn analyze(file: &Path, compact: bool) -> anyhow::Result<()> {
    let structure = analyze_file(file)?;
    print_json(&structure, compact)
}

pub fn scan(path: &Path, compact: bool, fail_fast: bool) -> anyhow::Result<()> {
    let report = scan_directory(path)?;
    print_json(&report, compact)?;

    if fail_fast && report.has_errors() {
        anyhow::bail!("{} file(s) failed to parse", report.errors.len());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
