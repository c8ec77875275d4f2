use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::files::FileWalker;
use super::Analyzer;
use crate::error::Result;
use crate::models::CodeStructure;

/// Structures of every analyzable file under a root, keyed by relative path.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub files: BTreeMap<String, CodeStructure>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl ScanReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Analyzes every supported file under `root` in parallel.
///
/// Per-file failures are collected into `errors`; only failing to walk the
/// directory itself is an error.
pub fn scan_directory(root: &Path) -> Result<ScanReport> {
    let files = FileWalker::default().walk(root)?;
    tracing::info!(root = %root.display(), files = files.len(), "Scanning directory");

    let results: Vec<(PathBuf, Result<CodeStructure>)> = files
        .par_iter()
        .map(|file| (file.clone(), Analyzer::default().analyze_file(file)))
        .collect();

    let mut report = ScanReport::default();
    for (file, result) in results {
        let key = relative_key(root, &file);
        match result {
            Ok(structure) => {
                report.files.insert(key, structure);
            }
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "Failed to analyze file");
                report.errors.insert(key, e.to_string());
            }
        }
    }

    tracing::info!(
        analyzed = report.files.len(),
        failed = report.errors.len(),
        "Scan complete"
    );

    Ok(report)
}

fn relative_key(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative.to_string_lossy().replace('\\', "/")
}
