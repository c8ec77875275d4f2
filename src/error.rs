use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Language error: {0}")]
    Language(String),
}

impl AnalyzerError {
    /// Returns the syntax diagnostics when this is a parse failure
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            AnalyzerError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// A single structurally fatal problem found in the syntax tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line
    pub line: u32,
    /// 0-based column
    pub column: u32,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Source text could not be turned into a usable syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            diagnostics: vec![Diagnostic {
                line: 1,
                column: 0,
                message: message.into(),
            }],
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.diagnostics.iter().map(|d| d.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ParseError {}
