//! Declaration inventory of JavaScript and TypeScript source files.
//!
//! The pipeline is: grammar selection by extension, tree-sitter parse with
//! syntax-error screening, then a single pre-order walk that hands each node
//! to the extractors registered for its kind.

pub mod batch;
pub mod context;
pub mod docstring;
pub mod extractors;
pub mod files;
pub mod parser;
pub mod walker;

pub use batch::{scan_directory, ScanReport};
pub use context::SourceContext;
pub use extractors::{ConstructExtractor, ExtractorRegistry};
pub use files::FileWalker;
pub use parser::{ParsedFile, Parser};
pub use walker::DeclarationWalker;

use std::path::Path;

use crate::error::Result;
use crate::languages::LanguageRegistry;
use crate::models::CodeStructure;

pub struct Analyzer<'r> {
    parser: Parser<'r>,
    extractors: &'r ExtractorRegistry,
}

impl<'r> Analyzer<'r> {
    pub fn new(languages: &'r LanguageRegistry, extractors: &'r ExtractorRegistry) -> Self {
        Self {
            parser: Parser::new(languages),
            extractors,
        }
    }

    /// Analyzes in-memory source; `file_path` only selects the grammar.
    pub fn analyze(&self, source: &str, file_path: &Path) -> Result<CodeStructure> {
        let parsed = self.parser.parse_source(source, file_path)?;
        let ctx = SourceContext::for_parsed(&parsed, file_path);

        let structure = DeclarationWalker::new(self.extractors).walk(parsed.root_node(), &ctx);

        tracing::debug!(
            file = %file_path.display(),
            language = %parsed.language,
            functions = structure.functions.len(),
            classes = structure.classes.len(),
            imports = structure.imports.len(),
            variables = structure.variables.len(),
            "Analyzed source"
        );

        Ok(structure)
    }

    pub fn analyze_file(&self, file_path: &Path) -> Result<CodeStructure> {
        let source = std::fs::read_to_string(file_path)?;
        self.analyze(&source, file_path)
    }
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(&crate::REGISTRY, &crate::EXTRACTORS)
    }
}

/// Analyzes `source` as if it were the contents of `file_path`.
pub fn analyze(source: &str, file_path: impl AsRef<Path>) -> Result<CodeStructure> {
    Analyzer::default().analyze(source, file_path.as_ref())
}

/// Reads `file_path` and analyzes its contents.
pub fn analyze_file(file_path: impl AsRef<Path>) -> Result<CodeStructure> {
    Analyzer::default().analyze_file(file_path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_source_yields_empty_structure() {
        let structure = analyze("", "empty.js").unwrap();
        assert!(structure.is_empty());
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        let structure = analyze("\n  // nothing here\n/* really */\n", "blank.ts").unwrap();
        assert!(structure.is_empty());
    }

    #[test]
    fn test_unbalanced_braces_is_parse_error() {
        let err = analyze("function f() { if (x) { return 1; }", "f.js").unwrap_err();
        assert!(err.as_parse_error().is_some());
    }

    #[test]
    fn test_analyze_file_reads_from_disk() {
        let mut file = NamedTempFile::with_suffix(".ts").unwrap();
        writeln!(file, "export function ping(): string {{ return 'pong'; }}").unwrap();

        let structure = analyze_file(file.path()).unwrap();
        assert_eq!(structure.functions[0].name, "ping");
        assert_eq!(structure.functions[0].return_type, "string");
    }

    #[test]
    fn test_analyze_file_missing_is_io_error() {
        let err = analyze_file("/definitely/not/here.js").unwrap_err();
        assert!(matches!(err, crate::AnalyzerError::Io(_)));
    }

    #[test]
    fn test_analyzer_with_custom_registry() {
        let languages = LanguageRegistry::new();
        let extractors = ExtractorRegistry::empty();
        let analyzer = Analyzer::new(&languages, &extractors);

        let structure = analyzer
            .analyze("function f() {}", Path::new("f.js"))
            .unwrap();
        assert!(structure.is_empty());
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let source = "import a from 'a';\nconst b = () => a;\nclass C { m() {} }";
        let first = analyze(source, "r.js").unwrap();
        let second = analyze(source, "r.js").unwrap();
        assert_eq!(first, second);
    }
}
