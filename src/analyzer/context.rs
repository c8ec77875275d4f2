use std::path::Path;

use tree_sitter::Node;

use super::parser::ParsedFile;

/// Per-call state shared by the walker and every extractor.
///
/// Built fresh for each analysis and passed by reference, so concurrent
/// analyses never observe each other's file.
#[derive(Debug, Clone, Copy)]
pub struct SourceContext<'a> {
    pub source: &'a str,
    pub file_path: &'a Path,
    pub typed: bool,
}

impl<'a> SourceContext<'a> {
    pub fn new(source: &'a str, file_path: &'a Path, typed: bool) -> Self {
        Self {
            source,
            file_path,
            typed,
        }
    }

    pub fn for_parsed(parsed: &'a ParsedFile, file_path: &'a Path) -> Self {
        Self::new(&parsed.source, file_path, parsed.grammar.is_typed())
    }

    pub fn text(&self, node: &Node<'_>) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// 1-based line of the node's first character
    pub fn line(&self, node: &Node<'_>) -> u32 {
        node.start_position().row as u32 + 1
    }
}
