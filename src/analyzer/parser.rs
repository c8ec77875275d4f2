use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{AnalyzerError, Diagnostic, ParseError, Result};
use crate::languages::{LanguageGrammar, LanguageRegistry};

/// Longest snippet of offending text quoted in a diagnostic
const SNIPPET_LIMIT: usize = 40;

pub struct Parser<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> Parser<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    /// Parses `source` with the grammar selected by `path`'s extension.
    ///
    /// Fails with a [`ParseError`] when the tree contains syntax errors or
    /// tokens the parser had to invent; nothing else is reported, since no
    /// module resolution or type checking takes place here.
    pub fn parse_source(&self, source: &str, path: &Path) -> Result<ParsedFile> {
        let grammar = self.registry.resolve(path);
        self.parse_with(source, grammar)
    }

    pub fn parse_with(&self, source: &str, grammar: Arc<dyn LanguageGrammar>) -> Result<ParsedFile> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&grammar.language())
            .map_err(|e| AnalyzerError::Language(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::single("Failed to parse source"))?;

        let diagnostics = collect_diagnostics(tree.root_node(), source);
        if !diagnostics.is_empty() {
            tracing::debug!(
                language = grammar.name(),
                count = diagnostics.len(),
                "Syntax errors in source"
            );
            return Err(ParseError::new(diagnostics).into());
        }

        Ok(ParsedFile {
            tree,
            source: source.to_string(),
            language: grammar.name().to_string(),
            grammar,
        })
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(&crate::REGISTRY)
    }
}

pub struct ParsedFile {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub language: String,
    pub grammar: Arc<dyn LanguageGrammar>,
}

impl fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedFile")
            .field("language", &self.language)
            .field("source_len", &self.source.len())
            .finish_non_exhaustive()
    }
}

impl ParsedFile {
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn node_text(&self, node: &tree_sitter::Node) -> &str {
        node.utf8_text(self.source_bytes()).unwrap_or("")
    }
}

/// Gathers one diagnostic per `ERROR` or `MISSING` node, in source order.
fn collect_diagnostics(root: tree_sitter::Node<'_>, source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if !root.has_error() {
        return diagnostics;
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            diagnostics.push(diagnostic_at(&node, format!("missing `{}`", node.kind())));
            continue;
        }
        if node.is_error() {
            let text = node.utf8_text(source.as_bytes()).unwrap_or("");
            let message = match snippet(text) {
                Some(s) => format!("unexpected `{}`", s),
                None => "unexpected end of input".to_string(),
            };
            diagnostics.push(diagnostic_at(&node, message));
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node
            .children(&mut cursor)
            .filter(|c| c.has_error() || c.is_missing())
            .collect();
        stack.extend(children.into_iter().rev());
    }

    diagnostics.sort_by_key(|d| (d.line, d.column));
    diagnostics
}

fn diagnostic_at(node: &tree_sitter::Node, message: String) -> Diagnostic {
    let pos = node.start_position();
    Diagnostic {
        line: pos.row as u32 + 1,
        column: pos.column as u32,
        message,
    }
}

fn snippet(text: &str) -> Option<String> {
    let first_line = text.trim().lines().next()?.trim();
    if first_line.is_empty() {
        return None;
    }
    if first_line.chars().count() > SNIPPET_LIMIT {
        let cut: String = first_line.chars().take(SNIPPET_LIMIT).collect();
        Some(format!("{}...", cut))
    } else {
        Some(first_line.to_string())
    }
}
