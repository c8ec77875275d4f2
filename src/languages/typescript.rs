use super::LanguageGrammar;

pub struct TypeScriptGrammar;

impl LanguageGrammar for TypeScriptGrammar {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["ts", "mts", "cts"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }

    fn is_typed(&self) -> bool {
        true
    }
}

/// TypeScript with JSX, kept apart because `<T>expr` casts are ambiguous with tags
pub struct TsxGrammar;

impl LanguageGrammar for TsxGrammar {
    fn name(&self) -> &'static str {
        "tsx"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["tsx"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_typescript::LANGUAGE_TSX.into()
    }

    fn is_typed(&self) -> bool {
        true
    }
}
