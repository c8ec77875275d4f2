use super::LanguageGrammar;

pub struct JavaScriptGrammar;

impl LanguageGrammar for JavaScriptGrammar {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["js", "jsx", "mjs", "cjs"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }
}
