pub mod javascript;
pub mod typescript;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub trait LanguageGrammar: Send + Sync {
    fn name(&self) -> &'static str;
    fn file_extensions(&self) -> &[&'static str];
    fn language(&self) -> tree_sitter::Language;

    /// Whether the grammar understands type annotations
    fn is_typed(&self) -> bool {
        false
    }
}

pub struct LanguageRegistry {
    languages: HashMap<String, Arc<dyn LanguageGrammar>>,
    extension_map: HashMap<String, String>,
    fallback: Arc<dyn LanguageGrammar>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let fallback: Arc<dyn LanguageGrammar> = Arc::new(javascript::JavaScriptGrammar);
        let mut registry = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
            fallback: fallback.clone(),
        };

        registry.register(fallback);
        registry.register(Arc::new(typescript::TypeScriptGrammar));
        registry.register(Arc::new(typescript::TsxGrammar));

        registry
    }

    pub fn register(&mut self, grammar: Arc<dyn LanguageGrammar>) {
        let name = grammar.name().to_string();
        for ext in grammar.file_extensions() {
            self.extension_map.insert(ext.to_string(), name.clone());
        }
        self.languages.insert(name, grammar);
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn LanguageGrammar>> {
        self.languages.get(name).cloned()
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn LanguageGrammar>> {
        self.extension_map
            .get(&ext.to_ascii_lowercase())
            .and_then(|name| self.languages.get(name))
            .cloned()
    }

    /// Grammar registered for the file's extension, if any
    pub fn get_for_file(&self, path: &Path) -> Option<Arc<dyn LanguageGrammar>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    /// Like `get_for_file`, but unknown extensions parse as plain JavaScript
    pub fn resolve(&self, path: &Path) -> Arc<dyn LanguageGrammar> {
        self.get_for_file(path)
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        self.get_for_file(path).is_some()
    }

    pub fn supported_extensions(&self) -> Vec<&str> {
        self.extension_map.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
