use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::Result;
use crate::languages::LanguageRegistry;

/// Finds JavaScript/TypeScript files under a directory, honoring ignore files.
pub struct FileWalker<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> FileWalker<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .ignore(true)
            .filter_entry(|entry| entry.file_name() != "node_modules")
            .build();

        for entry in walker.flatten() {
            let path = entry.path();
            if path.is_file() && self.is_supported(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        self.registry.is_supported(path)
    }
}

impl Default for FileWalker<'static> {
    fn default() -> Self {
        Self::new(&crate::REGISTRY)
    }
}
