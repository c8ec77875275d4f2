use tree_sitter::Node;

use super::context::SourceContext;
use super::extractors::ExtractorRegistry;
use crate::models::CodeStructure;

/// Pre-order traversal feeding every node to the extractors registered for
/// its kind. Children are always visited, whatever the extractors did.
pub struct DeclarationWalker<'r> {
    extractors: &'r ExtractorRegistry,
}

impl<'r> DeclarationWalker<'r> {
    pub fn new(extractors: &'r ExtractorRegistry) -> Self {
        Self { extractors }
    }

    pub fn walk(&self, root: Node<'_>, ctx: &SourceContext<'_>) -> CodeStructure {
        let mut out = CodeStructure::new();
        self.walk_into(root, ctx, &mut out);
        out
    }

    pub fn walk_into(&self, root: Node<'_>, ctx: &SourceContext<'_>, out: &mut CodeStructure) {
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            for extractor in self.extractors.for_kind(node.kind()) {
                extractor.extract(node, ctx, out);
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }
}
