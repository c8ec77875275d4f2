use tree_sitter::Node;

use super::ConstructExtractor;
use crate::analyzer::context::SourceContext;
use crate::models::{CodeStructure, ImportRecord};

/// ES module imports with a string-literal source.
///
/// Namespace imports are reported among the named imports as `* as name`,
/// and aliased specifiers under their local name.
pub struct ImportExtractor;

impl ConstructExtractor for ImportExtractor {
    fn name(&self) -> &'static str {
        "import"
    }

    fn node_kinds(&self) -> &[&'static str] {
        &["import_statement"]
    }

    fn extract(&self, node: Node<'_>, ctx: &SourceContext<'_>, out: &mut CodeStructure) {
        let Some(source) = node.child_by_field_name("source") else {
            // `import x = require("m")`
            return;
        };
        if source.kind() != "string" {
            return;
        }

        let mut record = ImportRecord {
            module: unquote(ctx.text(&source)).to_string(),
            ..Default::default()
        };

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "import_clause" {
                read_clause(&child, ctx, &mut record);
            }
        }

        out.imports.push(record);
    }
}

fn read_clause(clause: &Node<'_>, ctx: &SourceContext<'_>, record: &mut ImportRecord) {
    let mut cursor = clause.walk();
    for part in clause.named_children(&mut cursor) {
        match part.kind() {
            "identifier" => record.default_import = Some(ctx.text(&part).to_string()),
            "namespace_import" => {
                let mut inner = part.walk();
                let alias = part
                    .named_children(&mut inner)
                    .find(|n| n.kind() == "identifier")
                    .map(|n| ctx.text(&n));
                if let Some(alias) = alias {
                    record.named_imports.push(format!("* as {}", alias));
                }
            }
            "named_imports" => {
                let mut inner = part.walk();
                for specifier in part.named_children(&mut inner) {
                    if specifier.kind() != "import_specifier" {
                        continue;
                    }
                    let local = specifier
                        .child_by_field_name("alias")
                        .or_else(|| specifier.child_by_field_name("name"));
                    if let Some(local) = local {
                        record.named_imports.push(unquote(ctx.text(&local)).to_string());
                    }
                }
            }
            _ => {}
        }
    }
}

fn unquote(text: &str) -> &str {
    text.trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
}
