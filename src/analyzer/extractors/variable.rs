use tree_sitter::Node;

use super::{declared_type, ConstructExtractor, VARIABLE_STATEMENTS};
use crate::analyzer::context::SourceContext;
use crate::models::{CodeStructure, VariableRecord};

pub struct VariableExtractor;

impl ConstructExtractor for VariableExtractor {
    fn name(&self) -> &'static str {
        "variable"
    }

    fn node_kinds(&self) -> &[&'static str] {
        VARIABLE_STATEMENTS
    }

    fn extract(&self, node: Node<'_>, ctx: &SourceContext<'_>, out: &mut CodeStructure) {
        let mut cursor = node.walk();
        for declarator in node.named_children(&mut cursor) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            let Some(name) = declarator.child_by_field_name("name") else {
                continue;
            };

            // Destructuring patterns are not modelled.
            if name.kind() != "identifier" {
                tracing::trace!(
                    file = %ctx.file_path.display(),
                    line = ctx.line(&declarator),
                    pattern = name.kind(),
                    "Skipping destructured binding"
                );
                continue;
            }

            out.variables.push(VariableRecord {
                name: ctx.text(&name).to_string(),
                type_name: declared_type(&declarator, ctx),
                line: ctx.line(&declarator),
            });
        }
    }
}
