use tree_sitter::Node;

use super::{is_async, parameters, return_type, ConstructExtractor, VARIABLE_STATEMENTS};
use crate::analyzer::context::SourceContext;
use crate::analyzer::docstring::docstring;
use crate::models::{CodeStructure, FunctionRecord, ANONYMOUS};

/// Function expressions that may appear as an `export default` value
const FUNCTION_EXPRESSIONS: &[&str] = &["function_expression", "function", "generator_function"];

/// Function declarations, arrow functions bound to variables and anonymous
/// default-exported functions.
pub struct FunctionExtractor;

impl ConstructExtractor for FunctionExtractor {
    fn name(&self) -> &'static str {
        "function"
    }

    fn node_kinds(&self) -> &[&'static str] {
        &[
            "function_declaration",
            "generator_function_declaration",
            "lexical_declaration",
            "variable_declaration",
            "export_statement",
        ]
    }

    fn extract(&self, node: Node<'_>, ctx: &SourceContext<'_>, out: &mut CodeStructure) {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                out.functions.push(function_record(&node, &node, ctx));
            }
            "export_statement" => {
                if let Some(value) = node.child_by_field_name("value") {
                    if FUNCTION_EXPRESSIONS.contains(&value.kind()) {
                        out.functions.push(function_record(&value, &node, ctx));
                    }
                }
            }
            kind if VARIABLE_STATEMENTS.contains(&kind) => {
                let mut cursor = node.walk();
                for declarator in node.named_children(&mut cursor) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    let (Some(name), Some(value)) = (
                        declarator.child_by_field_name("name"),
                        declarator.child_by_field_name("value"),
                    ) else {
                        continue;
                    };
                    if name.kind() != "identifier" || value.kind() != "arrow_function" {
                        continue;
                    }

                    let mut record = function_record(&value, &node, ctx);
                    record.name = ctx.text(&name).to_string();
                    record.line = ctx.line(&declarator);
                    out.functions.push(record);
                }
            }
            _ => {}
        }
    }
}

/// Builds a record for `func`, taking its docstring from above `doc_anchor`.
fn function_record(func: &Node<'_>, doc_anchor: &Node<'_>, ctx: &SourceContext<'_>) -> FunctionRecord {
    let name = func
        .child_by_field_name("name")
        .map(|n| ctx.text(&n).to_string())
        .unwrap_or_else(|| ANONYMOUS.to_string());

    FunctionRecord {
        name,
        line: ctx.line(doc_anchor),
        docstring: docstring(doc_anchor, ctx),
        parameters: parameters(func, ctx),
        return_type: return_type(func, ctx),
        is_async: is_async(func),
    }
}
