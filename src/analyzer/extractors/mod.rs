pub mod class;
pub mod function;
pub mod import;
pub mod variable;

pub use class::ClassExtractor;
pub use function::FunctionExtractor;
pub use import::ImportExtractor;
pub use variable::VariableExtractor;

use std::collections::HashMap;
use std::sync::Arc;

use tree_sitter::Node;

use super::context::SourceContext;
use crate::models::{
    CodeStructure, ParameterRecord, DEFAULT_BLOCK_RETURN, DEFAULT_EXPRESSION_RETURN, DEFAULT_TYPE,
};

/// Node kinds of `const`/`let` and `var` statements
pub(crate) const VARIABLE_STATEMENTS: &[&str] = &["lexical_declaration", "variable_declaration"];

/// Turns one syntax node into zero or more records.
pub trait ConstructExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Node kinds this extractor is dispatched on
    fn node_kinds(&self) -> &[&'static str];

    fn extract(&self, node: Node<'_>, ctx: &SourceContext<'_>, out: &mut CodeStructure);
}

/// Maps node kinds to the extractors interested in them.
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn ConstructExtractor>>,
    kind_map: HashMap<&'static str, Vec<usize>>,
}

impl ExtractorRegistry {
    /// Registry with no extractors; every node dispatches to nothing
    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
            kind_map: HashMap::new(),
        }
    }

    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Arc::new(ImportExtractor));
        registry.register(Arc::new(FunctionExtractor));
        registry.register(Arc::new(VariableExtractor));
        registry.register(Arc::new(ClassExtractor));

        registry
    }

    pub fn register(&mut self, extractor: Arc<dyn ConstructExtractor>) {
        let index = self.extractors.len();
        for kind in extractor.node_kinds() {
            self.kind_map.entry(*kind).or_default().push(index);
        }
        self.extractors.push(extractor);
    }

    /// Extractors registered for `kind`, in registration order
    pub fn for_kind<'s>(&'s self, kind: &str) -> impl Iterator<Item = &'s dyn ConstructExtractor> + 's {
        self.kind_map
            .get(kind)
            .into_iter()
            .flatten()
            .map(move |&i| self.extractors[i].as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Text of a type annotation without its leading `:`.
pub(crate) fn annotation_text(node: &Node<'_>, ctx: &SourceContext<'_>) -> String {
    let text = ctx.text(node).trim();
    let text = text.strip_prefix(':').unwrap_or(text).trim();
    flatten(text)
}

/// Declared type of a binding, `"any"` when unannotated or untyped.
pub(crate) fn declared_type(node: &Node<'_>, ctx: &SourceContext<'_>) -> String {
    node.child_by_field_name("type")
        .filter(|_| ctx.typed)
        .map(|t| annotation_text(&t, ctx))
        .unwrap_or_else(|| DEFAULT_TYPE.to_string())
}

/// Formal parameters of any function-like node, in declaration order.
pub(crate) fn parameters(func: &Node<'_>, ctx: &SourceContext<'_>) -> Vec<ParameterRecord> {
    // `x => x` has a bare identifier instead of a parameter list
    if let Some(single) = func.child_by_field_name("parameter") {
        return vec![ParameterRecord::new(ctx.text(&single), DEFAULT_TYPE)];
    }

    let Some(list) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut cursor = list.walk();
    let params = list
        .named_children(&mut cursor)
        .filter_map(|param| parameter(&param, ctx))
        .collect();
    params
}

fn parameter(param: &Node<'_>, ctx: &SourceContext<'_>) -> Option<ParameterRecord> {
    match param.kind() {
        "comment" | "decorator" => None,
        "required_parameter" | "optional_parameter" => {
            let name = param
                .child_by_field_name("pattern")
                .map(|p| binding_name(&p, ctx))
                .unwrap_or_else(|| flatten(ctx.text(param)));
            Some(ParameterRecord::new(name, declared_type(param, ctx)))
        }
        "assignment_pattern" => {
            let left = param.child_by_field_name("left").unwrap_or(*param);
            Some(ParameterRecord::new(flatten(ctx.text(&left)), DEFAULT_TYPE))
        }
        _ => Some(ParameterRecord::new(binding_name(param, ctx), DEFAULT_TYPE)),
    }
}

/// Name bound by a parameter pattern; `...args` binds `args`.
fn binding_name(pattern: &Node<'_>, ctx: &SourceContext<'_>) -> String {
    let target = match pattern.kind() {
        "rest_pattern" => pattern.named_child(0).unwrap_or(*pattern),
        _ => *pattern,
    };
    flatten(ctx.text(&target))
}

/// Annotated return type, or the default implied by the body shape.
pub(crate) fn return_type(func: &Node<'_>, ctx: &SourceContext<'_>) -> String {
    if let Some(annotation) = func.child_by_field_name("return_type").filter(|_| ctx.typed) {
        return annotation_text(&annotation, ctx);
    }

    match func.child_by_field_name("body") {
        Some(body) if body.kind() != "statement_block" => DEFAULT_EXPRESSION_RETURN.to_string(),
        _ => DEFAULT_BLOCK_RETURN.to_string(),
    }
}

pub(crate) fn is_async(func: &Node<'_>) -> bool {
    let mut cursor = func.walk();
    let found = func.children(&mut cursor).any(|c| c.kind() == "async");
    found
}

/// Collapses multi-line source text onto one line.
fn flatten(text: &str) -> String {
    if text.contains('\n') {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_dispatch_sets() {
        let registry = ExtractorRegistry::new();

        let names = |kind: &str| -> Vec<&'static str> {
            registry.for_kind(kind).map(|e| e.name()).collect()
        };

        assert_eq!(names("import_statement"), vec!["import"]);
        assert_eq!(names("function_declaration"), vec!["function"]);
        assert_eq!(names("class_declaration"), vec!["class"]);
        assert_eq!(names("lexical_declaration"), vec!["function", "variable"]);
        assert_eq!(names("variable_declaration"), vec!["function", "variable"]);
        assert!(names("identifier").is_empty());
    }

    #[test]
    fn test_registry_names_in_registration_order() {
        let registry = ExtractorRegistry::default();
        assert_eq!(registry.names(), vec!["import", "function", "variable", "class"]);
    }

    #[test]
    fn test_empty_registry_dispatches_nothing() {
        let registry = ExtractorRegistry::empty();
        assert_eq!(registry.for_kind("function_declaration").count(), 0);
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten("{ a: string;  b: number }"), "{ a: string;  b: number }");
        assert_eq!(flatten("{\n  a: string;\n  b: number\n}"), "{ a: string; b: number }");
    }
}
