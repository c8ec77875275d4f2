use tree_sitter::Node;

use super::context::SourceContext;

/// Wrappers whose leading comments document the declaration inside them
const TRANSPARENT_PARENTS: &[&str] = &["export_statement"];

/// Documentation for `node`: the first block comment of the comment run
/// directly above it, normalized to a single line. Empty when there is none.
pub fn docstring(node: &Node<'_>, ctx: &SourceContext<'_>) -> String {
    let mut target = *node;
    loop {
        if let Some(comment) = leading_block_comment(&target, ctx) {
            return normalize(comment);
        }
        match target.parent() {
            Some(parent) if TRANSPARENT_PARENTS.contains(&parent.kind()) => target = parent,
            _ => return String::new(),
        }
    }
}

fn leading_block_comment<'a>(node: &Node<'_>, ctx: &SourceContext<'a>) -> Option<&'a str> {
    // member decorators are siblings in a class body, not children
    let mut prev = node.prev_sibling();
    while let Some(decorator) = prev.filter(|n| n.kind() == "decorator") {
        prev = decorator.prev_sibling();
    }

    let mut run = Vec::new();
    while let Some(sibling) = prev {
        if sibling.kind() != "comment" || trails_code(&sibling) {
            break;
        }
        run.push(ctx.text(&sibling));
        prev = sibling.prev_sibling();
    }

    // collected bottom-up
    run.into_iter().rev().find(|text| text.starts_with("/*"))
}

/// True when the comment starts on a row where earlier code ends.
fn trails_code(comment: &Node<'_>) -> bool {
    comment
        .prev_named_sibling()
        .is_some_and(|prev| prev.end_position().row == comment.start_position().row)
}

/// Strips comment delimiters and `*` gutters, joining lines with single spaces.
pub fn normalize(comment: &str) -> String {
    let body = comment.trim();
    let body = body.strip_suffix("*/").unwrap_or(body);
    let body = body
        .strip_prefix("/**")
        .or_else(|| body.strip_prefix("/*"))
        .unwrap_or(body);

    body.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
