use tree_sitter::Node;

use super::{parameters, return_type, ConstructExtractor};
use crate::analyzer::context::SourceContext;
use crate::analyzer::docstring::docstring;
use crate::models::{
    ClassRecord, CodeStructure, MethodRecord, ANONYMOUS, CONSTRUCTOR, DEFAULT_BLOCK_RETURN,
};

pub struct ClassExtractor;

impl ConstructExtractor for ClassExtractor {
    fn name(&self) -> &'static str {
        "class"
    }

    fn node_kinds(&self) -> &[&'static str] {
        &["class_declaration", "abstract_class_declaration", "export_statement"]
    }

    fn extract(&self, node: Node<'_>, ctx: &SourceContext<'_>, out: &mut CodeStructure) {
        let class = match node.kind() {
            "export_statement" => match node.child_by_field_name("value") {
                // `export default class {}`
                Some(value) if value.kind() == "class" => value,
                _ => return,
            },
            _ => node,
        };

        let name = class
            .child_by_field_name("name")
            .map(|n| ctx.text(&n).to_string())
            .unwrap_or_else(|| ANONYMOUS.to_string());

        let mut methods = Vec::new();
        if let Some(body) = class.child_by_field_name("body") {
            let mut cursor = body.walk();
            for member in body.named_children(&mut cursor) {
                if member.kind() == "method_definition" {
                    methods.push(method_record(&member, ctx));
                }
            }
        }

        out.classes.push(ClassRecord {
            name,
            line: ctx.line(&node),
            docstring: docstring(&node, ctx),
            methods,
        });
    }
}

fn method_record(method: &Node<'_>, ctx: &SourceContext<'_>) -> MethodRecord {
    let name = method
        .child_by_field_name("name")
        .map(|n| ctx.text(&n).trim_matches(|c: char| c == '"' || c == '\'').to_string());

    let is_constructor = name.as_deref() == Some(CONSTRUCTOR) && !is_static(method);
    let return_type = if is_constructor {
        DEFAULT_BLOCK_RETURN.to_string()
    } else {
        return_type(method, ctx)
    };

    MethodRecord {
        name: name.unwrap_or_else(|| ANONYMOUS.to_string()),
        line: ctx.line(method),
        docstring: docstring(method, ctx),
        parameters: parameters(method, ctx),
        return_type,
    }
}

fn is_static(method: &Node<'_>) -> bool {
    let mut cursor = method.walk();
    let found = method.children(&mut cursor).any(|c| c.kind() == "static");
    found
}

#[cfg(test)]
mod tests {
    use crate::analyzer::analyze;
    use crate::models::ParameterRecord;

    #[test]
    fn test_class_with_methods() {
        let source = r#"
/** A shopping cart. */
class Cart {
    constructor(owner) {
        this.owner = owner;
        this.items = [];
    }

    /** Adds an item. */
    add(item) {
        this.items.push(item);
    }

    total() { return this.items.length; }
}
"#;
        let structure = analyze(source, "cart.js").unwrap();

        assert_eq!(structure.classes.len(), 1);
        let cart = &structure.classes[0];
        assert_eq!(cart.name, "Cart");
        assert_eq!(cart.line, 3);
        assert_eq!(cart.docstring, "A shopping cart.");

        let names: Vec<_> = cart.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["constructor", "add", "total"]);

        assert!(cart.methods[0].is_constructor());
        assert_eq!(cart.methods[0].return_type, "void");
        assert_eq!(cart.methods[0].parameters, vec![ParameterRecord::new("owner", "any")]);
        assert_eq!(cart.methods[1].docstring, "Adds an item.");
        assert_eq!(cart.methods[2].return_type, "void");
    }

    #[test]
    fn test_typescript_class_members() {
        let source = r#"
export abstract class Repository<T> {
    private cache: Map<string, T> = new Map();

    constructor(private readonly db: Database) {}

    async find(id: string): Promise<T | undefined> {
        return this.cache.get(id);
    }

    get size(): number {
        return this.cache.size;
    }

    protected abstract load(id: string): Promise<T>;
}
"#;
        let structure = analyze(source, "repo.ts").unwrap();

        let repo = &structure.classes[0];
        assert_eq!(repo.name, "Repository");

        let names: Vec<_> = repo.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["constructor", "find", "size"]);

        assert_eq!(repo.methods[0].return_type, "void");
        assert_eq!(repo.methods[0].parameters, vec![ParameterRecord::new("db", "Database")]);
        assert_eq!(repo.methods[1].return_type, "Promise<T | undefined>");
        assert_eq!(repo.methods[1].parameters, vec![ParameterRecord::new("id", "string")]);
        assert_eq!(repo.methods[2].return_type, "number");
    }

    #[test]
    fn test_decorated_method_keeps_docstring() {
        let source = r#"
@Controller("users")
class UserController {
    /** Finds one. */
    @Get(":id")
    find(id: string): User {
        return this.repo.get(id);
    }
}
"#;
        let structure = analyze(source, "users.controller.ts").unwrap();

        let method = &structure.classes[0].methods[0];
        assert_eq!(method.name, "find");
        assert_eq!(method.docstring, "Finds one.");
        assert_eq!(method.return_type, "User");
    }

    #[test]
    fn test_static_constructor_is_an_ordinary_method() {
        let source = "class Factory {\n    static constructor(): Factory { return new Factory(); }\n}";
        let structure = analyze(source, "factory.ts").unwrap();

        let method = &structure.classes[0].methods[0];
        assert_eq!(method.name, "constructor");
        assert_eq!(method.return_type, "Factory");
    }

    #[test]
    fn test_anonymous_default_class() {
        let structure = analyze("export default class { run() {} }", "anon.js").unwrap();

        assert_eq!(structure.classes.len(), 1);
        assert_eq!(structure.classes[0].name, "anonymous");
        assert_eq!(structure.classes[0].methods[0].name, "run");
    }

    #[test]
    fn test_class_expression_bound_to_variable_is_not_a_declaration() {
        let structure = analyze("const Widget = class { draw() {} };", "widget.js").unwrap();
        assert!(structure.classes.is_empty());
        assert_eq!(structure.variables[0].name, "Widget");
    }

    #[test]
    fn test_classes_keep_source_order() {
        let source = "class Zebra {}\nclass Apple {}\nclass Mango {}";
        let structure = analyze(source, "zoo.js").unwrap();

        let names: Vec<_> = structure.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_method_bodies_are_walked() {
        let source = r#"
class Server {
    start() {
        function onReady() {}
        const port = 8080;
    }
}
"#;
        let structure = analyze(source, "server.js").unwrap();

        assert_eq!(structure.functions[0].name, "onReady");
        assert_eq!(structure.variables[0].name, "port");
    }
}
