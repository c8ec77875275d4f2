//! Integration tests for directory scanning.
//!
//! These build small projects in a temp dir and check the per-file report.

use std::fs;
use std::path::Path;

use js_structure::{scan_directory, FileWalker, ScanReport};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Creates a small mixed JS/TS project.
fn create_project() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    write(
        root,
        "src/index.ts",
        r#"
import { add } from "./math";

/** Entry point. */
export async function main(argv: string[]): Promise<number> {
    return add(1, 2);
}
"#,
    );
    write(
        root,
        "src/math.js",
        "export const add = (a, b) => a + b;\nexport function sub(a, b) { return a - b; }\n",
    );
    write(
        root,
        "src/ui/Button.tsx",
        "export const Button = (props: { label: string }) => <button>{props.label}</button>;\n",
    );
    write(root, "src/broken.js", "function oops() {\n  return [1, 2;\n");
    write(root, "README.md", "# project\n");
    write(root, "node_modules/dep/index.js", "module.exports = {};\n");

    temp_dir
}

fn scan(dir: &TempDir) -> ScanReport {
    scan_directory(dir.path()).expect("Failed to scan")
}

#[test]
fn test_walker_lists_only_sources() {
    let project = create_project();
    let files = FileWalker::default().walk(project.path()).unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 4, "found {:?}", names);
    assert!(!names.contains(&"README.md".to_string()));
}

#[test]
fn test_scan_reports_each_file() {
    let project = create_project();
    let report = scan(&project);

    let keys: Vec<_> = report.files.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["src/index.ts", "src/math.js", "src/ui/Button.tsx"]);
}

#[test]
fn test_scan_contents() {
    let project = create_project();
    let report = scan(&project);

    let index = &report.files["src/index.ts"];
    assert_eq!(index.imports[0].module, "./math");
    assert_eq!(index.functions[0].name, "main");
    assert_eq!(index.functions[0].docstring, "Entry point.");
    assert_eq!(index.functions[0].return_type, "Promise<number>");
    assert!(index.functions[0].is_async);

    let math = &report.files["src/math.js"];
    let names: Vec<_> = math.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["add", "sub"]);
    assert_eq!(math.functions[0].return_type, "any");

    let button = &report.files["src/ui/Button.tsx"];
    assert_eq!(button.functions[0].name, "Button");
    assert_eq!(button.functions[0].parameters[0].type_name, "{ label: string }");
}

#[test]
fn test_scan_collects_parse_errors() {
    let project = create_project();
    let report = scan(&project);

    assert!(report.has_errors());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors.contains_key("src/broken.js"));
    assert!(!report.files.contains_key("src/broken.js"));
}

#[test]
fn test_scan_report_json_shape() {
    let project = create_project();
    let report = scan(&project);

    let value = serde_json::to_value(&report).unwrap();
    assert!(value["files"]["src/math.js"]["functions"].is_array());
    assert!(value["errors"]["src/broken.js"].is_string());
}

#[test]
fn test_scan_clean_project_has_no_errors_key() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.js", "const a = 1;\n");

    let report = scan(&temp_dir);
    assert!(!report.has_errors());

    let value = serde_json::to_value(&report).unwrap();
    assert!(value.get("errors").is_none());
}
