//! Definition extraction from syntax trees
//!
//! Pre-order traversal over one file's tree, matching nodes against the
//! language's definition-kind table. Matched nodes are not pruned; nested
//! definitions (methods inside classes) produce their own records.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree};

use super::languages::{DefinitionKind, KindSpec, LanguageSpec};

/// Name reported when a definition's name field is missing from the tree
pub const ANONYMOUS_NAME: &str = "<anon>";

/// How many leading bytes of a snippet the signature heuristic inspects
const SIGNATURE_WINDOW: usize = 200;

/// One extracted definition, immutable after traversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub name: String,
    pub kind: DefinitionKind,
    pub signature: String,
    pub snippet: String,
    pub file_path: PathBuf,
    pub line: usize,
}

impl DefinitionRecord {
    /// `<file_path>:<line>` as it appears in the report
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_path.display(), self.line)
    }
}

/// Walk a parsed tree and return definition records in pre-order
pub fn extract_definitions(
    tree: &Tree,
    source: &str,
    file_path: &Path,
    language: &LanguageSpec,
) -> Vec<DefinitionRecord> {
    let mut records = Vec::new();
    collect(tree.root_node(), source, file_path, language, &mut records);
    records
}

fn collect(
    node: Node,
    source: &str,
    file_path: &Path,
    language: &LanguageSpec,
    records: &mut Vec<DefinitionRecord>,
) {
    if let Some(kind_spec) = language.classify(node.kind()) {
        records.push(build_record(node, source, file_path, language, kind_spec));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, file_path, language, records);
    }
}

fn build_record(
    node: Node,
    source: &str,
    file_path: &Path,
    language: &LanguageSpec,
    kind_spec: &KindSpec,
) -> DefinitionRecord {
    let snippet = source[node.byte_range()].to_string();
    let name_text = node
        .child_by_field_name("name")
        .map(|name| source[name.byte_range()].to_string());

    DefinitionRecord {
        name: resolve_name(kind_spec, name_text),
        kind: kind_spec.kind,
        signature: signature_from_snippet(&snippet, language.body_delimiter),
        snippet,
        file_path: file_path.to_path_buf(),
        line: node.start_position().row + 1,
    }
}

/// Pick the record name: the name field's text when the kind carries one,
/// the node kind string when it conventionally does not, `<anon>` when the
/// field is expected but absent (error-recovered trees).
fn resolve_name(kind_spec: &KindSpec, name_text: Option<String>) -> String {
    if !kind_spec.has_name_field {
        return kind_spec.node_kind.to_string();
    }
    name_text.unwrap_or_else(|| ANONYMOUS_NAME.to_string())
}

/// Best-effort signature: the first 200 bytes of the snippet, cut at the
/// body-opening delimiter, newlines collapsed to spaces.
fn signature_from_snippet(snippet: &str, body_delimiter: char) -> String {
    let mut end = SIGNATURE_WINDOW.min(snippet.len());
    while !snippet.is_char_boundary(end) {
        end -= 1;
    }

    let header = &snippet[..end];
    let header = header.split(body_delimiter).next().unwrap_or(header);
    header.replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParsingConfig;
    use crate::core::registry::GrammarRegistry;

    fn parse(language: &str, extension: &str, source: &str) -> Vec<DefinitionRecord> {
        let config = ParsingConfig {
            languages: vec![language.to_string()],
            max_file_size: 1024 * 1024,
        };
        let mut registry = GrammarRegistry::new(&config);
        registry.ensure_built().unwrap();

        let mut handle = registry.resolve(extension).unwrap();
        let path = PathBuf::from(format!("test.{}", extension));
        let tree = handle.parse(source, &path).unwrap();
        extract_definitions(&tree, source, &path, handle.spec)
    }

    #[test]
    fn extracts_python_function_with_exact_snippet_and_line() {
        let source = "\ndef square(x):\n    \"\"\"doc\"\"\"\n    return x * x\n";
        let records = parse("python", "py", source);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "square");
        assert_eq!(record.kind, DefinitionKind::Function);
        assert_eq!(record.line, 2);
        assert_eq!(
            record.snippet,
            "def square(x):\n    \"\"\"doc\"\"\"\n    return x * x"
        );
        assert_eq!(record.signature, "def square(x)");
    }

    #[test]
    fn nested_definitions_are_reported_in_preorder() {
        let source = r#"class Greeter:
    def hello(self):
        return "hi"

    def bye(self):
        return "bye"

def main():
    pass
"#;
        let records = parse("python", "py", source);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Greeter", "hello", "bye", "main"]);
        assert_eq!(records[0].kind, DefinitionKind::Class);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[2].line, 5);
    }

    #[test]
    fn javascript_methods_and_classes_are_classified() {
        let source = "class Point {\n  scale(k) {\n    return k;\n  }\n}\nfunction id(x) { return x; }\n";
        let records = parse("javascript", "js", source);

        let kinds: Vec<DefinitionKind> = records.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DefinitionKind::Class,
                DefinitionKind::Method,
                DefinitionKind::Function
            ]
        );
        assert_eq!(records[1].name, "scale");
        assert_eq!(records[1].signature, "scale(k)");
    }

    #[test]
    fn csharp_operator_reports_kind_string_as_name() {
        let source = r#"public class Meters
{
    public static Meters operator +(Meters a, Meters b)
    {
        return a;
    }
}
"#;
        let records = parse("csharp", "cs", source);

        let operator = records
            .iter()
            .find(|r| r.kind == DefinitionKind::Method)
            .expect("operator record");
        assert_eq!(operator.name, "operator_declaration");
    }

    #[test]
    fn anonymous_function_expression_gets_the_sentinel_name() {
        let source = "const f = function (x) {\n  return x;\n};\n";
        let records = parse("javascript", "js", source);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, ANONYMOUS_NAME);
        assert_eq!(records[0].kind, DefinitionKind::Function);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].signature, "function (x)");
    }

    #[test]
    fn named_function_expression_keeps_its_name() {
        let source = "const f = function helper(x) { return x; };\n";
        let records = parse("javascript", "js", source);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "helper");
    }

    #[test]
    fn resolve_name_falls_back_to_anonymous_sentinel() {
        let kind_spec = KindSpec {
            node_kind: "function_definition",
            kind: DefinitionKind::Function,
            has_name_field: true,
        };
        assert_eq!(resolve_name(&kind_spec, None), ANONYMOUS_NAME);
        assert_eq!(
            resolve_name(&kind_spec, Some("square".to_string())),
            "square"
        );
    }

    #[test]
    fn signature_truncates_at_body_delimiter_and_collapses_newlines() {
        let snippet = "fn add(\n    a: i32,\n    b: i32,\n) -> i32 {\n    a + b\n}";
        assert_eq!(
            signature_from_snippet(snippet, '{'),
            "fn add(     a: i32,     b: i32, ) -> i32"
        );
    }

    #[test]
    fn signature_window_respects_char_boundaries() {
        // A long run of multi-byte characters straddles the 200-byte mark
        let snippet = format!("fn f() -> i32 // {}", "é".repeat(120));
        let signature = signature_from_snippet(&snippet, '{');
        assert!(signature.starts_with("fn f() -> i32"));
    }
}
