use super::{DefinitionKind, KindSpec, LanguageSpec};

pub(crate) static SPEC: LanguageSpec = LanguageSpec {
    name: "csharp",
    extensions: &["cs"],
    body_delimiter: '{',
    definition_kinds: &[
        KindSpec {
            node_kind: "method_declaration",
            kind: DefinitionKind::Method,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "constructor_declaration",
            kind: DefinitionKind::Method,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "local_function_statement",
            kind: DefinitionKind::Function,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "class_declaration",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "interface_declaration",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
        // Operator declarations carry an operator token, not a name field
        KindSpec {
            node_kind: "operator_declaration",
            kind: DefinitionKind::Method,
            has_name_field: false,
        },
    ],
    grammar: tree_sitter_c_sharp::language,
};
