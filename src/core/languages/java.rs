use super::{DefinitionKind, KindSpec, LanguageSpec};

pub(crate) static SPEC: LanguageSpec = LanguageSpec {
    name: "java",
    extensions: &["java"],
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
            node_kind: "class_declaration",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "interface_declaration",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
    ],
    grammar: tree_sitter_java::language,
};
