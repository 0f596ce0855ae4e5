use super::{DefinitionKind, KindSpec, LanguageSpec};

pub(crate) static SPEC: LanguageSpec = LanguageSpec {
    name: "rust",
    extensions: &["rs"],
    body_delimiter: '{',
    definition_kinds: &[
        KindSpec {
            node_kind: "function_item",
            kind: DefinitionKind::Function,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "struct_item",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "enum_item",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "trait_item",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
    ],
    grammar: tree_sitter_rust::language,
};
