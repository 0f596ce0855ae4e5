use super::{DefinitionKind, KindSpec, LanguageSpec};

pub(crate) static SPEC: LanguageSpec = LanguageSpec {
    name: "javascript",
    extensions: &["js", "mjs"],
    body_delimiter: '{',
    definition_kinds: &[
        KindSpec {
            node_kind: "function_declaration",
            kind: DefinitionKind::Function,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "generator_function_declaration",
            kind: DefinitionKind::Function,
            has_name_field: true,
        },
        // The grammar makes the name optional here; anonymous expressions
        // surface under the `<anon>` sentinel
        KindSpec {
            node_kind: "function_expression",
            kind: DefinitionKind::Function,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "method_definition",
            kind: DefinitionKind::Method,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "class_declaration",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
    ],
    grammar: tree_sitter_javascript::language,
};
