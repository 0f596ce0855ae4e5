use super::{DefinitionKind, KindSpec, LanguageSpec};

/// Python definitions; the grammar uses `function_definition` for both
/// free functions and methods, so both surface as functions.
pub(crate) static SPEC: LanguageSpec = LanguageSpec {
    name: "python",
    extensions: &["py"],
    body_delimiter: ':',
    definition_kinds: &[
        KindSpec {
            node_kind: "function_definition",
            kind: DefinitionKind::Function,
            has_name_field: true,
        },
        KindSpec {
            node_kind: "class_definition",
            kind: DefinitionKind::Class,
            has_name_field: true,
        },
    ],
    grammar: tree_sitter_python::language,
};
