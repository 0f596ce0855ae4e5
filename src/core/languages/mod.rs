//! Per-language definition-kind tables for the supported grammars
//!
//! Each language gets its own module declaring which tree-sitter node kinds
//! count as definitions, so the walker never has to know about individual
//! languages.

mod csharp;
mod java;
mod javascript;
mod python;
mod rust;

use serde::{Deserialize, Serialize};
use tree_sitter::Language;

/// Structural category of a matched definition node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Function,
    Method,
    Class,
}

/// One entry in a language's definition-kind table
#[derive(Debug, Clone, Copy)]
pub struct KindSpec {
    /// Tree-sitter node kind string (e.g., "function_definition")
    pub node_kind: &'static str,

    /// Category the node kind maps to
    pub kind: DefinitionKind,

    /// Whether the grammar gives this kind a conventional `name` field.
    /// Kinds without one (e.g., C# operator declarations) report the node
    /// kind string as their name instead of `<anon>`.
    pub has_name_field: bool,
}

/// Static description of one supported language
pub struct LanguageSpec {
    /// Language name as it appears in configuration
    pub name: &'static str,

    /// File extensions handled by this grammar
    pub extensions: &'static [&'static str],

    /// Delimiter that opens a definition body, used by the signature heuristic
    pub body_delimiter: char,

    /// Closed set of node kinds treated as definitions
    pub definition_kinds: &'static [KindSpec],

    /// Grammar constructor from the language crate
    pub grammar: fn() -> Language,
}

impl LanguageSpec {
    /// Look up a node kind in this language's definition table
    pub fn classify(&self, node_kind: &str) -> Option<&KindSpec> {
        self.definition_kinds
            .iter()
            .find(|spec| spec.node_kind == node_kind)
    }
}

/// All languages this build knows how to parse
pub fn supported_languages() -> &'static [&'static LanguageSpec] {
    static LANGUAGES: [&LanguageSpec; 5] = [
        &rust::SPEC,
        &java::SPEC,
        &python::SPEC,
        &csharp::SPEC,
        &javascript::SPEC,
    ];
    &LANGUAGES
}
