//! Extension-to-grammar registry
//!
//! Owns one tree-sitter parser per enabled language for the process
//! lifetime. `ensure_built` is the explicit initialization phase; `resolve`
//! is a pure lookup afterwards.

use std::collections::HashMap;

use tree_sitter::{Parser, Tree};

use crate::config::ParsingConfig;
use crate::error::{RepodocError, Result};

use super::languages::{supported_languages, LanguageSpec};

struct GrammarEntry {
    spec: &'static LanguageSpec,
    parser: Option<Parser>,
}

/// Maps file extensions to compiled grammar handles
pub struct GrammarRegistry {
    entries: Vec<GrammarEntry>,
    by_extension: HashMap<&'static str, usize>,
}

/// A resolved grammar plus the parser that goes with it
pub struct LanguageHandle<'a> {
    pub spec: &'static LanguageSpec,
    parser: &'a mut Parser,
}

impl GrammarRegistry {
    /// Register the languages enabled in configuration. Grammars are not
    /// compiled here; call `ensure_built` once before parsing begins.
    pub fn new(config: &ParsingConfig) -> Self {
        let mut entries = Vec::new();
        let mut by_extension = HashMap::new();

        for spec in supported_languages() {
            if !config.languages.iter().any(|l| l == spec.name) {
                continue;
            }
            let index = entries.len();
            entries.push(GrammarEntry { spec, parser: None });
            for ext in spec.extensions {
                by_extension.insert(*ext, index);
            }
        }

        Self {
            entries,
            by_extension,
        }
    }

    /// Build every registered grammar that has not been built yet.
    /// Idempotent; a second call is a no-op.
    pub fn ensure_built(&mut self) -> Result<()> {
        for entry in &mut self.entries {
            if entry.parser.is_some() {
                continue;
            }
            let mut parser = Parser::new();
            let language = (entry.spec.grammar)();
            parser.set_language(&language).map_err(|e| {
                RepodocError::Config(format!(
                    "Failed to load {} grammar: {}",
                    entry.spec.name, e
                ))
            })?;
            entry.parser = Some(parser);
        }
        Ok(())
    }

    /// Resolve a file extension to a grammar handle. `None` means the
    /// extension is not in the recognized set and the caller should skip
    /// the file.
    pub fn resolve(&mut self, extension: &str) -> Option<LanguageHandle<'_>> {
        let index = *self.by_extension.get(extension)?;
        let entry = &mut self.entries[index];
        let parser = entry.parser.as_mut()?;
        Some(LanguageHandle {
            spec: entry.spec,
            parser,
        })
    }

    /// Same as `resolve`, but surfaces the miss as an error for callers
    /// that need one.
    pub fn resolve_required(&mut self, extension: &str) -> Result<LanguageHandle<'_>> {
        if !self.by_extension.contains_key(extension) {
            return Err(RepodocError::UnsupportedLanguage(extension.to_string()));
        }
        self.resolve(extension)
            .ok_or_else(|| RepodocError::Config("grammar registry not initialized".to_string()))
    }
}

impl LanguageHandle<'_> {
    /// Parse source text into a syntax tree. Deterministic for identical
    /// input; invalid source still yields a tree with error nodes, while a
    /// hard failure (parser bailout) surfaces as `ParseFailure`.
    pub fn parse(&mut self, source: &str, path: &std::path::Path) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| RepodocError::ParseFailure {
                path: path.to_path_buf(),
                detail: "parser returned no tree".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn registry_for(languages: &[&str]) -> GrammarRegistry {
        let config = ParsingConfig {
            languages: languages.iter().map(|s| s.to_string()).collect(),
            max_file_size: 1024 * 1024,
        };
        GrammarRegistry::new(&config)
    }

    #[test]
    fn resolve_is_none_for_unmapped_extensions() {
        let mut registry = registry_for(&["python"]);
        registry.ensure_built().unwrap();

        assert!(registry.resolve("md").is_none());
        assert!(registry.resolve("txt").is_none());
        assert!(registry.resolve("py").is_some());
    }

    #[test]
    fn disabled_languages_are_not_registered() {
        let mut registry = registry_for(&["python"]);
        registry.ensure_built().unwrap();

        assert!(registry.resolve("rs").is_none());
    }

    #[test]
    fn ensure_built_is_idempotent() {
        let mut registry = registry_for(&["python", "rust"]);
        registry.ensure_built().unwrap();
        registry.ensure_built().unwrap();

        assert!(registry.resolve("py").is_some());
        assert!(registry.resolve("rs").is_some());
    }

    #[test]
    fn resolve_required_reports_unsupported_language() {
        let mut registry = registry_for(&["python"]);
        registry.ensure_built().unwrap();

        match registry.resolve_required("md") {
            Err(RepodocError::UnsupportedLanguage(ext)) => assert_eq!(ext, "md"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn parse_yields_tree_even_for_invalid_source() {
        let mut registry = registry_for(&["python"]);
        registry.ensure_built().unwrap();

        let mut handle = registry.resolve("py").unwrap();
        let tree = handle
            .parse("def broken(:\n    pass\n", Path::new("broken.py"))
            .unwrap();
        assert!(tree.root_node().has_error());
    }
}
