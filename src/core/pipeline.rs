//! Per-definition description pipeline
//!
//! Consumes definition records in discovery order and produces report
//! records. One attempt per definition; a failed generation drops that
//! record with a logged warning and the run continues.

use tracing::{debug, warn};

use crate::config::GeneratorConfig;

use super::llm::{build_prompt, extract_description, DescriptionGenerator};
use super::report::ReportRecord;
use super::scanner::ScannedFile;

pub struct DescriptionPipeline<'a> {
    generator: &'a dyn DescriptionGenerator,
    max_new_tokens: u32,
    temperature: f32,
}

impl<'a> DescriptionPipeline<'a> {
    pub fn new(generator: &'a dyn DescriptionGenerator, config: &GeneratorConfig) -> Self {
        Self {
            generator,
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
        }
    }

    /// Describe every definition in every scanned file, preserving
    /// discovery order in the output.
    pub async fn describe_all(&self, files: &[ScannedFile]) -> Vec<ReportRecord> {
        let mut report = Vec::new();

        for file in files {
            for definition in &file.definitions {
                let prompt = build_prompt(&definition.snippet);

                let raw = match self
                    .generator
                    .generate(&prompt, self.max_new_tokens, self.temperature)
                    .await
                {
                    Ok(raw) => raw,
                    Err(e) => {
                        warn!("Generator error on {}: {}", definition.location(), e);
                        continue;
                    }
                };

                let description = extract_description(&prompt, &raw);
                debug!("Described {}", definition.location());

                report.push(ReportRecord {
                    name: definition.name.clone(),
                    signature: definition.signature.clone(),
                    location: definition.location(),
                    description,
                });
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::languages::DefinitionKind;
    use crate::core::walker::DefinitionRecord;
    use crate::error::{RepodocError, Result};
    use std::path::PathBuf;

    /// Deterministic stub: describes snippets by echoing their first word,
    /// fails on snippets marked to fail.
    struct StubGenerator;

    #[async_trait::async_trait]
    impl DescriptionGenerator for StubGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _max_new_tokens: u32,
            _temperature: f32,
        ) -> Result<String> {
            if prompt.contains("FAIL_ME") {
                return Err(RepodocError::Generation("stub failure".to_string()));
            }
            if prompt.contains("square") {
                return Ok("Returns the square of x.".to_string());
            }
            Ok("Describes the code.".to_string())
        }

        fn model_name(&self) -> &str {
            "stub"
        }
    }

    fn definition(name: &str, snippet: &str, line: usize) -> DefinitionRecord {
        DefinitionRecord {
            name: name.to_string(),
            kind: DefinitionKind::Function,
            signature: format!("def {}()", name),
            snippet: snippet.to_string(),
            file_path: PathBuf::from("src/app.py"),
            line,
        }
    }

    fn generator_config() -> GeneratorConfig {
        GeneratorConfig {
            provider: "openai".to_string(),
            model: "stub".to_string(),
            api_key: None,
            base_url: None,
            max_new_tokens: 256,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn report_preserves_discovery_order() {
        let files = vec![ScannedFile {
            path: PathBuf::from("src/app.py"),
            definitions: vec![
                definition("square", "def square(x):\n    return x * x", 2),
                definition("cube", "def cube(x):\n    return x ** 3", 7),
            ],
        }];

        let generator = StubGenerator;
        let pipeline = DescriptionPipeline::new(&generator, &generator_config());
        let report = pipeline.describe_all(&files).await;

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].name, "square");
        assert_eq!(report[0].location, "src/app.py:2");
        assert_eq!(report[0].description, "Returns the square of x.");
        assert_eq!(report[1].name, "cube");
    }

    #[tokio::test]
    async fn failed_generations_are_dropped_without_halting() {
        let files = vec![ScannedFile {
            path: PathBuf::from("src/app.py"),
            definitions: vec![
                definition("first", "def first(): pass", 1),
                definition("broken", "def broken(): FAIL_ME", 3),
                definition("last", "def last(): pass", 5),
            ],
        }];

        let generator = StubGenerator;
        let pipeline = DescriptionPipeline::new(&generator, &generator_config());
        let report = pipeline.describe_all(&files).await;

        let names: Vec<&str> = report.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "last"]);
    }
}
