use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{RepodocError, Result};

use super::llm::{create_generator, DescriptionGenerator};
use super::pipeline::DescriptionPipeline;
use super::registry::GrammarRegistry;
use super::report;
use super::scanner::RepoScanner;

/// Main orchestration engine: scan, describe, render, write
pub struct Engine {
    config: Config,
    registry: GrammarRegistry,
    generator: Box<dyn DescriptionGenerator>,
}

impl Engine {
    /// Create an engine with the generator named in configuration
    pub fn new(config: Config) -> Result<Self> {
        let generator = create_generator(&config.generator)?;
        Ok(Self::with_generator(config, generator))
    }

    /// Create an engine with an explicitly supplied generator. Tests use
    /// this to substitute a deterministic stub.
    pub fn with_generator(config: Config, generator: Box<dyn DescriptionGenerator>) -> Self {
        let registry = GrammarRegistry::new(&config.parsing);
        Self {
            config,
            registry,
            generator,
        }
    }

    /// Run the full pipeline over one repository and write the report.
    /// The only fatal condition is a missing repository root; every
    /// per-file and per-definition failure is contained downstream.
    pub async fn run(&mut self, repo_root: &Path, output: &Path) -> Result<()> {
        if !repo_root.is_dir() {
            return Err(RepodocError::Config(format!(
                "Repository root {} does not exist or is not a directory",
                repo_root.display()
            )));
        }

        debug!("Configuration: {:?}", self.config);
        info!("Scanning {}", repo_root.display());

        self.registry.ensure_built()?;

        let mut scanner =
            RepoScanner::new(&mut self.registry, self.config.parsing.max_file_size);
        let scanned = scanner.scan(repo_root)?;

        let total_definitions: usize = scanned.iter().map(|f| f.definitions.len()).sum();
        info!(
            "Found {} definition(s) across {} file(s)",
            total_definitions,
            scanned.len()
        );

        info!("Generating descriptions with {}", self.generator.model_name());
        let pipeline = DescriptionPipeline::new(self.generator.as_ref(), &self.config.generator);
        let records = pipeline.describe_all(&scanned).await;

        let document = report::render(&records);
        std::fs::write(output, document)?;

        info!(
            "Wrote {} report record(s) to {}",
            records.len(),
            output.display()
        );
        Ok(())
    }
}
