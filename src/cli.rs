use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::Engine;

#[derive(Parser)]
#[command(name = "repodoc")]
#[command(about = "Generate an API report describing every definition in a repository")]
#[command(version)]
pub struct Cli {
    /// Path to the repository root to scan
    pub repo_path: PathBuf,

    /// Output Markdown file (defaults to the configured report path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn execute(self, mut engine: Engine, default_output: PathBuf) -> Result<()> {
        let output = self.output.unwrap_or(default_output);
        engine.run(&self.repo_path, &output).await?;
        Ok(())
    }
}
