use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RepodocError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// LLM provider (openai-compatible chat completions endpoint)
    pub provider: String,

    /// Model name (e.g., "gpt-4o-mini", "qwen2.5-coder")
    pub model: String,

    /// API key (for hosted providers)
    pub api_key: Option<String>,

    /// Base URL (for local or custom endpoints)
    pub base_url: Option<String>,

    /// Maximum tokens generated per description
    pub max_new_tokens: u32,

    /// Sampling temperature; kept at 0.0 for reproducible reports
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source code parsing configuration
    pub parsing: ParsingConfig,

    /// Description generator settings
    pub generator: GeneratorConfig,

    /// Output settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Languages to support
    pub languages: Vec<String>,

    /// Maximum file size to parse (in bytes)
    pub max_file_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report path when the CLI does not override it
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parsing: ParsingConfig {
                languages: vec![
                    "rust".to_string(),
                    "java".to_string(),
                    "python".to_string(),
                    "csharp".to_string(),
                    "javascript".to_string(),
                ],
                max_file_size: 1024 * 1024, // 1MB
            },
            generator: GeneratorConfig {
                provider: "openai".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key: None,
                base_url: None,
                max_new_tokens: 256,
                temperature: 0.0,
            },
            output: OutputConfig {
                report_path: PathBuf::from("api_report.md"),
            },
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| RepodocError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RepodocError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => {
                if p.as_ref().exists() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                // Try common config file locations
                let candidates = ["Repodoc.toml", "repodoc.toml", ".repodoc.toml"];

                for candidate in &candidates {
                    if Path::new(candidate).exists() {
                        return Self::load(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }
}
