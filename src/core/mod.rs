mod engine;
mod pipeline;
mod registry;
mod report;
mod scanner;
mod walker;

// Language-specific definition tables
mod languages;

// Description generation
mod llm;

pub use languages::{DefinitionKind, KindSpec, LanguageSpec};
pub use llm::{build_prompt, extract_description, create_generator, DescriptionGenerator};
pub use pipeline::DescriptionPipeline;
pub use registry::{GrammarRegistry, LanguageHandle};
pub use report::{render, ReportRecord};
pub use scanner::{RepoScanner, ScannedFile};
pub use walker::{extract_definitions, DefinitionRecord, ANONYMOUS_NAME};

// Export the main engine
pub use engine::Engine;
