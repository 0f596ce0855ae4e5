//! Description generation for extracted definitions
//!
//! Trait-based integration so the engine can run against any
//! chat-completions endpoint, or against a deterministic stub in tests.

mod describer;
mod providers;

pub use describer::{build_prompt, extract_description, DescriptionGenerator};
pub use providers::{create_generator, OpenAiCompatibleProvider};
