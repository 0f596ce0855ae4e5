use crate::error::Result;

/// Trait for backends that can describe a code snippet
#[async_trait::async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Generate text for the given prompt. Decoding must be deterministic
    /// when `temperature` is 0.0 so reruns produce identical reports.
    async fn generate(&self, prompt: &str, max_new_tokens: u32, temperature: f32)
        -> Result<String>;

    /// Model name being used (for logs)
    fn model_name(&self) -> &str;
}

/// Wrap a snippet in the fixed instruction template sent to the generator
pub fn build_prompt(snippet: &str) -> String {
    format!(
        "Write a comment for the code.\n\
         Use docstring format.\n\
         The answer must contain only a description of the code, strictly no longer than 128 tokens.\n\
         The code to describe follows:\n\n\
         {}\n\
         ```\n\nDescription:\n",
        snippet.trim()
    )
}

/// Recover the generated description from raw generator output. Completion
/// backends echo the prompt back; chat backends return only the completion.
pub fn extract_description(prompt: &str, raw_output: &str) -> String {
    raw_output
        .strip_prefix(prompt)
        .unwrap_or(raw_output)
        .trim()
        .to_string()
}
