//! Prompt templates for LLM message analysis

/// Default prompt templates
pub struct PromptTemplates;

impl PromptTemplates {
    /// Get default prompt for analysing a chat message
    pub fn risk_analysis() -> &'static str {
        "Analyze the following message for CVD risk factors: {message}"
    }

    /// Substitute the raw user message into a template
    pub fn render(template: &str, message: &str) -> String {
        template.replace("{message}", message)
    }
}
