/// External service adapters (LLM providers)
pub mod llm;
