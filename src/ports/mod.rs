/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod llm;

pub use llm::{LlmConfig, LlmServicePort};

#[cfg(test)]
pub use llm::MockLlmServicePort;
