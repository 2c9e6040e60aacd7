//! Model caller trait and stub implementation

use crate::error::Result;
use async_trait::async_trait;

/// Which configured model tier a call is billed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Flash,
    Pro,
}

/// Inputs of one generation call
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub topic: String,
    pub text_chunk: String,
    pub model_name: String,
    pub temperature: f32,
    pub safety: String,
    pub tier: ModelTier,
}

/// Trait for model clients
#[async_trait]
pub trait ModelCaller: Send + Sync {
    /// Generate text for a topic/chunk pair
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// Safe placeholder client: returns empty text, same interface the real
/// call will have.
pub struct StubCaller {
    model_name: String,
}

impl StubCaller {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }
}

#[async_trait]
impl ModelCaller for StubCaller {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        Ok(String::new())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
