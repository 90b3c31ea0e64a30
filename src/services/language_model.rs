use async_trait::async_trait;

use crate::analysis::AnalysisRequest;
use crate::error::AnalysisError;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Runs one schema-constrained generation and returns the raw response text.
    async fn generate(&self, request: &AnalysisRequest) -> Result<String, AnalysisError>;
}
