use crate::error::TransportError;
use crate::models::{FeedbackRequest, FeedbackResponse, GenerationRequest, GenerationResponse};
use std::future::Future;

/// The two remote calls Thought Partner makes.
pub trait GenerationApi {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, TransportError>> + Send;

    fn feedback(
        &self,
        request: &FeedbackRequest,
    ) -> impl Future<Output = Result<FeedbackResponse, TransportError>> + Send;
}
