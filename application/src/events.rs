use domain::mode::GenerationMode;
use domain::models::GenerationResponse;
use tokio::sync::mpsc;

/// A finished generation, tagged with the mode that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationEvent {
    pub mode: GenerationMode,
    pub response: GenerationResponse,
}

pub type EventSender = mpsc::UnboundedSender<GenerationEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<GenerationEvent>;

/// The single channel between the orchestrator and the result display.
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
