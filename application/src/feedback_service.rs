use crate::host::{Clipboard, Host};
use crate::result_display::ResultCard;
use domain::api::GenerationApi;
use domain::models::FeedbackRequest;
use tracing::{debug, warn};

/// Card actions. Feedback is fire-and-forget: failures are logged only.
pub struct FeedbackService<'a, A, H> {
    api: &'a A,
    host: &'a H,
}

impl<'a, A: GenerationApi, H: Host> FeedbackService<'a, A, H> {
    pub fn new(api: &'a A, host: &'a H) -> Self {
        Self { api, host }
    }

    async fn send(&self, request: FeedbackRequest) {
        match self.api.feedback(&request).await {
            Ok(_) => debug!(data_id = %request.data_id, group = ?request.group, "feedback sent"),
            Err(err) => warn!(data_id = %request.data_id, error = %err, "feedback failed"),
        }
    }

    /// Called when a card's text area loses focus. Returns whether a
    /// correction was sent.
    pub async fn blur(&self, card: &ResultCard) -> bool {
        match card.correction() {
            Some(request) => {
                self.host.notice("Sending this as a correction");
                self.send(request).await;
                true
            }
            None => false,
        }
    }

    pub async fn copy(&self, card: &ResultCard, clipboard: &mut dyn Clipboard) -> bool {
        if let Err(err) = clipboard.write_text(&card.output) {
            warn!(error = %err, "clipboard write failed");
            self.host.notice("Could not copy to clipboard");
            return false;
        }
        self.host.notice("Copied to clipboard");
        self.send(FeedbackRequest::copied(&card.id)).await;
        true
    }

    pub async fn upvote(&self, card: &ResultCard) {
        self.host.notice("Marked as a good generation");
        self.send(FeedbackRequest::upvote(&card.id)).await;
    }

    pub async fn downvote(&self, card: &ResultCard) {
        self.host.notice("Marked as a poor generation");
        self.send(FeedbackRequest::downvote(&card.id)).await;
    }
}
