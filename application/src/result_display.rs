//! State behind the results panel.
//!
//! Holds only the latest generation. Overlapping commands race and the last
//! event received wins.

use crate::events::{EventReceiver, GenerationEvent};
use domain::mode::GenerationMode;
use domain::models::{FeedbackRequest, Generation};
use tracing::debug;

pub const EMPTY_HEADER: &str = "Call Thought Partner to see results here.";

/// One generated sample with its editable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub id: String,
    pub output: String,
    draft: String,
}

impl ResultCard {
    fn from_generation(generation: &Generation) -> Self {
        Self {
            id: generation.id.clone(),
            output: generation.output.clone(),
            draft: generation.output.clone(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_edited(&self) -> bool {
        self.draft != self.output
    }

    /// The correction to send when the text area loses focus, if any.
    pub fn correction(&self) -> Option<FeedbackRequest> {
        self.is_edited()
            .then(|| FeedbackRequest::correction(&self.id, &self.draft))
    }
}

#[derive(Debug, Default)]
pub struct ResultDisplay {
    mode: Option<GenerationMode>,
    cards: Vec<ResultCard>,
}

impl ResultDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: GenerationEvent) {
        debug!(mode = %event.mode, samples = event.response.data.len(), "result display updated");
        self.mode = Some(event.mode);
        self.cards = event.response.data.iter().map(ResultCard::from_generation).collect();
    }

    /// Applies every event waiting on the channel. Returns how many arrived.
    pub fn drain(&mut self, events: &mut EventReceiver) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn mode(&self) -> Option<GenerationMode> {
        self.mode
    }

    pub fn header(&self) -> &'static str {
        self.mode.map(GenerationMode::result_header).unwrap_or(EMPTY_HEADER)
    }

    pub fn cards(&self) -> &[ResultCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&ResultCard> {
        self.cards.get(index)
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut ResultCard> {
        self.cards.get_mut(index)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
