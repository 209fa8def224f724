use crate::host::{Clipboard, Host};
use domain::api::GenerationApi;
use domain::error::TransportError;
use domain::models::{FeedbackRequest, FeedbackResponse, Generation, GenerationRequest, GenerationResponse};
use serde_json::Value;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn generation(id: &str, output: &str, raw_output: &str) -> Generation {
    Generation {
        id: id.to_string(),
        output: output.to_string(),
        raw_output: raw_output.to_string(),
        prompt: String::new(),
        model_config: Value::Null,
    }
}

#[derive(Default)]
pub struct StubApi {
    pub response: GenerationResponse,
    pub fail_generate: bool,
    pub fail_feedback: bool,
    pub generated: Mutex<Vec<GenerationRequest>>,
    pub feedback: Mutex<Vec<FeedbackRequest>>,
}

impl StubApi {
    pub fn replying(data: Vec<Generation>) -> Self {
        Self {
            response: GenerationResponse { data },
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_generate: true,
            ..Self::default()
        }
    }

    pub fn feedback_sent(&self) -> Vec<FeedbackRequest> {
        self.feedback.lock().unwrap().clone()
    }
}

impl GenerationApi for StubApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, TransportError> {
        self.generated.lock().unwrap().push(request.clone());
        if self.fail_generate {
            return Err(TransportError::Network {
                url: "http://stub/generate".to_string(),
                message: "connection reset".to_string(),
            });
        }
        Ok(self.response.clone())
    }

    async fn feedback(&self, request: &FeedbackRequest) -> Result<FeedbackResponse, TransportError> {
        self.feedback.lock().unwrap().push(request.clone());
        if self.fail_feedback {
            return Err(TransportError::Status {
                url: "http://stub/feedback".to_string(),
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(FeedbackResponse::new())
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub notices: Mutex<Vec<String>>,
    pub statuses: Mutex<Vec<String>>,
    pub panel_open: AtomicBool,
    pub panel_opened: AtomicUsize,
}

impl RecordingHost {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn is_panel_open(&self) -> bool {
        self.panel_open.load(Ordering::SeqCst)
    }

    fn open_panel(&self) {
        self.panel_open.store(true, Ordering::SeqCst);
        self.panel_opened.fetch_add(1, Ordering::SeqCst);
    }

    fn show_status(&self, text: &str) {
        self.statuses.lock().unwrap().push(text.to_string());
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub broken: bool,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> shared::types::Result<()> {
        if self.broken {
            anyhow::bail!("clipboard unavailable");
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
