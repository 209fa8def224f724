//! Runs one generation command end to end.
//!
//! Every command goes Idle → Requesting → Success | Failed → Idle. Failures
//! of any kind are logged and replaced by a generic notice; the error text
//! is never shown to the user.

use crate::events::{EventSender, GenerationEvent};
use crate::host::Host;
use crate::status::StatusBar;
use domain::api::GenerationApi;
use domain::editor::Editor;
use domain::error::{CommandError, HostError};
use domain::insertion::Insertion;
use domain::mode::GenerationMode;
use domain::models::{GenerationInputs, GenerationRequest, GenerationResponse, ProviderApiKeys};
use domain::settings::Settings;
use std::time::Duration;
use tracing::{debug, error, info};

pub const ERROR_NOTICE: &str = "Thought Partner: Error check console";
pub const ERROR_STATUS: &str = "Error check console";
pub const ERROR_STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Text was written into the document.
    Inserted(Insertion),
    /// The result only went to the result display.
    Published,
    Failed,
    /// No Markdown editor was active; nothing was sent.
    NoEditor,
}

pub struct CommandOrchestrator<A, H> {
    api: A,
    host: H,
    settings: Settings,
    status: StatusBar,
    events: EventSender,
    num_samples: u32,
}

impl<A: GenerationApi, H: Host> CommandOrchestrator<A, H> {
    pub fn new(api: A, host: H, settings: Settings, events: EventSender) -> Self {
        let status = StatusBar::new(settings.show_status_bar);
        Self {
            api,
            host,
            settings,
            status,
            events,
            num_samples: 1,
        }
    }

    pub fn with_num_samples(mut self, num_samples: u32) -> Self {
        self.num_samples = num_samples.max(1);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: Settings) {
        self.status.set_visible(settings.show_status_bar);
        self.settings = settings;
    }

    pub fn prepare_request<E: Editor + ?Sized>(&self, editor: &E, mode: GenerationMode) -> GenerationRequest {
        GenerationRequest {
            project: mode.project().to_string(),
            max_tokens: self.settings.max_tokens,
            num_samples: self.num_samples,
            inputs: GenerationInputs {
                input: editor.context(),
            },
            provider_api_keys: ProviderApiKeys {
                openai: self.settings.openai_api_key.clone(),
            },
        }
    }

    pub async fn run<E: Editor + ?Sized>(&self, mode: GenerationMode, editor: Option<&mut E>) -> CommandOutcome {
        let Some(editor) = editor else {
            self.host.notice(&HostError::NotMarkdown.to_string());
            return CommandOutcome::NoEditor;
        };

        self.set_status(mode.status_label());
        self.host.notice(mode.progress_notice());
        if !mode.mutates_document() && !self.host.is_panel_open() {
            self.host.open_panel();
        }

        match self.execute(mode, editor).await {
            Ok(outcome) => {
                self.set_status("");
                outcome
            }
            Err(err) => {
                error!(%mode, error = %err, "generation command failed");
                self.host.notice(ERROR_NOTICE);
                self.set_status(ERROR_STATUS);
                self.status.clear_after(ERROR_STATUS_TTL);
                CommandOutcome::Failed
            }
        }
    }

    async fn execute<E: Editor + ?Sized>(
        &self,
        mode: GenerationMode,
        editor: &mut E,
    ) -> Result<CommandOutcome, CommandError> {
        let request = self.prepare_request(&*editor, mode);
        debug!(%mode, input_chars = request.inputs.input.chars().count(), "requesting generation");
        let response = self.api.generate(&request).await?;

        let pending = match mode.insert_location() {
            Some(location) => {
                let text = response.first_raw_output().ok_or(CommandError::EmptyResponse)?;
                Some((text.to_string(), location))
            }
            None => None,
        };

        self.publish(mode, response);

        Ok(match pending {
            Some((text, location)) => {
                let insertion = editor.insert_generated(&text, location);
                info!(%mode, line = insertion.position.line, ch = insertion.position.ch, "inserted generation");
                CommandOutcome::Inserted(insertion)
            }
            None => CommandOutcome::Published,
        })
    }

    fn set_status(&self, label: &str) {
        self.status.update(label);
        self.host.show_status(&self.status.text());
    }

    fn publish(&self, mode: GenerationMode, response: GenerationResponse) {
        if self.events.send(GenerationEvent { mode, response }).is_err() {
            debug!(%mode, "result display is closed; dropping generation event");
        }
    }
}
