use crate::config::Config;
use domain::api::GenerationApi;
use domain::error::{ConfigError, TransportError};
use domain::models::{FeedbackRequest, FeedbackResponse, GenerationRequest, GenerationResponse};
use domain::settings::Settings;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::telemetry::Telemetry;
use std::sync::Arc;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Clone)]
pub struct HumanloopClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl HumanloopClient {
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Builds a client from the loaded config and the key in the settings
    /// store.
    pub fn from_settings(config: &Config, settings: &Settings) -> Result<Self, ConfigError> {
        Self::new(config.base_url.clone(), &settings.humanloop_api_key)
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let telemetry = Telemetry::new();
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| TransportError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;
        debug!(%url, status = status.as_u16(), elapsed_ms = telemetry.elapsed_ms(), "humanloop call finished");
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "humanloop returned an error status");
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
                body: text,
            });
        }
        serde_json::from_str(&text).map_err(|e| {
            warn!(%url, error = %e, "humanloop response was not the expected JSON");
            TransportError::Decode {
                url,
                message: e.to_string(),
            }
        })
    }
}

impl GenerationApi for HumanloopClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, TransportError> {
        debug!(project = %request.project, num_samples = request.num_samples, "generate");
        self.post("generate", request).await
    }

    async fn feedback(&self, request: &FeedbackRequest) -> Result<FeedbackResponse, TransportError> {
        debug!(data_id = %request.data_id, group = ?request.group, "feedback");
        self.post("feedback", request).await
    }
}
