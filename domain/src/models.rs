use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// User name attached to every feedback call.
pub const FEEDBACK_USER: &str = "thought-partner-user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationInputs {
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderApiKeys {
    #[serde(rename = "OpenAI")]
    pub openai: String,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub project: String,
    pub max_tokens: u32,
    pub num_samples: u32,
    pub inputs: GenerationInputs,
    pub provider_api_keys: ProviderApiKeys,
}

/// One generated sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub id: String,
    pub output: String,
    pub raw_output: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub model_config: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub data: Vec<Generation>,
}

impl GenerationResponse {
    /// Text to insert into the document: the first sample's raw output.
    pub fn first_raw_output(&self) -> Option<&str> {
        self.data.first().map(|g| g.raw_output.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackGroup {
    Correction,
    Actions,
    Vote,
}

/// Body of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub data_id: String,
    pub group: FeedbackGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub user: String,
}

impl FeedbackRequest {
    fn labelled(data_id: &str, group: FeedbackGroup, label: &str) -> Self {
        Self {
            data_id: data_id.to_string(),
            group,
            label: Some(label.to_string()),
            text: None,
            user: FEEDBACK_USER.to_string(),
        }
    }

    pub fn correction(data_id: &str, text: &str) -> Self {
        Self {
            data_id: data_id.to_string(),
            group: FeedbackGroup::Correction,
            label: None,
            text: Some(text.to_string()),
            user: FEEDBACK_USER.to_string(),
        }
    }

    pub fn copied(data_id: &str) -> Self {
        Self::labelled(data_id, FeedbackGroup::Actions, "copied")
    }

    pub fn upvote(data_id: &str) -> Self {
        Self::labelled(data_id, FeedbackGroup::Vote, "upvote")
    }

    pub fn downvote(data_id: &str) -> Self {
        Self::labelled(data_id, FeedbackGroup::Vote, "downvote")
    }
}

/// The feedback endpoint's reply is not otherwise constrained.
pub type FeedbackResponse = HashMap<String, Value>;
