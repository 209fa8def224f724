use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// User settings, persisted by the host and merged over the defaults on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub openai_api_key: String,
    pub humanloop_api_key: String,
    pub context: String,
    #[serde(rename = "showStatusBar")]
    pub show_status_bar: bool,
    pub max_tokens: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            humanloop_api_key: String::new(),
            context: String::new(),
            show_status_bar: true,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Settings {
    /// Masks a secret for display, keeping only the last four characters.
    pub fn mask(secret: &str) -> String {
        let count = secret.chars().count();
        if count == 0 {
            return "(not set)".to_string();
        }
        let tail: String = secret.chars().skip(count.saturating_sub(4)).collect();
        format!("{}{}", "*".repeat(count.saturating_sub(4).min(8)), tail)
    }
}
