use thiserror::Error;

/// Failure talking to the generation service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} returned HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// The host has nothing a command can act on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("The file type should be Markdown!")]
    NotMarkdown,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Humanloop API key is not set; run `thought-partner settings`")]
    MissingApiKey,
    #[error("settings file {path}: {message}")]
    Settings { path: String, message: String },
}

/// Why a generation command did not complete.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("generation returned no samples")]
    EmptyResponse,
}
