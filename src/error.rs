#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("No window titled any of: {0}")]
    WindowNotFound(String),

    #[error("Target window has no {0} control")]
    ControlNotFound(String),

    #[error("Send error: {0}")]
    Send(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
