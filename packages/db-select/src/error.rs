use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbSelectError {
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DbSelectError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
