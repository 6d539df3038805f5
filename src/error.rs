use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Document {path} unchanged after replacing marker '{marker}' (marker line missing?)")]
    NoChange { path: String, marker: String },
}

impl PinError {
    /// Process exit status for this error. `NoChange` is reserved for 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PinError::NoChange { .. } => 1,
            PinError::Config(_) | PinError::Io(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, PinError>;
