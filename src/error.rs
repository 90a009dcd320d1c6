use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetError {
    // Codec errors
    #[error("Flat parameter vector too short: shape requires {required} values, got {provided}")]
    LayoutError { required: usize, provided: usize },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    // Configuration errors
    #[error("Invalid network shape: {0}")]
    InvalidShape(String),

    #[error("Invalid weight initialisation: {0}")]
    InvalidInit(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
