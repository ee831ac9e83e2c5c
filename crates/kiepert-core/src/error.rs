use thiserror::Error;

#[derive(Debug, Error)]
pub enum KiepertError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Shader or program setup failed inside the rendering backend.
    #[error("Render pipeline error: {0}")]
    Pipeline(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, KiepertError>;
