use thiserror::Error;

/// Top-level error type used across the workspace.
///
/// The widget itself never fails: degenerate inputs degrade visually
/// instead of erroring. Everything fallible lives in the ambient layer
/// (config parsing, file I/O).
#[derive(Debug, Error)]
pub enum RopeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = RopeError> = std::result::Result<T, E>;
