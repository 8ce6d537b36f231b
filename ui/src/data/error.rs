use thiserror::Error;

/// Startup data-load failure. Every variant names the document involved.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to request {path}: {source}")]
    Request {
        path: String,
        source: reqwest::Error,
    },

    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("cannot resolve {path}: {reason}")]
    BaseUrl { path: String, reason: String },
}

impl LoadError {
    pub fn path(&self) -> &str {
        match self {
            LoadError::Request { path, .. }
            | LoadError::Status { path, .. }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::BaseUrl { path, .. } => path,
        }
    }
}
