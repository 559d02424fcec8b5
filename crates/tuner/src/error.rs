use std::path::Path;

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid source location `{input}`: {reason}")]
    InvalidLocation { input: String, reason: String },

    #[error("HTTP request failed: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    #[error("request failed with HTTP {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("could not read playlist `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("could not persist source registry to `{path}`: {source}")]
    RegistryPersist {
        path: String,
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn invalid_location(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn http_status(status: StatusCode, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn registry_persist(path: &Path, source: std::io::Error) -> Self {
        Self::RegistryPersist {
            path: path.display().to_string(),
            source,
        }
    }
}
