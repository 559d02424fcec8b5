// Playlist source resolution and loading: one dispatch per load call,
// decided up front by scheme inspection.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::LoaderConfig;
use crate::error::CatalogError;

/// A playlist location resolved to its source kind.
///
/// Resolution happens once per load; the two arms normalize to the same
/// raw-bytes outcome consumed by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource {
    Local { path: PathBuf },
    Remote { url: Url },
}

impl PlaylistSource {
    /// Inspect a location string and decide how it must be loaded.
    ///
    /// `http`/`https` addresses are remote; `file://` URIs are stripped down
    /// to their local path; anything else is taken as a filesystem path
    /// verbatim (including strings that happen to parse as exotic URLs).
    pub fn resolve(location: &str) -> Self {
        if let Ok(url) = Url::parse(location) {
            match url.scheme() {
                "http" | "https" => return Self::Remote { url },
                "file" => {
                    if let Ok(path) = url.to_file_path() {
                        return Self::Local { path };
                    }
                }
                _ => {}
            }
        }

        Self::Local {
            path: PathBuf::from(location),
        }
    }
}

/// Loads playlist bytes from a resolved source.
///
/// Remote fetches are asynchronous and bounded by the configured timeouts;
/// local reads are synchronous whole-file reads.
pub struct SourceLoader {
    client: Client,
}

impl SourceLoader {
    pub fn new(config: &LoaderConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(config.headers.clone())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self { client })
    }

    /// Resolve `location` and load its raw bytes.
    pub async fn load(&self, location: &str) -> Result<Bytes, CatalogError> {
        match PlaylistSource::resolve(location) {
            PlaylistSource::Remote { url } => self.fetch_remote(url).await,
            PlaylistSource::Local { path } => Self::read_local(&path),
        }
    }

    async fn fetch_remote(&self, url: Url) -> Result<Bytes, CatalogError> {
        debug!(%url, "fetching remote playlist");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::http_status(status, url.as_str()));
        }

        Ok(response.bytes().await?)
    }

    fn read_local(path: &Path) -> Result<Bytes, CatalogError> {
        debug!(path = %path.display(), "reading local playlist");

        fs::read(path)
            .map(Bytes::from)
            .map_err(|source| CatalogError::io(path, source))
    }
}
