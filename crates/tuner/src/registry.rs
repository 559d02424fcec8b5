// Persisted list of named playlist sources, stored as a JSON array in the
// platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::CatalogError;

const REGISTRY_FILE: &str = "playlists.json";

/// One saved playlist source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSource {
    pub name: String,
    pub source: String,
    pub is_url: bool,
}

/// On-disk record. `isUrl` is optional for files written before the flag
/// existed; it is then inferred from the source's scheme.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSource {
    name: String,
    source: String,
    #[serde(rename = "isUrl")]
    is_url: Option<bool>,
}

impl From<StoredSource> for SavedSource {
    fn from(stored: StoredSource) -> Self {
        let is_url = stored
            .is_url
            .unwrap_or_else(|| looks_like_url(&stored.source));

        Self {
            name: stored.name,
            source: stored.source,
            is_url,
        }
    }
}

impl From<&SavedSource> for StoredSource {
    fn from(saved: &SavedSource) -> Self {
        Self {
            name: saved.name.clone(),
            source: saved.source.clone(),
            is_url: Some(saved.is_url),
        }
    }
}

/// `http`, `https` and `ftp` schemes count as URLs; everything else is a
/// file path.
fn looks_like_url(source: &str) -> bool {
    Url::parse(source)
        .map(|url| url.scheme().starts_with("http") || url.scheme() == "ftp")
        .unwrap_or(false)
}

/// The saved source registry consumed by callers that hand locations to the
/// catalog engine.
///
/// Mutations persist immediately. Out-of-range indices are ignored for
/// `remove`/`edit` and yield `None` from the accessors.
#[derive(Debug)]
pub struct SourceRegistry {
    path: PathBuf,
    entries: Vec<SavedSource>,
}

impl SourceRegistry {
    /// Registry file under the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tuner")
            .join(REGISTRY_FILE)
    }

    /// Registry file under an explicit config directory.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(REGISTRY_FILE)
    }

    /// Load a registry file. A missing or undecodable file starts an empty
    /// registry rather than failing.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<Vec<StoredSource>>(&bytes) {
                Ok(stored) => stored.into_iter().map(SavedSource::from).collect(),
                Err(error) => {
                    warn!(path = %path.display(), %error, "ignoring undecodable source registry");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self { path, entries }
    }

    pub fn entries(&self) -> &[SavedSource] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.name.as_str())
    }

    pub fn source(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.source.as_str())
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let source = source.into();
        let is_url = looks_like_url(&source);

        self.entries.push(SavedSource {
            name: name.into(),
            source,
            is_url,
        });
        self.save()
    }

    pub fn edit(
        &mut self,
        index: usize,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let Some(entry) = self.entries.get_mut(index) else {
            return Ok(());
        };

        entry.name = name.into();
        entry.source = source.into();
        entry.is_url = looks_like_url(&entry.source);
        self.save()
    }

    pub fn remove(&mut self, index: usize) -> Result<(), CatalogError> {
        if index >= self.entries.len() {
            return Ok(());
        }

        self.entries.remove(index);
        self.save()
    }

    fn save(&self) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| CatalogError::registry_persist(&self.path, source))?;
        }

        let stored: Vec<StoredSource> = self.entries.iter().map(StoredSource::from).collect();
        let json = serde_json::to_vec_pretty(&stored)
            .map_err(|error| CatalogError::registry_persist(&self.path, std::io::Error::other(error)))?;

        fs::write(&self.path, json).map_err(|source| {
            warn!(path = %self.path.display(), "failed to save source registry");
            CatalogError::registry_persist(&self.path, source)
        })
    }
}
