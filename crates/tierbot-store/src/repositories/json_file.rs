//! JSON file ledger store
//!
//! The whole ledger lives in one JSON document that is rewritten on every
//! save. Writes go to a sibling temp file which is then renamed over the
//! target, so a crash mid-write leaves the previous version intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tierbot_core::{Ledger, LedgerStore, RepoResult};
use tracing::{debug, info, instrument, warn};

use super::error::{map_io_error, map_serde_error};
use crate::models::LedgerDocument;

/// Ledger store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    /// Create a store for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "reactions.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn create_empty(&self) {
        if let Err(e) = self.write_atomic(b"{}").await {
            warn!(path = %self.path.display(), error = %e, "Failed to create empty ledger file");
        } else {
            info!(path = %self.path.display(), "Created empty ledger file");
        }
    }

    async fn write_atomic(&self, bytes: &[u8]) -> RepoResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io_error(parent, e))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| map_io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| map_io_error(&self.path, e))
    }
}

#[async_trait]
impl LedgerStore for JsonLedgerStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Ledger {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_empty().await;
                return Ledger::new();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read ledger file, using empty ledger");
                return Ledger::new();
            }
        };

        match LedgerDocument::from_slice(&bytes) {
            Ok(document) => {
                let ledger = Ledger::from(document);
                debug!(
                    tracked = ledger.tracked_messages().len(),
                    users = ledger.user_count(),
                    "Ledger loaded"
                );
                ledger
            }
            Err(e) => {
                warn!(error = %e, "Ledger file is not a valid document, using empty ledger");
                Ledger::new()
            }
        }
    }

    #[instrument(skip(self, ledger), fields(path = %self.path.display()))]
    async fn save(&self, ledger: &Ledger) -> RepoResult<()> {
        let bytes = LedgerDocument::from(ledger)
            .to_pretty_vec()
            .map_err(|e| map_serde_error(&self.path, e))?;
        self.write_atomic(&bytes).await?;
        debug!(bytes = bytes.len(), "Ledger saved");
        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => LedgerDocument::from_slice(&bytes)
                .map(|_| ())
                .map_err(|e| map_serde_error(&self.path, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(&self.path, e)),
        }
    }
}
