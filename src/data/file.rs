// src/data/file.rs

// 🌍 Standard library
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

// 📦 External crates
use async_trait;
use log;
use tokio::time;

// 🧠 Internal modules
use super::types::{LoadError, RawRecordSet};
use super::{DataSource, RecordSetName};

/// Reads record sets from `<dir>/<name>.json`.
pub struct FileDataSource {
    dir: PathBuf,
    latency: Duration,
}

impl FileDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            latency: Duration::ZERO,
        }
    }

    /// Delays every load by `latency`, standing in for a remote API's response time.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn path_for(&self, name: RecordSetName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

#[async_trait::async_trait]
impl DataSource for FileDataSource {
    async fn load(&self, name: RecordSetName) -> Result<RawRecordSet, LoadError> {
        if !self.latency.is_zero() {
            time::sleep(self.latency).await;
        }

        let path = self.path_for(name);
        log::debug!("Loading {} from {}", name, path.display());

        let text = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
            _ => LoadError::Unknown(format!("Failed to read '{}': {}", path.display(), e)),
        })?;

        let records = RawRecordSet::decode(name, &text)?;
        log::info!("Loaded {} records from {}", records.len(), name);
        Ok(records)
    }
}
