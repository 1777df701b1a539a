use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use wpgauge_core::error::{GaugeError, Result};
use wpgauge_core::GaugeData;

use super::GaugeStore;

/// Flat JSON file holding the whole collection.
///
/// Saves go to a sibling `.tmp` file which is then renamed over the target,
/// so readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl GaugeStore for JsonFileStore {
    async fn load(&self) -> Result<GaugeData> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "gauge file missing, starting empty");
                return Ok(GaugeData::default());
            }
            Err(e) => {
                return Err(GaugeError::Store(format!(
                    "read {} failed: {e}",
                    self.path.display()
                )))
            }
        };

        serde_json::from_slice(&raw).map_err(|e| {
            GaugeError::Store(format!("parse {} failed: {e}", self.path.display()))
        })
    }

    async fn save(&self, data: &GaugeData) -> Result<()> {
        let body = serde_json::to_vec_pretty(data)
            .map_err(|e| GaugeError::Store(format!("encode gauges failed: {e}")))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                GaugeError::Store(format!("create {} failed: {e}", dir.display()))
            })?;
        }

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &body)
            .await
            .map_err(|e| GaugeError::Store(format!("write {} failed: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            GaugeError::Store(format!("replace {} failed: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), gauges = data.len(), "gauges saved");
        Ok(())
    }
}
