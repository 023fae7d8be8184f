use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::UploadError;
use crate::settings::AppConfig;

/// Blob storage port for resume documents. Only the derived public URL is
/// ever persisted on a job-seeker profile.
#[async_trait]
pub trait ResumeStorage: Send + Sync {
    async fn store(&self, key: &str, data: &[u8]) -> Result<(), UploadError>;
    fn public_url(&self, key: &str) -> String;
}

/// Filesystem-backed store. Serving the files is left to whatever fronts
/// the configured public base URL (reverse proxy or CDN).
pub struct FsResumeStore {
    root: PathBuf,
    public_base: String,
}

impl FsResumeStore {
    pub fn new(config: &AppConfig) -> Self {
        FsResumeStore {
            root: PathBuf::from(&config.resume_storage_dir),
            public_base: config.resume_public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ResumeStorage for FsResumeStore {
    async fn store(&self, key: &str, data: &[u8]) -> Result<(), UploadError> {
        let path = self.root.join(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| UploadError::Storage(e.to_string()))?;
        }

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| UploadError::Storage(e.to_string()))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }
}
