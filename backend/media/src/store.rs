//! Local upload store.
//!
//! Persists validated image uploads under derived storage keys and hands out
//! their bytes again for the description pipeline and the `/uploads` routes.

use std::path::{Path, PathBuf};

use chrono::Utc;
use md5::{Digest, Md5};
use tokio::fs;
use tracing::{error, info};

use snapfind_core::{AppError, StoredUpload};

use crate::mime_detect::allowed_image_mime;
use crate::sanitize::sanitize_filename;

/// Filesystem-backed store for uploaded product photos.
///
/// Every upload gets a fresh key, so concurrent requests never contend on a
/// path; files are only ever removed by external retention policy.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    max_bytes: usize,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Validate and persist an upload, returning its storage reference.
    ///
    /// Nothing is written unless every check passes. I/O failures are logged
    /// here with the real cause; callers surface only a generic message.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredUpload, AppError> {
        if original_name.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        let Some(mime_type) = allowed_image_mime(original_name) else {
            return Err(AppError::Validation(
                "Invalid file type. Allowed: PNG, JPG, JPEG, GIF, WEBP".to_string(),
            ));
        };
        if bytes.len() > self.max_bytes {
            return Err(AppError::PayloadTooLarge);
        }

        let sanitized = sanitize_filename(original_name);
        if sanitized.is_empty() {
            return Err(AppError::Validation("Invalid filename".to_string()));
        }

        let storage_key = derive_storage_key(&sanitized);
        let path = self.root.join(&storage_key);

        if let Err(e) = fs::write(&path, bytes).await {
            error!(path = %path.display(), error = %e, "Failed to persist upload");
            return Err(AppError::Storage("Failed to store upload".to_string()));
        }

        let content_hash = content_digest(bytes);
        info!(
            storage_key = %storage_key,
            size_bytes = bytes.len(),
            "Stored upload"
        );

        Ok(StoredUpload {
            storage_key,
            content_hash,
            size_bytes: bytes.len() as u64,
            mime_type: mime_type.to_string(),
        })
    }

    /// Resolve a storage key to its on-disk path, rejecting traversal.
    pub fn path_for(&self, storage_key: &str) -> Result<PathBuf, AppError> {
        if storage_key.is_empty()
            || storage_key.contains("..")
            || storage_key.contains('/')
            || storage_key.contains('\\')
        {
            return Err(AppError::Validation("Invalid storage key".to_string()));
        }
        Ok(self.root.join(storage_key))
    }

    /// Read a stored upload's bytes.
    pub async fn read(&self, storage_key: &str) -> Result<Vec<u8>, AppError> {
        let path = self.path_for(storage_key)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(format!("upload {storage_key}")))
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read upload");
                Err(AppError::Storage("Failed to read upload".to_string()))
            }
        }
    }

    pub async fn exists(&self, storage_key: &str) -> bool {
        match self.path_for(storage_key) {
            Ok(path) => fs::try_exists(&path).await.unwrap_or(false),
            Err(_) => false,
        }
    }
}

/// Storage key: timestamp prefix, a short uniquifier, then the sanitized
/// name. The uniquifier keeps rapid repeated uploads of the same file from
/// colliding within one second.
fn derive_storage_key(sanitized_name: &str) -> String {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    format!("{stamp}_{}_{sanitized_name}", &nonce[..8])
}

/// MD5 hex digest of the upload bytes. Integrity/dedup signaling only, not
/// an authentication mechanism.
fn content_digest(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}
