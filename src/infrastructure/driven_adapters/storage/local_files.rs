//! Upload storage on the local filesystem
//!
//! Files are written under a random name so client-supplied names never
//! reach the filesystem; the directory is served statically by the router.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::gateways::{FileStorage, NewFile};
use crate::domain::models::StoredFile;
use crate::shared::errors::GatewayError;

pub struct LocalFileStorage {
    directory: PathBuf,
    public_base_url: String,
}

impl LocalFileStorage {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            directory: directory.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, file: NewFile<'_>) -> Result<StoredFile, GatewayError> {
        tokio::fs::create_dir_all(&self.directory).await?;

        let file_name = format!("{}.{}", Uuid::new_v4(), file.extension);
        tokio::fs::write(self.directory.join(&file_name), file.bytes).await?;

        tracing::info!(file_name = %file_name, size = file.bytes.len(), "Stored upload");

        Ok(StoredFile {
            url: format!("{}/{file_name}", self.public_base_url),
            file_name,
            original_name: file.original_name.to_string(),
            content_type: file.content_type.to_string(),
            size: file.bytes.len() as u64,
        })
    }
}
