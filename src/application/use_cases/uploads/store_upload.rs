//! Store Upload Use Case

use std::sync::Arc;

use crate::domain::gateways::{FileStorage, NewFile};
use crate::domain::models::upload::sanitize_file_name;
use crate::domain::models::{StoredFile, UploadKind};
use crate::shared::errors::UseCaseError;

/// Maximum accepted sizes in bytes
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_image_bytes: usize,
    pub max_file_bytes: usize,
}

impl UploadLimits {
    #[must_use]
    pub fn for_kind(&self, kind: UploadKind) -> usize {
        match kind {
            UploadKind::Image => self.max_image_bytes,
            UploadKind::File => self.max_file_bytes,
        }
    }
}

pub struct StoreUploadUseCase {
    storage: Arc<dyn FileStorage>,
    limits: UploadLimits,
}

impl StoreUploadUseCase {
    #[must_use]
    pub fn new(storage: Arc<dyn FileStorage>, limits: UploadLimits) -> Self {
        Self { storage, limits }
    }

    #[must_use]
    pub fn limits(&self) -> UploadLimits {
        self.limits
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for empty files or disallowed content types.
    /// Returns `UseCaseError::PayloadTooLarge` if the file exceeds the limit for its kind.
    /// Returns `UseCaseError::Gateway` if the file can't be written.
    pub async fn execute(
        &self,
        user_id: &str,
        kind: UploadKind,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, UseCaseError> {
        tracing::info!(user_id, ?kind, content_type, size = bytes.len(), "Storing upload");

        if bytes.is_empty() {
            return Err(UseCaseError::validation("file: must not be empty"));
        }
        let limit = self.limits.for_kind(kind);
        if bytes.len() > limit {
            tracing::warn!(size = bytes.len(), limit, "Upload exceeds size limit");
            return Err(UseCaseError::PayloadTooLarge(format!("file exceeds the {limit} byte limit")));
        }
        let extension = kind.extension_for(content_type).ok_or_else(|| {
            tracing::warn!(content_type, "Rejected upload content type");
            UseCaseError::validation(format!("file: content type '{content_type}' is not allowed"))
        })?;

        let original_name = sanitize_file_name(original_name);
        let stored = self
            .storage
            .store(NewFile {
                original_name: &original_name,
                content_type,
                extension,
                bytes,
            })
            .await?;

        tracing::info!(file_name = %stored.file_name, "Upload stored");
        Ok(stored)
    }
}
