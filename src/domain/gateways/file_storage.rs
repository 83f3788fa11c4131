//! File Storage Gateway

use async_trait::async_trait;

use crate::domain::models::upload::StoredFile;
use crate::shared::errors::GatewayError;

/// A validated upload ready to be persisted
#[derive(Debug, Clone)]
pub struct NewFile<'a> {
    pub original_name: &'a str,
    pub content_type: &'a str,
    pub extension: &'a str,
    pub bytes: &'a [u8],
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn store(&self, file: NewFile<'_>) -> Result<StoredFile, GatewayError>;
}
