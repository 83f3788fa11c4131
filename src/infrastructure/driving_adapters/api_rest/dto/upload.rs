//! Upload DTOs

use serde::Serialize;

use crate::domain::models::StoredFile;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponseDto {
    pub url: String,
    pub file_name: String,
    pub original_name: String,
    pub content_type: String,
    pub size: u64,
}

impl From<StoredFile> for UploadResponseDto {
    fn from(file: StoredFile) -> Self {
        Self {
            url: file.url,
            file_name: file.file_name,
            original_name: file.original_name,
            content_type: file.content_type,
            size: file.size,
        }
    }
}
