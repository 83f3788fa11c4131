//! Upload Domain Model
//!
//! Accepted upload kinds and the metadata of stored files.

/// Upload category, deciding which content types and size limits apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    File,
}

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("application/pdf", "pdf"),
    ("text/csv", "csv"),
    ("text/plain", "txt"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
    ),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xlsx",
    ),
];

impl UploadKind {
    /// Canonical file extension for an accepted content type
    #[must_use]
    pub fn extension_for(self, content_type: &str) -> Option<&'static str> {
        let content_type = content_type.split(';').next().unwrap_or_default().trim();
        let lookup = |table: &[(&str, &'static str)]| {
            table
                .iter()
                .find(|(ct, _)| ct.eq_ignore_ascii_case(content_type))
                .map(|(_, ext)| *ext)
        };
        match self {
            Self::Image => lookup(IMAGE_TYPES),
            Self::File => lookup(IMAGE_TYPES).or_else(|| lookup(DOCUMENT_TYPES)),
        }
    }
}

/// A file stored by the file storage gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub file_name: String,
    pub original_name: String,
    pub content_type: String,
    pub size: u64,
    pub url: String,
}

/// Reduce a client-supplied file name to a safe display name
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' '))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
