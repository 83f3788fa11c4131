//! Campaign Block Domain Model
//!
//! A reusable content or question unit that users compose into campaign templates.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::ids::BlockId;
use super::video::VideoEmbed;
use crate::shared::errors::DomainError;

/// Kind of content a block carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Text,
    Image,
    Video,
    Question,
    Button,
}

impl BlockType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Question => "question",
            Self::Button => "button",
        }
    }

    /// Content keys that must be present as non-empty strings
    fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::Text => &["text"],
            Self::Image | Self::Video => &["url"],
            Self::Question => &["question"],
            Self::Button => &["label", "url"],
        }
    }
}

impl FromStr for BlockType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "question" => Ok(Self::Question),
            "button" => Ok(Self::Button),
            other => Err(DomainError::invalid("blockType", format!("unknown block type '{other}'"))),
        }
    }
}

/// Validate block content against its type
///
/// # Errors
///
/// Returns `DomainError::InvalidField` when the content is not an object, a
/// required key is missing or empty, or a video URL is not from a supported host.
pub fn validate_content(block_type: BlockType, content: &Value) -> Result<(), DomainError> {
    let object = content
        .as_object()
        .ok_or_else(|| DomainError::invalid("content", "must be a JSON object"))?;

    for key in block_type.required_keys() {
        let present = object
            .get(*key)
            .and_then(Value::as_str)
            .is_some_and(|v| !v.trim().is_empty());
        if !present {
            return Err(DomainError::invalid(
                format!("content.{key}"),
                format!("is required for {} blocks", block_type.as_str()),
            ));
        }
    }

    if block_type == BlockType::Video {
        let url = object.get("url").and_then(Value::as_str).unwrap_or_default();
        if VideoEmbed::parse(url).is_none() {
            return Err(DomainError::invalid("content.url", "is not a supported video URL"));
        }
    }

    Ok(())
}

/// Data required to create a new block
#[derive(Debug, Clone)]
pub struct CreateBlockData {
    pub name: String,
    pub block_type: BlockType,
    pub content: Value,
    pub position: i32,
}

/// Partial update data for a block
#[derive(Debug, Clone, Default)]
pub struct UpdateBlockData {
    pub name: Option<String>,
    pub block_type: Option<BlockType>,
    pub content: Option<Value>,
    pub position: Option<i32>,
}

/// Campaign block entity
#[derive(Debug, Clone)]
pub struct CampaignBlock {
    id: BlockId,
    user_id: String,
    name: String,
    block_type: BlockType,
    content: Value,
    position: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CampaignBlock {
    /// Create a new block owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the content does not match the block type.
    pub fn new(user_id: &str, data: CreateBlockData) -> Result<Self, DomainError> {
        validate_content(data.block_type, &data.content)?;
        let now = Utc::now();
        Ok(Self {
            id: BlockId::new(),
            user_id: user_id.to_string(),
            name: data.name,
            block_type: data.block_type,
            content: data.content,
            position: data.position,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a block from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: BlockId,
        user_id: String,
        name: String,
        block_type: BlockType,
        content: Value,
        position: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            block_type,
            content,
            position,
            created_at,
            updated_at,
        }
    }

    /// Apply a partial update. Type and content are revalidated together.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the resulting content does not match the resulting type.
    pub fn with_updates(self, data: UpdateBlockData) -> Result<Self, DomainError> {
        let block_type = data.block_type.unwrap_or(self.block_type);
        let content = data.content.unwrap_or(self.content);
        validate_content(block_type, &content)?;

        Ok(Self {
            name: data.name.unwrap_or(self.name),
            position: data.position.unwrap_or(self.position),
            block_type,
            content,
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Embed info for video blocks
    #[must_use]
    pub fn video_embed(&self) -> Option<VideoEmbed> {
        if self.block_type != BlockType::Video {
            return None;
        }
        self.content.get("url").and_then(Value::as_str).and_then(VideoEmbed::parse)
    }

    #[must_use]
    pub fn id(&self) -> &BlockId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    #[must_use]
    pub fn content(&self) -> &Value {
        &self.content
    }

    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video_block() -> CampaignBlock {
        CampaignBlock::new(
            "user-1",
            CreateBlockData {
                name: "Intro video".to_string(),
                block_type: BlockType::Video,
                content: json!({ "url": "https://youtu.be/dQw4w9WgXcQ" }),
                position: 0,
            },
        )
        .unwrap()
    }

    #[test]
    fn block_type_round_trips_through_str() {
        for kind in ["text", "image", "video", "question", "button"] {
            assert_eq!(kind.parse::<BlockType>().unwrap().as_str(), kind);
        }
        assert!("carousel".parse::<BlockType>().is_err());
    }

    #[test]
    fn content_must_be_object() {
        assert!(validate_content(BlockType::Text, &json!("hello")).is_err());
    }

    #[test]
    fn missing_required_key_is_reported() {
        let err = validate_content(BlockType::Button, &json!({ "label": "Apply" })).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid("content.url", "is required for button blocks")
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        assert!(validate_content(BlockType::Text, &json!({ "text": "   " })).is_err());
    }

    #[test]
    fn video_url_must_be_supported() {
        assert!(validate_content(BlockType::Video, &json!({ "url": "https://example.com/a.mp4" })).is_err());
        assert!(validate_content(BlockType::Video, &json!({ "url": "https://vimeo.com/123" })).is_ok());
    }

    #[test]
    fn video_block_exposes_embed() {
        let block = video_block();
        let embed = block.video_embed().unwrap();
        assert_eq!(embed.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn changing_type_revalidates_existing_content() {
        let block = video_block();
        let result = block.with_updates(UpdateBlockData {
            block_type: Some(BlockType::Question),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn update_keeps_untouched_fields() {
        let block = video_block();
        let id = *block.id();
        let updated = block
            .with_updates(UpdateBlockData {
                name: Some("Renamed".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.id(), &id);
        assert_eq!(updated.name(), "Renamed");
        assert_eq!(updated.block_type(), BlockType::Video);
    }
}
