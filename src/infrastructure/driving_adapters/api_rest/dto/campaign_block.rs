//! Campaign Block DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::validate_not_blank;
use crate::domain::models::{BlockType, CampaignBlock, CreateBlockData, UpdateBlockData, VideoEmbed};
use crate::shared::errors::DomainError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    pub block_type: String,

    pub content: Value,

    #[serde(default)]
    #[validate(range(min = 0, message = "position must be at least 0"))]
    pub position: i32,
}

impl TryFrom<CreateBlockDto> for CreateBlockData {
    type Error = DomainError;

    fn try_from(dto: CreateBlockDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.trim().to_string(),
            block_type: dto.block_type.parse()?,
            content: dto.content,
            position: dto.position,
        })
    }
}

/// Partial update. Changing the type usually needs new content too.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchBlockDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    pub block_type: Option<String>,

    pub content: Option<Value>,

    #[validate(range(min = 0, message = "position must be at least 0"))]
    pub position: Option<i32>,
}

impl TryFrom<PatchBlockDto> for UpdateBlockData {
    type Error = DomainError;

    fn try_from(dto: PatchBlockDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            block_type: dto.block_type.as_deref().map(str::parse::<BlockType>).transpose()?,
            content: dto.content,
            position: dto.position,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResponseDto {
    pub id: String,
    pub name: String,
    pub block_type: &'static str,
    pub content: Value,
    pub position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<VideoEmbed>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CampaignBlock> for BlockResponseDto {
    fn from(block: CampaignBlock) -> Self {
        Self {
            id: block.id().to_string(),
            embed: block.video_embed(),
            name: block.name().to_string(),
            block_type: block.block_type().as_str(),
            content: block.content().clone(),
            position: block.position(),
            created_at: block.created_at(),
            updated_at: block.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ParseVideoDto {
    #[validate(length(min = 1, max = 2048, message = "url must be between 1 and 2048 characters"))]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_dto_parses_block_type() {
        let dto: CreateBlockDto = serde_json::from_value(json!({
            "name": " Intro ",
            "blockType": "text",
            "content": { "text": "Hello" }
        }))
        .unwrap();
        assert!(dto.validate().is_ok());

        let data = CreateBlockData::try_from(dto).unwrap();
        assert_eq!(data.name, "Intro");
        assert_eq!(data.block_type, BlockType::Text);
        assert_eq!(data.position, 0);
    }

    #[test]
    fn unknown_block_type_is_domain_error() {
        let dto = CreateBlockDto {
            name: "x".to_string(),
            block_type: "carousel".to_string(),
            content: json!({}),
            position: 0,
        };
        assert!(CreateBlockData::try_from(dto).is_err());
    }

    #[test]
    fn blank_name_and_negative_position_fail_validation() {
        let dto = PatchBlockDto {
            name: Some("   ".to_string()),
            position: Some(-1),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("position"));
    }

    #[test]
    fn video_blocks_carry_embed() {
        let block = CampaignBlock::new(
            "user-1",
            CreateBlockData {
                name: "Teaser".to_string(),
                block_type: BlockType::Video,
                content: json!({ "url": "https://youtu.be/dQw4w9WgXcQ" }),
                position: 1,
            },
        )
        .unwrap();

        let dto = BlockResponseDto::from(block);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["blockType"], "video");
        assert_eq!(json["embed"]["videoId"], "dQw4w9WgXcQ");
    }
}
