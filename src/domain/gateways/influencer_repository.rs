//! Influencer Repository Gateway

use async_trait::async_trait;

use crate::domain::models::ids::InfluencerId;
use crate::domain::models::influencer::{Influencer, Platform};
use crate::shared::errors::RepositoryError;

/// Filters for listing influencers
#[derive(Debug, Clone, Default)]
pub struct InfluencerFilter {
    /// Case-insensitive match on handle, full name or email
    pub search: Option<String>,
    pub platform: Option<Platform>,
}

/// Repository trait for influencer records.
/// Writes report a duplicate (platform, handle) as `RepositoryError::Duplicate`.
#[async_trait]
pub trait InfluencerRepository: Send + Sync {
    /// Influencers of a user ordered by handle
    async fn list(&self, user_id: &str, filter: &InfluencerFilter) -> Result<Vec<Influencer>, RepositoryError>;

    async fn find_by_id(&self, id: &InfluencerId, user_id: &str) -> Result<Option<Influencer>, RepositoryError>;

    /// Unscoped lookup used when resolving public survey links
    async fn find_public(&self, id: &InfluencerId) -> Result<Option<Influencer>, RepositoryError>;

    /// Case-insensitive lookup by email address
    async fn find_by_email(&self, user_id: &str, email: &str) -> Result<Option<Influencer>, RepositoryError>;

    async fn create(&self, influencer: &Influencer) -> Result<Influencer, RepositoryError>;

    async fn update(&self, influencer: &Influencer) -> Result<Option<Influencer>, RepositoryError>;

    async fn delete(&self, id: &InfluencerId, user_id: &str) -> Result<bool, RepositoryError>;
}
