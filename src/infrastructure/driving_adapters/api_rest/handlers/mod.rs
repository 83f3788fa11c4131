//! HTTP Handlers
//!
//! One module per resource, each exposing its routes through `router()`
//! (and `public_router()` for the unauthenticated ones).

pub mod campaign_blocks;
pub mod connections;
pub mod email_templates;
pub mod emails;
pub mod health;
pub mod influencer_fields;
pub mod influencers;
pub mod instagram;
pub mod survey_templates;
pub mod surveys;
pub mod uploads;
