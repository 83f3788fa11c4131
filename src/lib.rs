//! Influencer Campaign API
//!
//! Backend for an influencer-marketing workspace: campaign content blocks,
//! email templates and bulk sending, surveys, influencer records and
//! Instagram account linking. Follows Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
