//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories
//! - Meta Graph API and email provider clients
//! - Local upload storage and in-process send progress
//! - Configuration

pub mod config;
pub mod database;
pub mod http;
pub mod postgres;
pub mod storage;

pub use config::AppConfig;
pub use http::{HttpEmailSender, MetaGraphClient};
pub use storage::{DashMapProgressStore, LocalFileStorage};
