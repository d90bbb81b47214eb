//! Shared Module
//!
//! Types that mirror the groups backend's JSON: the response envelope, group
//! detail, geocoding documents and board posts, plus the client error and
//! configuration types every other module builds on.
//!
//! # Overview
//!
//! Nothing in here performs I/O. The remote clients in `egui_app::api`
//! decode into these types and the controller publishes them to the views.

/// Response envelope
pub mod envelope;

/// Group detail and request bodies
pub mod group;

/// Geocoding documents and coordinates
pub mod geo;

/// Board post summaries
pub mod post;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use envelope::ApiResponse;
pub use error::ClientError;
pub use group::{Address, GroupAction, GroupDetail, GroupId, GroupUpdate, JoinApplication, JoinRequest, RecruitStatus};
pub use geo::{Coordinates, GeocodeDocument, GeocodeResponse};
pub use post::{PostPage, PostQuery, PostStatusFilter, PostSummary};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
