//! Remote API clients
//!
//! One trait per backend concern so the controller can be driven by the real
//! HTTP clients or by in-process fakes:
//!
//! - [`GroupApi`] - `/api/v1/groups/{id}` and its join/leave sub-resources
//! - [`GeocodingApi`] - `/api/v1/proxy/kakao/address`
//! - [`PostApi`] - `/api/v1/post` board listing
//!
//! Reads take an optional token; mutations require one.

pub mod http;
pub mod groups;
pub mod geocoding;
pub mod posts;

use async_trait::async_trait;
use std::sync::Arc;

use crate::egui_app::config::Config;
use crate::shared::{
    Address, ClientError, Coordinates, GroupDetail, GroupId, GroupUpdate, JoinApplication, JoinRequest,
    PostPage, PostQuery,
};

pub use geocoding::GeocodingClient;
pub use groups::GroupApiClient;
pub use http::HttpClient;
pub use posts::PostApiClient;

#[async_trait]
pub trait GroupApi: Send + Sync {
    async fn fetch_group(&self, id: &GroupId, token: Option<&str>) -> Result<GroupDetail, ClientError>;

    async fn update_group(&self, id: &GroupId, update: &GroupUpdate, token: &str) -> Result<(), ClientError>;

    async fn join_group(&self, id: &GroupId, join: &JoinRequest, token: &str)
        -> Result<JoinApplication, ClientError>;

    async fn delete_group(&self, id: &GroupId, token: &str) -> Result<(), ClientError>;

    async fn leave_group(&self, id: &GroupId, token: &str) -> Result<(), ClientError>;
}

#[async_trait]
pub trait GeocodingApi: Send + Sync {
    /// First match for `address`; `Ok(None)` when the proxy found nothing
    async fn geocode(&self, address: &Address, token: Option<&str>) -> Result<Option<Coordinates>, ClientError>;
}

#[async_trait]
pub trait PostApi: Send + Sync {
    async fn list_posts(&self, id: &GroupId, query: &PostQuery, token: Option<&str>) -> Result<PostPage, ClientError>;
}

/// The three remote collaborators of the detail page
#[derive(Clone)]
pub struct Services {
    pub groups: Arc<dyn GroupApi>,
    pub geocoding: Arc<dyn GeocodingApi>,
    pub posts: Arc<dyn PostApi>,
}

impl Services {
    /// HTTP-backed services sharing one connection pool
    pub fn http(config: Config) -> Result<Self, ClientError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            groups: Arc::new(GroupApiClient::new(http.clone())),
            geocoding: Arc::new(GeocodingClient::new(http.clone())),
            posts: Arc::new(PostApiClient::new(http)),
        })
    }
}
