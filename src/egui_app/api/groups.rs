//! Group API Client
//!
//! Read, edit, delete, join and leave a group by identifier.

use async_trait::async_trait;
use reqwest::Method;

use super::http::HttpClient;
use super::GroupApi;
use crate::shared::{ClientError, GroupDetail, GroupId, GroupUpdate, JoinApplication, JoinRequest};

/// Group API client
#[derive(Debug, Clone)]
pub struct GroupApiClient {
    http: HttpClient,
}

impl GroupApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn group_path(id: &GroupId) -> String {
        format!("/api/v1/groups/{}", id)
    }
}

#[async_trait]
impl GroupApi for GroupApiClient {
    async fn fetch_group(&self, id: &GroupId, token: Option<&str>) -> Result<GroupDetail, ClientError> {
        let request = self.http.request(Method::GET, &Self::group_path(id), token);
        self.http.send_envelope(request).await
    }

    async fn update_group(&self, id: &GroupId, update: &GroupUpdate, token: &str) -> Result<(), ClientError> {
        let request = self
            .http
            .request(Method::PATCH, &Self::group_path(id), Some(token))
            .json(update);
        self.http.send_empty(request).await
    }

    async fn join_group(
        &self,
        id: &GroupId,
        join: &JoinRequest,
        token: &str,
    ) -> Result<JoinApplication, ClientError> {
        let request = self
            .http
            .request(Method::POST, &Self::group_path(id), Some(token))
            .json(join);
        self.http.send_envelope(request).await
    }

    async fn delete_group(&self, id: &GroupId, token: &str) -> Result<(), ClientError> {
        let request = self.http.request(Method::DELETE, &Self::group_path(id), Some(token));
        self.http.send_empty(request).await
    }

    async fn leave_group(&self, id: &GroupId, token: &str) -> Result<(), ClientError> {
        let path = format!("{}/leave", Self::group_path(id));
        let request = self.http.request(Method::DELETE, &path, Some(token));
        self.http.send_empty(request).await
    }
}
