//! Board listing client.

use async_trait::async_trait;
use reqwest::Method;

use super::http::HttpClient;
use super::PostApi;
use crate::shared::{ClientError, GroupId, PostPage, PostQuery};

const POST_LIST_PATH: &str = "/api/v1/post";

#[derive(Debug, Clone)]
pub struct PostApiClient {
    http: HttpClient,
}

impl PostApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PostApi for PostApiClient {
    async fn list_posts(&self, id: &GroupId, query: &PostQuery, token: Option<&str>) -> Result<PostPage, ClientError> {
        let page = query.page.to_string();
        let request = self.http.request(Method::GET, POST_LIST_PATH, token).query(&[
            ("groupId", id.as_str()),
            ("search", query.search.as_str()),
            ("postStatus", query.status.as_str()),
            ("page", page.as_str()),
        ]);
        self.http.send_envelope(request).await
    }
}
