//! Board post types used by the detail page preview.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lightweight projection of a board post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    #[serde(rename = "postId", alias = "id")]
    pub id: i64,
    pub title: String,
    /// Author display name
    #[serde(rename = "nickName", alias = "author")]
    pub author: String,
    pub created_at: NaiveDateTime,
}

/// One page of the board listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    #[serde(default)]
    pub content: Vec<PostSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
}

impl PostPage {
    /// First `len` posts, in backend order
    pub fn preview(self, len: usize) -> Vec<PostSummary> {
        let mut content = self.content;
        content.truncate(len);
        content
    }
}

/// `postStatus` filter of the listing endpoint; the preview reads every status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatusFilter {
    #[default]
    All,
}

impl PostStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatusFilter::All => "ALL",
        }
    }
}

/// Query for one page of posts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub search: String,
    pub status: PostStatusFilter,
    pub page: u32,
}

impl PostQuery {
    /// The query the detail page preview uses: everything, page 0
    pub fn first_page() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_json(count: usize) -> String {
        let posts: Vec<String> = (1..=count)
            .map(|i| {
                format!(
                    r#"{{"postId":{i},"title":"글 {i}","nickName":"작성자{i}","createdAt":"2025-03-0{}T12:00:00"}}"#,
                    (i % 9) + 1
                )
            })
            .collect();
        format!(r#"{{"content":[{}],"totalPages":2,"totalElements":{},"number":0}}"#, posts.join(","), count)
    }

    #[test]
    fn test_preview_keeps_first_entries_in_order() {
        let page: PostPage = serde_json::from_str(&page_json(5)).unwrap();
        let preview = page.preview(3);
        let ids: Vec<i64> = preview.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(preview[0].author, "작성자1");
    }

    #[test]
    fn test_preview_shorter_than_limit() {
        let page: PostPage = serde_json::from_str(&page_json(2)).unwrap();
        assert_eq!(page.preview(3).len(), 2);
    }

    #[test]
    fn test_accepts_alternate_field_names() {
        let post: PostSummary = serde_json::from_str(
            r#"{"id":9,"title":"t","author":"a","createdAt":"2025-03-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(post.id, 9);
        assert_eq!(post.author, "a");
    }

    #[test]
    fn test_first_page_query() {
        let query = PostQuery::first_page();
        assert_eq!(query.page, 0);
        assert_eq!(query.status.as_str(), "ALL");
        assert!(query.search.is_empty());
    }
}
