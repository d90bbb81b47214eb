//! Group Types
//!
//! Wire types for the group detail page: the detail snapshot itself, its
//! address triple, and the request bodies for editing and joining.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque group identifier as it arrives from the routing layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Wrap a raw identifier; returns `None` for an empty or blank string
    pub fn parse(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for GroupId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Recruitment status of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitStatus {
    Recruiting,
    Closed,
}

impl RecruitStatus {
    /// Label shown on the detail page
    pub fn label(&self) -> &'static str {
        match self {
            RecruitStatus::Recruiting => "모집중",
            RecruitStatus::Closed => "모집완료",
        }
    }
}

/// Province / city / town triple used for geocoding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub province: String,
    pub city: String,
    pub town: String,
}

impl Address {
    pub fn new(province: impl Into<String>, city: impl Into<String>, town: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            city: city.into(),
            town: town.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.province, self.city, self.town)
    }
}

/// Snapshot of a group as returned by `GET /api/v1/groups/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    pub id: i64,
    pub category_name: String,
    pub name: String,
    pub province: String,
    pub city: String,
    pub town: String,
    pub description: String,
    pub recruit_status: RecruitStatus,
    pub max_recruit_count: u32,
    pub current_member_count: u32,
    pub created_at: NaiveDateTime,
    pub is_member: bool,
    pub is_admin: bool,
}

impl GroupDetail {
    /// The address triple this group is located at
    pub fn address(&self) -> Address {
        Address::new(&self.province, &self.city, &self.town)
    }

    /// Actions the viewer may take, derived from the viewer-relative flags
    pub fn permitted_actions(&self) -> Vec<GroupAction> {
        let mut actions = Vec::new();
        if self.is_member {
            actions.push(GroupAction::Leave);
        } else {
            actions.push(GroupAction::Join);
        }
        if self.is_admin {
            actions.push(GroupAction::Edit);
            actions.push(GroupAction::Delete);
        }
        actions
    }

    pub fn permits(&self, action: GroupAction) -> bool {
        match action {
            GroupAction::Join => !self.is_member,
            GroupAction::Leave => self.is_member,
            GroupAction::Edit | GroupAction::Delete => self.is_admin,
        }
    }

    /// `current/max` member label
    pub fn member_label(&self) -> String {
        format!("{}/{}", self.current_member_count, self.max_recruit_count)
    }
}

/// User actions offered on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupAction {
    Join,
    Leave,
    Edit,
    Delete,
}

impl GroupAction {
    pub fn label(&self) -> &'static str {
        match self {
            GroupAction::Join => "모임 가입",
            GroupAction::Leave => "모임 탈퇴",
            GroupAction::Edit => "모임 수정",
            GroupAction::Delete => "모임 삭제",
        }
    }
}

/// Partial update sent with `PATCH /api/v1/groups/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruit_status: Option<RecruitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_recruit_count: Option<u32>,
}

impl GroupUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Join application body for `POST /api/v1/groups/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub context: String,
}

/// Join application as acknowledged by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinApplication {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub context: Option<String>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Detail for the address used throughout the tests
    pub fn group(id: i64, province: &str, city: &str, town: &str) -> GroupDetail {
        GroupDetail {
            id,
            category_name: "운동".to_string(),
            name: format!("모임 {}", id),
            province: province.to_string(),
            city: city.to_string(),
            town: town.to_string(),
            description: "주말 러닝 모임".to_string(),
            recruit_status: RecruitStatus::Recruiting,
            max_recruit_count: 10,
            current_member_count: 4,
            created_at: NaiveDateTime::parse_from_str("2025-01-15T09:30:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            is_member: true,
            is_admin: false,
        }
    }
}
