//! JSON bodies in the backend's wire format

use serde_json::{json, Value};

/// Wrap `data` in a successful response envelope
pub fn envelope(data: Value) -> Value {
    json!({
        "isSuccess": true,
        "code": "COMMON200",
        "message": "성공입니다.",
        "data": data,
    })
}

/// Envelope reporting `isSuccess: false`
pub fn failure_envelope(message: &str) -> Value {
    json!({
        "isSuccess": false,
        "code": "GROUP4001",
        "message": message,
        "data": null,
    })
}

/// Viewer-relative group detail
pub struct GroupJson {
    pub id: i64,
    pub province: &'static str,
    pub city: &'static str,
    pub town: &'static str,
    pub is_member: bool,
    pub is_admin: bool,
}

impl GroupJson {
    /// Member, not admin, in 서울/강남구/역삼동
    pub fn gangnam(id: i64) -> Self {
        Self {
            id,
            province: "서울",
            city: "강남구",
            town: "역삼동",
            is_member: true,
            is_admin: false,
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "categoryName": "운동",
            "name": "강남 러닝 크루",
            "province": self.province,
            "city": self.city,
            "town": self.town,
            "description": "매주 토요일 아침 러닝",
            "recruitStatus": "RECRUITING",
            "maxRecruitCount": 20,
            "currentMemberCount": 7,
            "createdAt": "2025-03-01T08:00:00",
            "isMember": self.is_member,
            "isAdmin": self.is_admin,
        })
    }
}

/// Geocoding payload with one document
pub fn geocode_json(x: &str, y: &str) -> Value {
    json!({
        "documents": [
            { "x": x, "y": y, "address_name": "서울 강남구 역삼동" },
        ],
    })
}

/// Geocoding payload with no match
pub fn empty_geocode_json() -> Value {
    json!({ "documents": [] })
}

/// One board page holding `count` posts with ids `1..=count`
pub fn posts_json(count: i64) -> Value {
    let content: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "postId": id,
                "title": format!("게시글 {}", id),
                "nickName": "러너",
                "createdAt": "2025-03-02T09:00:00",
            })
        })
        .collect();
    json!({
        "content": content,
        "totalPages": 1,
        "totalElements": count,
        "number": 0,
    })
}
