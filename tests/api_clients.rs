//! HTTP client tests against a wiremock backend

mod common;

use std::time::Duration;

use moim::egui_app::api::{GeocodingApi, GeocodingClient, GroupApi, GroupApiClient, PostApi, PostApiClient};
use moim::shared::{
    Address, ClientError, Coordinates, GroupId, GroupUpdate, JoinRequest, PostQuery, RecruitStatus,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::*;

fn id(raw: &str) -> GroupId {
    GroupId::parse(raw).unwrap()
}

#[tokio::test]
async fn test_fetch_group_decodes_envelope() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/42"))
        .and(header("authorization", "Bearer jwt"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(GroupJson::gangnam(42).admin().to_json())))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = GroupApiClient::new(backend.http());
    let group = assert_ok!(client.fetch_group(&id("42"), Some("jwt")).await);

    assert_eq!(group.id, 42);
    assert_eq!(group.address(), Address::new("서울", "강남구", "역삼동"));
    assert_eq!(group.recruit_status, RecruitStatus::Recruiting);
    assert_eq!(group.member_label(), "7/20");
    assert!(group.is_member);
    assert!(group.is_admin);
}

#[tokio::test]
async fn test_read_without_token_sends_no_authorization() {
    let backend = TestBackend::start().await;
    backend
        .mount_enveloped("/api/v1/groups/42", GroupJson::gangnam(42).to_json())
        .await;

    let client = GroupApiClient::new(backend.http());
    assert_ok!(client.fetch_group(&id("42"), None).await);

    let requests = backend.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_header!(requests[0], "accept", "application/json");
}

#[tokio::test]
async fn test_unsuccessful_envelope() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure_envelope("존재하지 않는 모임입니다.")))
        .mount(&backend.server)
        .await;

    let client = GroupApiClient::new(backend.http());
    assert_err!(
        client.fetch_group(&id("7"), Some("jwt")).await,
        ClientError::Unsuccessful { message: Some(_) }
    );
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/2"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/3"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&backend.server)
        .await;

    let client = GroupApiClient::new(backend.http());
    assert_eq!(client.fetch_group(&id("1"), None).await, Err(ClientError::NotFound));
    assert_eq!(
        client.fetch_group(&id("2"), None).await,
        Err(ClientError::Unauthorized { status: 401 })
    );
    assert_eq!(
        client.fetch_group(&id("3"), None).await,
        Err(ClientError::Status {
            status: 503,
            message: "maintenance".to_string()
        })
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&backend.server)
        .await;

    let client = GroupApiClient::new(backend.http());
    assert_err!(client.fetch_group(&id("1"), None).await, ClientError::Decode { .. });
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let backend = TestBackend::with_timeout(Duration::from_millis(200)).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(GroupJson::gangnam(1).to_json()))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&backend.server)
        .await;

    let client = GroupApiClient::new(backend.http());
    assert_eq!(client.fetch_group(&id("1"), None).await, Err(ClientError::Timeout));
}

#[tokio::test]
async fn test_update_sends_partial_body() {
    let backend = TestBackend::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/groups/42"))
        .and(header("authorization", "Bearer jwt"))
        .and(body_json(json!({ "name": "새 이름", "maxRecruitCount": 30 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let update = GroupUpdate {
        name: Some("새 이름".to_string()),
        max_recruit_count: Some(30),
        ..GroupUpdate::default()
    };
    let client = GroupApiClient::new(backend.http());
    assert_ok!(client.update_group(&id("42"), &update, "jwt").await);
}

#[tokio::test]
async fn test_join_posts_context() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/groups/42"))
        .and(body_json(json!({ "context": "같이 뛰고 싶어요" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 5,
            "groupId": 42,
            "context": "같이 뛰고 싶어요",
        }))))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = GroupApiClient::new(backend.http());
    let join = JoinRequest {
        context: "같이 뛰고 싶어요".to_string(),
    };
    let application = assert_ok!(client.join_group(&id("42"), &join, "jwt").await);
    assert_eq!(application.id, Some(5));
    assert_eq!(application.group_id, Some(42));
}

#[tokio::test]
async fn test_delete_and_leave_paths() {
    let backend = TestBackend::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/groups/42"))
        .and(header("authorization", "Bearer jwt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/groups/42/leave"))
        .and(header("authorization", "Bearer jwt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = GroupApiClient::new(backend.http());
    assert_ok!(client.delete_group(&id("42"), "jwt").await);
    assert_err!(
        client.leave_group(&id("42"), "jwt").await,
        ClientError::Status { status: 500, .. }
    );
}

#[tokio::test]
async fn test_geocode_swaps_axes() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/proxy/kakao/address"))
        .and(query_param("province", "서울"))
        .and(query_param("city", "강남구"))
        .and(query_param("town", "역삼동"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(geocode_json("127.05", "37.50"))))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = GeocodingClient::new(backend.http());
    let coordinates = assert_ok!(
        client
            .geocode(&Address::new("서울", "강남구", "역삼동"), Some("jwt"))
            .await
    );
    assert_eq!(coordinates, Some(Coordinates::new("37.50", "127.05")));
}

#[tokio::test]
async fn test_geocode_without_documents() {
    let backend = TestBackend::start().await;
    backend
        .mount_enveloped("/api/v1/proxy/kakao/address", empty_geocode_json())
        .await;

    let client = GeocodingClient::new(backend.http());
    let coordinates = assert_ok!(client.geocode(&Address::new("어딘가", "없는", "동네"), None).await);
    assert_eq!(coordinates, None);
}

#[tokio::test]
async fn test_list_posts_query() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/post"))
        .and(query_param("groupId", "42"))
        .and(query_param("search", ""))
        .and(query_param("postStatus", "ALL"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(posts_json(5))))
        .expect(1)
        .mount(&backend.server)
        .await;

    let client = PostApiClient::new(backend.http());
    let page = assert_ok!(client.list_posts(&id("42"), &PostQuery::first_page(), Some("jwt")).await);
    assert_eq!(page.content.len(), 5);
    assert_eq!(page.content[0].id, 1);
    assert_eq!(page.content[0].author, "러너");
    assert_eq!(page.total_elements, 5);
}
