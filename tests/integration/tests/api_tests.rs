//! API Integration Tests
//!
//! Each test spawns its own server on the in-memory store, so no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, assert_text, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["store"], "memory");
}

// ============================================================================
// Hotel Tests
// ============================================================================

#[tokio::test]
async fn test_hotel_crud() {
    let server = TestServer::start().await.unwrap();
    let hotel = HotelBody::unique();

    // Create
    let response = server.post("/hotel", &hotel).await.unwrap();
    let created: HotelBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created.id.expect("identifier assigned");
    assert_eq!(created.name, hotel.name);

    // Read back equals the created entity
    let response = server.get(&format!("/hotel/{id}")).await.unwrap();
    let found: HotelBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found, created);

    // Update
    let mut changed = created.clone();
    changed.price = 300;
    let response = server.put(&format!("/hotel/{id}"), &changed).await.unwrap();
    let updated: HotelBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.price, 300);
    assert_eq!(updated.id, Some(id));

    // Delete
    let response = server.delete(&format!("/hotel/{id}")).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/hotel/{id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_hotel_update_conflicting_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.post("/hotel", &HotelBody::unique()).await.unwrap();
    let created: HotelBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created.id.unwrap();

    let mut conflicting = created.clone();
    conflicting.id = Some(id + 1);
    let response = server.put(&format!("/hotel/{id}"), &conflicting).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_hotel_update_missing() {
    let server = TestServer::start().await.unwrap();
    let response = server.put("/hotel/99", &HotelBody::unique()).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_hotel_create_invalid() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/hotel", &HotelBody::new("", "Paris", "France", 100))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_hotel_search() {
    let server = TestServer::start().await.unwrap();
    for (name, city) in [
        ("Conrad Miami", "Miami"),
        ("W Atlanta", "Atlanta"),
        ("Marriott Courtyard", "Atlanta"),
    ] {
        let response = server
            .post("/hotel", &HotelBody::new(name, city, "USA", 100))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // Empty query returns everything, in id order
    let response = server.get("/hotel/search").await.unwrap();
    let page: PageBody<HotelBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.size, 5);
    assert_eq!(page.number, 0);
    let names: Vec<_> = page.content.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Conrad Miami", "W Atlanta", "Marriott Courtyard"]);

    // Field-qualified query
    let response = server.get("/hotel/search?q=city:atlanta").await.unwrap();
    let page: PageBody<HotelBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total_elements, 2);

    // Paging window
    let response = server.get("/hotel/search?page=1&size=2").await.unwrap();
    let page: PageBody<HotelBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].name, "Marriott Courtyard");
    assert_eq!(page.total_pages, 2);

    // Listing is the unfiltered search
    let response = server.get("/hotel?size=10").await.unwrap();
    let page: PageBody<HotelBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.content.len(), 3);
}

#[tokio::test]
async fn test_hotel_search_bad_query() {
    let server = TestServer::start().await.unwrap();
    for path in [
        "/hotel/search?q=price:100",
        "/hotel/search?q=%22unterminated",
        "/hotel/search?size=0",
        "/hotel/search?page=-1",
        "/hotel/search?size=ten",
        "/hotel/search?page=4294967295&size=4294967295",
    ] {
        let response = server.get(path).await.unwrap();
        let body = assert_text(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body, "Bad query.", "{path}");
    }
}

#[tokio::test]
async fn test_hotel_search_xml() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/hotel", &HotelBody::new("Ritz", "Paris", "France", 900))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_xml("/hotel/search?q=ritz").await.unwrap();
    assert_eq!(response.headers()["content-type"], "application/xml");
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(body.starts_with("<page>"), "{body}");
    assert!(body.contains("<name>Ritz</name>"), "{body}");
    assert!(body.contains("<total_elements>1</total_elements>"), "{body}");

    let response = server.get_xml("/hotel/1").await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(body.starts_with("<hotel>"), "{body}");
}

// ============================================================================
// Role Tests
// ============================================================================

#[tokio::test]
async fn test_role_crud() {
    let server = TestServer::start().await.unwrap();
    let role = RoleBody::unique();

    let response = server.post("/role", &role).await.unwrap();
    let created: RoleBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created.id.unwrap();

    let renamed = RoleBody {
        id: None,
        name: "renamed".to_string(),
    };
    let response = server.put(&format!("/role/{id}"), &renamed).await.unwrap();
    let updated: RoleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.id, Some(id));

    let response = server.delete(&format!("/role/{id}")).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete(&format!("/role/{id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_role_create_with_id_rejected() {
    let server = TestServer::start().await.unwrap();
    let role = RoleBody {
        id: Some(5),
        name: "admin".to_string(),
    };
    let response = server.post("/role", &role).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// OAuth2 Tests
// ============================================================================

#[tokio::test]
async fn test_token_and_details() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_form("/oauth/token", &TokenForm::password_grant("read write"))
        .await
        .unwrap();
    assert_eq!(response.headers()["cache-control"], "no-store");
    let token: TokenBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.scope, "read write");
    assert!(!token.access_token.is_empty());
    assert_ne!(token.access_token, token.refresh_token);

    // Lookup by query parameter
    let response = server
        .get(&format!("/oauth/tokenDetails?access_token={}", token.access_token))
        .await
        .unwrap();
    let details: TokenDetailsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(details.user_id, TEST_USER_ID);
    assert_eq!(details.scope, ["read", "write"]);
    assert_eq!(details.life_time, 3600);

    // Lookup by bearer header returns the same record
    let response = server
        .get_auth("/oauth/tokenDetails", &token.access_token)
        .await
        .unwrap();
    let by_header: TokenDetailsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(by_header.created_on, details.created_on);
    assert_eq!(by_header.expires_at, details.expires_at);
}

#[tokio::test]
async fn test_token_without_scope() {
    let server = TestServer::start().await.unwrap();
    let form = TokenForm {
        scope: None,
        ..TokenForm::password_grant("")
    };
    let response = server.post_form("/oauth/token", &form).await.unwrap();
    let token: TokenBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(token.scope, "");
}

#[tokio::test]
async fn test_token_invalid_credentials() {
    let server = TestServer::start().await.unwrap();
    let form = TokenForm {
        username: Some("UNKNOWN_USERNAME".to_string()),
        ..TokenForm::password_grant("read")
    };
    let response = server.post_form("/oauth/token", &form).await.unwrap();
    let body: ProtocolErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error, "invalid_client_credentials");

    let form = TokenForm {
        password: Some("wrong".to_string()),
        ..TokenForm::password_grant("read")
    };
    let response = server.post_form("/oauth/token", &form).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_invalid_scope() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post_form("/oauth/token", &TokenForm::password_grant("read admin"))
        .await
        .unwrap();
    let body: ProtocolErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "invalid_scope");
    assert!(body.error_description.unwrap().contains("admin"));
}

#[tokio::test]
async fn test_token_missing_username() {
    let server = TestServer::start().await.unwrap();
    let form = TokenForm {
        username: None,
        ..TokenForm::password_grant("read")
    };
    let response = server.post_form("/oauth/token", &form).await.unwrap();
    let body: ProtocolErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "invalid_request");
}

#[tokio::test]
async fn test_token_unsupported_grant() {
    let server = TestServer::start().await.unwrap();
    let form = TokenForm {
        grant_type: Some("client_credentials".to_string()),
        ..TokenForm::password_grant("read")
    };
    let response = server.post_form("/oauth/token", &form).await.unwrap();
    let body: ProtocolErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "unsupported_grant_type");
}

#[tokio::test]
async fn test_token_details_unknown() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get("/oauth/tokenDetails?access_token=unknown")
        .await
        .unwrap();
    let body: ProtocolErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "invalid_grant");
}

#[tokio::test]
async fn test_token_details_missing_token() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/oauth/tokenDetails").await.unwrap();
    let body: ProtocolErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "invalid_request");
}
