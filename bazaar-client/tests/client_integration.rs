// bazaar-client/tests/client_integration.rs
// Integration tests against in-process axum stub servers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use serde_json::{Value, json};
use tempfile::TempDir;

use bazaar_client::{ApiResponse, ClientConfig, ClientError, LoginOutcome, SessionEvent};
use shared::models::{BannerCreate, SavedProductQuery};

/// Bind a stub router on an ephemeral port; returns the `/api` base URL.
async fn spawn_server(router: Router) -> String {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_unauthorized_clears_token_and_signals_once() {
    let router = Router::new().route(
        "/api/categories",
        get(|| async { StatusCode::UNAUTHORIZED }),
    );
    let base = spawn_server(router).await;

    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("token.json");
    let client = ClientConfig::new(&base)
        .with_token_path(&token_path)
        .build()
        .unwrap();
    client.set_token("stale-token").unwrap();
    assert!(token_path.exists());

    let mut first = client.subscribe_session();
    let mut second = client.subscribe_session();

    let result = client.categories().await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));

    // token gone from memory and durable storage
    assert!(client.token().is_none());
    assert!(!token_path.exists());

    // exactly one signal per subscriber
    assert_eq!(first.try_recv().unwrap(), SessionEvent::Expired);
    assert!(first.try_recv().is_err());
    assert_eq!(second.try_recv().unwrap(), SessionEvent::Expired);
    assert!(second.try_recv().is_err());
}

#[tokio::test]
async fn test_forced_password_change_is_not_an_error() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "success": false,
                    "message": "Password change required",
                    "data": {"requiresPasswordChange": true, "token": "tmp-42"}
                })),
            )
        }),
    );
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let outcome = client.login("admin", "hunter2").await.unwrap();
    match outcome {
        LoginOutcome::PasswordChangeRequired { token, message } => {
            assert_eq!(token.as_deref(), Some("tmp-42"));
            assert_eq!(message.as_deref(), Some("Password change required"));
        }
        other => panic!("expected password-change outcome, got {:?}", other),
    }
    // the temporary session token is usable for the change call
    assert_eq!(client.token().as_deref(), Some("tmp-42"));
}

#[tokio::test]
async fn test_plain_403_stays_an_error() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({"success": false, "data": {"requiresPasswordChange": false}})),
            )
        }),
    );
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let result = client.login("admin", "hunter2").await;
    assert!(matches!(result, Err(ClientError::Forbidden)));
}

#[tokio::test]
async fn test_login_without_data_is_invalid_response() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async { Json(json!({"success": true, "message": "OK"})) }),
    );
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let err = client.login("admin", "secret").await.unwrap_err();
    match err {
        ClientError::InvalidResponse(msg) => {
            assert_eq!(msg, "Missing login data in response");
        }
        other => panic!("expected invalid-response error, got {:?}", other),
    }
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_canned_messages_for_message_less_errors() {
    let router = Router::new()
        .route("/api/categories", post(|| async { StatusCode::CONFLICT }))
        .route("/api/tags", get(|| async { StatusCode::FORBIDDEN }))
        .route(
            "/api/uploads/banner",
            post(|| async { StatusCode::PAYLOAD_TOO_LARGE }),
        )
        .route("/api/settings", get(|| async { StatusCode::BAD_REQUEST }))
        .route(
            "/api/socials",
            get(|| async { StatusCode::BAD_GATEWAY }),
        );
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let err = client.create_category("Shoes").await.unwrap_err();
    assert_eq!(err.to_string(), "Data conflict: This item already exists.");

    let err = client.tags().await.unwrap_err();
    assert_eq!(err.to_string(), "Access denied: You do not have permission.");

    let err = client
        .upload_banner_image("big.png", vec![0u8; 16], "image/png")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "File too large. Please choose a smaller image."
    );

    let err = client.settings().await.unwrap_err();
    assert_eq!(err.to_string(), "Bad Request: Invalid input data.");

    let err = client.socials().await.unwrap_err();
    assert!(matches!(err, ClientError::Status(502)));
}

#[tokio::test]
async fn test_server_message_wins_over_canned_mapping() {
    let router = Router::new().route(
        "/api/tags",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({"success": false, "message": "Tag 'sale' already exists"})),
            )
        }),
    );
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let err = client.create_tag("sale").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Tag 'sale' already exists");
        }
        other => panic!("expected server message, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_persists_token_and_attaches_bearer() {
    async fn me(headers: HeaderMap) -> impl IntoResponse {
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some("Bearer tok-99") => Json(json!({
                "success": true,
                "data": {
                    "id": "u1",
                    "username": "admin",
                    "role_id": 1,
                    "role_name": "Super Admin",
                    "permissions": ["*"]
                }
            }))
            .into_response(),
            _ => StatusCode::UNAUTHORIZED.into_response(),
        }
    }

    let router = Router::new()
        .route(
            "/api/auth/login",
            post(|| async {
                Json(json!({
                    "success": true,
                    "data": {
                        "token": "tok-99",
                        "user": {
                            "id": "u1",
                            "username": "admin",
                            "role_id": 1,
                            "role_name": "Super Admin",
                            "permissions": ["*"]
                        }
                    }
                }))
            }),
        )
        .route("/api/auth/me", get(me));
    let base = spawn_server(router).await;

    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("token.json");
    let client = ClientConfig::new(&base)
        .with_token_path(&token_path)
        .build()
        .unwrap();

    let outcome = client.login("admin", "secret").await.unwrap();
    assert!(!outcome.requires_password_change());
    assert!(token_path.exists());

    let me = client.current_user().await.unwrap();
    assert_eq!(me.data.unwrap().username, "admin");
}

#[tokio::test]
async fn test_logout_clears_token_even_when_call_fails() {
    let router = Router::new().route(
        "/api/auth/logout",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();
    client.set_token("tok").unwrap();

    let result = client.logout().await;
    assert!(result.is_err());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_success_body_returned_verbatim() {
    let router = Router::new().route(
        "/api/products/saved",
        get(|| async {
            Json(json!({
                "success": true,
                "data": {
                    "items": [{
                        "id": "p1",
                        "item_id": "1001",
                        "name": "Trail Shoes",
                        "image_url": null,
                        "price": 49.9,
                        "commission_rate": 0.08,
                        "commission_amount": 3.99,
                        "rating_star": 4.7,
                        "category_id": 3,
                        "tags": ["outdoor"],
                        "status": "active",
                        "is_flash_sale": true,
                        "offer_link": "https://aff.example/x"
                    }],
                    "page": 1,
                    "limit": 20,
                    "total": 1,
                    "total_pages": 1
                },
                "message": "OK"
            }))
        }),
    );
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let response = client
        .saved_products(&SavedProductQuery::default())
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("OK"));
    let page = response.data.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].item_id, "1001");
    assert!(page.items[0].is_flash_sale);
}

#[tokio::test]
async fn test_multipart_upload_carries_image_field_and_auth() {
    async fn upload(headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer up-tok") {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        while let Some(field) = multipart.next_field().await.unwrap() {
            if field.name() == Some("image") {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.unwrap();
                return Json(json!({
                    "success": true,
                    "data": {
                        "filename": filename,
                        "url": format!("/static/banners/{}", filename),
                        "size": bytes.len(),
                        "folder": "banners"
                    }
                }))
                .into_response();
            }
        }
        StatusCode::BAD_REQUEST.into_response()
    }

    let router = Router::new().route("/api/uploads/banner", post(upload));
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();
    client.set_token("up-tok").unwrap();

    let payload = vec![7u8; 128];
    let response: ApiResponse<shared::models::UploadedImage> = client
        .upload_banner_image("hero.png", payload, "image/png")
        .await
        .unwrap();
    let uploaded = response.data.unwrap();
    assert_eq!(uploaded.filename, "hero.png");
    assert_eq!(uploaded.size, 128);
    assert_eq!(uploaded.url, "/static/banners/hero.png");
}

#[tokio::test]
async fn test_duplicate_banner_sort_order_is_rejected() {
    type Taken = Arc<Mutex<HashSet<(i64, i32)>>>;

    async fn create(State(taken): State<Taken>, Json(body): Json<Value>) -> impl IntoResponse {
        let position_id = body["position_id"].as_i64().unwrap();
        let sort_order = body["sort_order"].as_i64().unwrap() as i32;
        let mut taken = taken.lock().unwrap();
        if !taken.insert((position_id, sort_order)) {
            return StatusCode::CONFLICT.into_response();
        }
        Json(json!({
            "success": true,
            "data": {
                "id": taken.len(),
                "title": body["title"],
                "position_id": position_id,
                "campaign_id": null,
                "image_url": body["image_url"],
                "link_url": null,
                "sort_order": sort_order,
                "starts_at": null,
                "ends_at": null,
                "is_active": true
            }
        }))
        .into_response()
    }

    let taken: Taken = Arc::new(Mutex::new(HashSet::new()));
    let router = Router::new()
        .route("/api/banners", post(create))
        .with_state(taken);
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let banner = BannerCreate {
        title: "Sale".into(),
        position_id: 1,
        campaign_id: None,
        image_url: "/static/banners/sale.png".into(),
        link_url: None,
        sort_order: 1,
        starts_at: None,
        ends_at: None,
    };
    client.create_banner(&banner).await.unwrap();

    let duplicate = BannerCreate {
        title: "Other".into(),
        ..banner.clone()
    };
    let err = client.create_banner(&duplicate).await.unwrap_err();
    assert!(matches!(err, ClientError::Conflict));

    // a different position may reuse the sort order
    let other_position = BannerCreate {
        position_id: 2,
        ..banner
    };
    client.create_banner(&other_position).await.unwrap();
}

#[tokio::test]
async fn test_query_parameters_reach_the_server() {
    async fn saved(
        axum::extract::Query(params): axum::extract::Query<Vec<(String, String)>>,
    ) -> impl IntoResponse {
        let has = |k: &str, v: &str| params.iter().any(|(pk, pv)| pk == k && pv == v);
        if has("page", "3") && has("status", "inactive") && has("sort_order", "asc") {
            Json(json!({
                "success": true,
                "data": {"items": [], "page": 3, "limit": 20, "total": 0, "total_pages": 0}
            }))
            .into_response()
        } else {
            StatusCode::BAD_REQUEST.into_response()
        }
    }

    let router = Router::new().route("/api/products/saved", get(saved));
    let base = spawn_server(router).await;
    let client = ClientConfig::new(&base).build().unwrap();

    let query = SavedProductQuery {
        page: Some(3),
        status: Some(shared::models::ProductStatus::Inactive),
        sort_order: Some(shared::models::SortOrder::Asc),
        ..Default::default()
    };
    let response = client.saved_products(&query).await.unwrap();
    assert_eq!(response.data.unwrap().page, 3);
}
