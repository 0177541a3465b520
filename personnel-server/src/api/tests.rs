use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::error::ErrorCode;
use shared::models::{AssignmentKey, Employee};
use tower::ServiceExt;

use super::build_app;
use crate::config::Config;
use crate::db::memory::MemoryStore;
use crate::repository::AssignmentLedger;
use crate::state::AppState;

const ADMIN_NIP: &str = "198001012005011001";
const MANAGER_NIP: &str = "198707072010011003";
const STAFF_NIP: &str = "199505052020121002";

struct TestApp {
    store: Arc<MemoryStore>,
    app: Router,
}

fn app_with(config: Config) -> TestApp {
    let store = MemoryStore::seeded();
    let state = AppState::from_repositories(&store.repositories(), &config);
    TestApp {
        app: build_app(state),
        store,
    }
}

fn test_app() -> TestApp {
    app_with(Config::for_tests())
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn login(app: &Router, nip: &str) -> Value {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "nip": nip, "password": "password123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"].clone()
}

async fn access_token(app: &Router, nip: &str) -> String {
    login(app, nip).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn place(store: &MemoryStore, employee: &Employee, unit_id: i64, position_id: i64) {
    store
        .transactional_assign(AssignmentKey {
            employee_id: employee.id,
            unit_id,
            position_id,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_health_is_public() {
    let t = test_app();
    let res = t
        .app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/health", None, None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_protected_routes_require_access_token() {
    let t = test_app();
    t.store.add_employee(STAFF_NIP, "USR");

    let (status, body) = send(&t.app, request(Method::GET, "/api/v1/me", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::NotAuthenticated.code());

    let (status, body) =
        send(&t.app, request(Method::GET, "/api/v1/me", Some("garbage"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::TokenInvalid.code());

    let tokens = login(&t.app, STAFF_NIP).await;
    let refresh = tokens["refresh_token"].as_str().unwrap();
    let (status, _) = send(&t.app, request(Method::GET, "/api/v1/me", Some(refresh), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_hides_password_hash() {
    let t = test_app();
    t.store.add_employee(STAFF_NIP, "USR");
    let token = access_token(&t.app, STAFF_NIP).await;

    let (status, body) = send(&t.app, request(Method::GET, "/api/v1/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["nip"], STAFF_NIP);
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_refresh_takes_refresh_token_only() {
    let t = test_app();
    t.store.add_employee(STAFF_NIP, "USR");
    let tokens = login(&t.app, STAFF_NIP).await;
    let refresh = tokens["refresh_token"].as_str().unwrap();
    let access = tokens["access_token"].as_str().unwrap();

    let (status, body) = send(
        &t.app,
        request(Method::POST, "/api/v1/auth/refresh", Some(refresh), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["access_token"].is_string());

    let (status, _) = send(
        &t.app,
        request(Method::POST, "/api/v1/auth/refresh", Some(access), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_is_rate_limited_per_ip() {
    let t = test_app();
    let attempt = || {
        request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "nip": "000000000000000000", "password": "whatever1" })),
        )
    };
    for _ in 0..5 {
        let (status, _) = send(&t.app, attempt()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    let (status, body) = send(&t.app, attempt()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], ErrorCode::TooManyAttempts.code());
}

#[tokio::test]
async fn test_global_limiter_rejects_when_exhausted() {
    let mut config = Config::for_tests();
    config.rate_limit_per_second = 0;
    config.rate_limit_burst = 1;
    let t = app_with(config);

    let (status, _) = send(&t.app, request(Method::GET, "/api/v1/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&t.app, request(Method::GET, "/api/v1/health", None, None)).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], ErrorCode::TooManyRequests.code());
}

#[tokio::test]
async fn test_assignment_routes_enforce_scope() {
    let t = test_app();
    let admin = t.store.add_employee(ADMIN_NIP, "ADM");
    let manager = t.store.add_employee(MANAGER_NIP, "MGR");
    let staff = t.store.add_employee(STAFF_NIP, "USR");
    t.store.add_unit(1, "Sekretariat");
    t.store.add_unit(2, "Bidang Keuangan");
    t.store.add_position(10, "Analis");
    place(&t.store, &admin, 1, 10).await;
    place(&t.store, &manager, 1, 10).await;

    let admin_token = access_token(&t.app, ADMIN_NIP).await;
    let manager_token = access_token(&t.app, MANAGER_NIP).await;
    let key = json!({ "employee_id": staff.id, "unit_id": 2, "position_id": 10 });

    let (status, body) = send(
        &t.app,
        request(
            Method::POST,
            "/api/v1/employee-assignment",
            Some(&manager_token),
            Some(key.clone()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::OutOfScope.code());

    let (status, _) = send(
        &t.app,
        request(
            Method::POST,
            "/api/v1/employee-assignment",
            Some(&admin_token),
            Some(key.clone()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/v1/employee-assignment/{}", staff.id);
    let (status, body) = send(&t.app, request(Method::GET, &uri, Some(&admin_token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["unit_id"], 2);
    assert_eq!(body["data"]["is_active"], true);

    let uri = format!("/api/v1/employee-assignment/{}/2/10", staff.id);
    let (status, _) = send(&t.app, request(Method::GET, &uri, Some(&admin_token), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &t.app,
        request(
            Method::GET,
            "/api/v1/employee-assignment/unit/2",
            Some(&admin_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &t.app,
        request(
            Method::POST,
            "/api/v1/employee-assignment/deactivate",
            Some(&admin_token),
            Some(key),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(t.store.rows_of(staff.id).iter().all(|r| !r.is_active));

    let (status, _) = send(
        &t.app,
        request(
            Method::GET,
            "/api/v1/employee-assignment",
            Some(&manager_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_promote_and_demote_routes() {
    let t = test_app();
    t.store.add_employee(ADMIN_NIP, "ADM");
    t.store.add_employee(STAFF_NIP, "USR");
    let token = access_token(&t.app, ADMIN_NIP).await;

    let uri = format!("/api/v1/employee/{STAFF_NIP}/promote");
    let (status, body) = send(
        &t.app,
        request(Method::PUT, &uri, Some(&token), Some(json!({ "role_id": "MGR" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["role_id"], "MGR");

    let uri = format!("/api/v1/employee/{STAFF_NIP}/demote");
    let (status, body) = send(
        &t.app,
        request(Method::PUT, &uri, Some(&token), Some(json!({ "role_id": "USR" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role_id"], "USR");

    let uri = format!("/api/v1/employee/{ADMIN_NIP}/promote");
    let (status, body) = send(
        &t.app,
        request(Method::PUT, &uri, Some(&token), Some(json!({ "role_id": "MGR" }))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::SelfPromotion.code());
}

#[tokio::test]
async fn test_create_employee_route() {
    let t = test_app();
    t.store.add_employee(ADMIN_NIP, "ADM");
    let token = access_token(&t.app, ADMIN_NIP).await;
    let payload = json!({
        "nip": STAFF_NIP,
        "password": "rahasia123",
        "full_name": "Siti Aminah",
        "place_of_birth": "Bandung",
        "date_of_birth": "1995-05-05",
        "gender": "P",
        "phone_number": "081234567",
        "address": "Jl. Merdeka 10",
        "grade_id": t.store.grade_id(),
        "religion_id": "ISL",
        "echelon_id": t.store.echelon_id(),
    });

    let (status, body) = send(
        &t.app,
        request(Method::POST, "/api/v1/employee", Some(&token), Some(payload.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["role_id"], "USR");
    assert_eq!(body["data"]["photo_url"], Config::for_tests().default_photo_url);

    let (status, body) = send(
        &t.app,
        request(Method::POST, "/api/v1/employee", Some(&token), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::EmployeeNipExists.code());

    let (status, body) = send(
        &t.app,
        request(Method::GET, "/api/v1/employee/search?q=siti", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["nip"], STAFF_NIP);
}

#[tokio::test]
async fn test_unit_routes() {
    let t = test_app();
    t.store.add_employee(ADMIN_NIP, "ADM");
    t.store.add_employee(STAFF_NIP, "USR");
    let admin = access_token(&t.app, ADMIN_NIP).await;
    let staff = access_token(&t.app, STAFF_NIP).await;
    let unit = json!({
        "name": "Bidang Kepegawaian",
        "address": "Jl. Diponegoro 22",
        "description": "Urusan pegawai",
    });

    let (status, _) = send(
        &t.app,
        request(Method::POST, "/api/v1/unit", Some(&staff), Some(unit.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &t.app,
        request(Method::POST, "/api/v1/unit", Some(&admin), Some(unit)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &t.app,
        request(Method::GET, "/api/v1/unit/search?q=kepegawaian", Some(&staff), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], id);

    let uri = format!("/api/v1/unit/{id}");
    let (status, _) = send(&t.app, request(Method::DELETE, &uri, Some(&admin), None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&t.app, request(Method::GET, &uri, Some(&staff), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_roles_and_reference_routes() {
    let t = test_app();
    t.store.add_employee(STAFF_NIP, "USR");
    let token = access_token(&t.app, STAFF_NIP).await;

    let (status, body) = send(&t.app, request(Method::GET, "/api/v1/roles", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (status, body) =
        send(&t.app, request(Method::GET, "/api/v1/religion/ISL", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Islam");

    let (status, _) = send(
        &t.app,
        request(
            Method::POST,
            "/api/v1/grade",
            Some(&token),
            Some(json!({ "code": "IV/a" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_print_routes_gated_by_directory_capability() {
    let t = test_app();
    t.store.add_employee(ADMIN_NIP, "ADM");
    t.store.add_employee(STAFF_NIP, "USR");
    let admin = access_token(&t.app, ADMIN_NIP).await;
    let staff = access_token(&t.app, STAFF_NIP).await;

    let (status, _) = send(
        &t.app,
        request(Method::GET, "/api/v1/print/employee/all", Some(&staff), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let uri = format!("/api/v1/print/employee/{STAFF_NIP}");
    let (status, body) = send(&t.app, request(Method::GET, &uri, Some(&admin), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["unit"], "-");
}

#[tokio::test]
async fn test_profile_picture_upload() {
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    let t = test_app();
    let staff = t.store.add_employee(STAFF_NIP, "USR");
    let token = access_token(&t.app, STAFF_NIP).await;

    let mut png = Vec::new();
    RgbImage::from_pixel(32, 32, image::Rgb([10, 120, 200]))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let boundary = "personnel-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(&png);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/me/profile-picture")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(&t.app, req).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let key = format!("pictureprofile/pp_{}.jpg", staff.id);
    assert_eq!(body["data"], format!("https://cdn.test/{key}"));
    let (_, content_type) = t.store.blob(&key).unwrap();
    assert_eq!(content_type, "image/jpeg");
}
