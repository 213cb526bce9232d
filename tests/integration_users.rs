mod common;

use axum::http::StatusCode;
use common::setup_test_app;
use serde_json::json;
use stayvista::middleware::role::FORBIDDEN_MESSAGE;
use stayvista_db::Filter;

fn by_email(email: &str) -> Filter {
    Filter::new().eq("email", email)
}

#[tokio::test]
async fn test_save_user_creates_guest_record() {
    let app = setup_test_app();

    let response = app
        .send(
            "PUT",
            "/user",
            None,
            Some(json!({ "email": "new@stayvista.com", "name": "New Guest" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["upsertedId"].is_string());

    let stored = app.find("users", by_email("new@stayvista.com")).await.unwrap();
    assert_eq!(stored["role"], "guest");
    assert_eq!(stored["name"], "New Guest");
    assert!(stored["timestamp"].is_i64());
}

#[tokio::test]
async fn test_save_user_never_writes_submitted_role() {
    let app = setup_test_app();

    let response = app
        .send(
            "PUT",
            "/user",
            None,
            Some(json!({ "email": "sneaky@stayvista.com", "role": "admin" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let stored = app.find("users", by_email("sneaky@stayvista.com")).await.unwrap();
    assert_eq!(stored["role"], "guest");

    let cookie = app.cookie_for("sneaky@stayvista.com");
    let response = app.send("GET", "/users", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_save_user_cannot_escalate_existing_record() {
    let app = setup_test_app();
    app.seed_user("guest@stayvista.com", "guest").await;

    let response = app
        .send(
            "PUT",
            "/user",
            None,
            Some(json!({ "email": "guest@stayvista.com", "role": "admin", "status": "Verified" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "guest@stayvista.com");

    let stored = app.find("users", by_email("guest@stayvista.com")).await.unwrap();
    assert_eq!(stored["role"], "guest");
    assert!(stored.get("status").is_none());
}

#[tokio::test]
async fn test_save_user_records_host_request_once() {
    let app = setup_test_app();
    app.seed_user("guest@stayvista.com", "guest").await;
    let body = json!({ "email": "guest@stayvista.com", "status": "Requested" });

    let first = app.send("PUT", "/user", None, Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["matchedCount"], 1);
    assert_eq!(first.body["modifiedCount"], 1);

    let second = app.send("PUT", "/user", None, Some(body)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["modifiedCount"], 0);

    let stored = app.find("users", by_email("guest@stayvista.com")).await.unwrap();
    assert_eq!(stored["status"], "Requested");
    assert_eq!(stored["role"], "guest");
    assert_eq!(app.count("users", by_email("guest@stayvista.com")).await, 1);
}

#[tokio::test]
async fn test_get_user_requires_authentication() {
    let app = setup_test_app();
    app.seed_user("guest@stayvista.com", "guest").await;

    let response = app.send("GET", "/user/guest@stayvista.com", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_returns_stored_role() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app
        .send("GET", "/user/host@stayvista.com", Some(&cookie), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "host");
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = setup_test_app();
    let cookie = app.cookie_for("guest@stayvista.com");

    let response = app
        .send("GET", "/user/ghost@stayvista.com", Some(&cookie), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_admin_only() {
    let app = setup_test_app();
    app.seed_user("admin@stayvista.com", "admin").await;
    app.seed_user("host@stayvista.com", "host").await;
    app.seed_user("guest@stayvista.com", "guest").await;

    let admin = app.cookie_for("admin@stayvista.com");
    let response = app.send("GET", "/users", Some(&admin), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 3);

    for email in ["host@stayvista.com", "guest@stayvista.com"] {
        let cookie = app.cookie_for(email);
        let response = app.send("GET", "/users", Some(&cookie), None).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["error"], FORBIDDEN_MESSAGE);
    }

    let response = app.send("GET", "/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_caller_without_record_is_forbidden() {
    let app = setup_test_app();
    let cookie = app.cookie_for("nobody@stayvista.com");

    let response = app.send("GET", "/users", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unrecognised_stored_role_is_forbidden_everywhere() {
    let app = setup_test_app();
    app.seed_user("odd@stayvista.com", "superuser").await;
    let cookie = app.cookie_for("odd@stayvista.com");

    let admin = app.send("GET", "/users", Some(&cookie), None).await;
    assert_eq!(admin.status, StatusCode::FORBIDDEN);

    let host = app
        .send("GET", "/my-listings/odd@stayvista.com", Some(&cookie), None)
        .await;
    assert_eq!(host.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_is_not_implicitly_host() {
    let app = setup_test_app();
    app.seed_user("admin@stayvista.com", "admin").await;
    let cookie = app.cookie_for("admin@stayvista.com");

    let response = app
        .send("GET", "/my-listings/admin@stayvista.com", Some(&cookie), None)
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_host_is_not_admin() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app.send("GET", "/admin-stat", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_promotes_guest_to_host() {
    let app = setup_test_app();
    app.seed_user("admin@stayvista.com", "admin").await;
    app.seed_user("guest@stayvista.com", "guest").await;
    let admin = app.cookie_for("admin@stayvista.com");

    let response = app
        .send(
            "PATCH",
            "/user/update-role/guest@stayvista.com",
            Some(&admin),
            Some(json!({ "role": "host", "status": "Verified" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["matchedCount"], 1);

    let stored = app.find("users", by_email("guest@stayvista.com")).await.unwrap();
    assert_eq!(stored["role"], "host");
    assert_eq!(stored["status"], "Verified");

    // The new role applies on the next request with the same credential
    let cookie = app.cookie_for("guest@stayvista.com");
    let response = app
        .send("GET", "/my-listings/guest@stayvista.com", Some(&cookie), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Host is not admin
    let response = app.send("GET", "/users", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_legacy_user_records_are_readable() {
    let app = setup_test_app();
    app.seed_user("admin@stayvista.com", "admin").await;
    app.store
        .insert_one("users", json!({ "email": "legacy@stayvista.com", "role": null }))
        .await
        .unwrap();
    app.store
        .insert_one("users", json!({ "email": "odd@stayvista.com", "role": "superuser" }))
        .await
        .unwrap();
    let admin = app.cookie_for("admin@stayvista.com");

    let response = app.send("GET", "/users", Some(&admin), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 3);

    let response = app
        .send("GET", "/user/legacy@stayvista.com", Some(&admin), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "guest");

    // An unrecognised stored role passes no gate
    let odd = app.cookie_for("odd@stayvista.com");
    let response = app.send("GET", "/guest-stat", Some(&odd), None).await;
    assert_eq!(response.status, StatusCode::OK);
    let response = app
        .send("GET", "/my-listings/odd@stayvista.com", Some(&odd), None)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_role_rejects_unknown_role() {
    let app = setup_test_app();
    app.seed_user("admin@stayvista.com", "admin").await;
    app.seed_user("guest@stayvista.com", "guest").await;
    let admin = app.cookie_for("admin@stayvista.com");

    let response = app
        .send(
            "PATCH",
            "/user/update-role/guest@stayvista.com",
            Some(&admin),
            Some(json!({ "role": "superuser" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let stored = app.find("users", by_email("guest@stayvista.com")).await.unwrap();
    assert_eq!(stored["role"], "guest");
}

#[tokio::test]
async fn test_update_role_of_missing_user_is_not_found() {
    let app = setup_test_app();
    app.seed_user("admin@stayvista.com", "admin").await;
    let admin = app.cookie_for("admin@stayvista.com");

    let response = app
        .send(
            "PATCH",
            "/user/update-role/ghost@stayvista.com",
            Some(&admin),
            Some(json!({ "role": "host" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.count("users", by_email("ghost@stayvista.com")).await, 0);
}

#[tokio::test]
async fn test_guest_cannot_change_roles() {
    let app = setup_test_app();
    app.seed_user("guest@stayvista.com", "guest").await;
    let cookie = app.cookie_for("guest@stayvista.com");

    let response = app
        .send(
            "PATCH",
            "/user/update-role/guest@stayvista.com",
            Some(&cookie),
            Some(json!({ "role": "admin" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let stored = app.find("users", by_email("guest@stayvista.com")).await.unwrap();
    assert_eq!(stored["role"], "guest");
}
