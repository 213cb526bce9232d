mod common;

use axum::http::StatusCode;
use common::setup_test_app;
use serde_json::json;
use stayvista_db::Filter;

#[tokio::test]
async fn test_guest_reviews_booked_room() {
    let app = setup_test_app();
    let room_id = app.seed_room("host@stayvista.com", "Beach hut").await;
    app.seed_booking("guest@stayvista.com", "host@stayvista.com", &room_id, 240.0, "2025-03-01T10:00:00Z")
        .await;
    let cookie = app.cookie_for("guest@stayvista.com");

    let response = app
        .send(
            "POST",
            "/review",
            Some(&cookie),
            Some(json!({ "roomId": room_id, "rating": 5, "comment": "Loved it", "name": "Gia" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let listed = app.send("GET", &format!("/reviews/{room_id}"), None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let reviews = listed.body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["reviewer"]["email"], "guest@stayvista.com");
    assert_eq!(reviews[0]["reviewer"]["name"], "Gia");
}

#[tokio::test]
async fn test_review_without_booking_is_forbidden() {
    let app = setup_test_app();
    let room_id = app.seed_room("host@stayvista.com", "Beach hut").await;
    let cookie = app.cookie_for("stranger@stayvista.com");

    let response = app
        .send(
            "POST",
            "/review",
            Some(&cookie),
            Some(json!({ "roomId": room_id, "rating": 1, "comment": "Never stayed" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("reviews", Filter::new()).await, 0);
}

#[tokio::test]
async fn test_second_review_conflicts() {
    let app = setup_test_app();
    let room_id = app.seed_room("host@stayvista.com", "Beach hut").await;
    app.seed_booking("guest@stayvista.com", "host@stayvista.com", &room_id, 240.0, "2025-03-01T10:00:00Z")
        .await;
    let cookie = app.cookie_for("guest@stayvista.com");
    let body = json!({ "roomId": room_id, "rating": 4 });

    let first = app.send("POST", "/review", Some(&cookie), Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.send("POST", "/review", Some(&cookie), Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "You have already reviewed this room");
    assert_eq!(app.count("reviews", Filter::new()).await, 1);
}

#[tokio::test]
async fn test_rating_out_of_range_is_rejected() {
    let app = setup_test_app();
    let room_id = app.seed_room("host@stayvista.com", "Beach hut").await;
    app.seed_booking("guest@stayvista.com", "host@stayvista.com", &room_id, 240.0, "2025-03-01T10:00:00Z")
        .await;
    let cookie = app.cookie_for("guest@stayvista.com");

    let response = app
        .send(
            "POST",
            "/review",
            Some(&cookie),
            Some(json!({ "roomId": room_id, "rating": 6 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_review_requires_authentication() {
    let app = setup_test_app();

    let response = app
        .send("POST", "/review", None, Some(json!({ "roomId": "r1", "rating": 5 })))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
