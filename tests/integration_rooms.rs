mod common;

use axum::http::StatusCode;
use common::setup_test_app;
use serde_json::{Value, json};
use stayvista_db::Filter;

fn room_body(host_email: &str) -> Value {
    json!({
        "title": "Cliffside cabin",
        "location": "Cox's Bazar, Bangladesh",
        "category": "Beach",
        "price": "150",
        "guests": 3,
        "bedrooms": 2,
        "bathrooms": 1,
        "description": "Sea view from every room",
        "from": "2025-03-01",
        "to": "2025-03-31",
        "host": { "name": "Hana", "email": host_email }
    })
}

#[tokio::test]
async fn test_list_rooms_filters_by_category() {
    let app = setup_test_app();
    app.seed_room("host@stayvista.com", "Beach hut").await;
    app.store
        .insert_one(
            "rooms",
            json!({
                "title": "Mountain lodge",
                "location": "Sylhet",
                "category": "Skiing",
                "price": 300,
                "host": { "email": "host@stayvista.com" }
            }),
        )
        .await
        .unwrap();

    let all = app.send("GET", "/rooms", None, None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body.as_array().unwrap().len(), 2);

    let beach = app.send("GET", "/rooms?category=Beach", None, None).await;
    let beach = beach.body.as_array().unwrap();
    assert_eq!(beach.len(), 1);
    assert_eq!(beach[0]["title"], "Beach hut");

    let unfiltered = app.send("GET", "/rooms?category=null", None, None).await;
    assert_eq!(unfiltered.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_room_by_id() {
    let app = setup_test_app();
    let id = app.seed_room("host@stayvista.com", "Beach hut").await;

    let response = app.send("GET", &format!("/room/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_id"], id);
    assert_eq!(response.body["host"]["email"], "host@stayvista.com");

    let missing = app.send("GET", "/room/does-not-exist", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_host_creates_room() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app
        .send("POST", "/room", Some(&cookie), Some(room_body("host@stayvista.com")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let id = response.body["insertedId"].as_str().unwrap().to_string();

    let stored = app.find("rooms", Filter::by_id(id)).await.unwrap();
    assert_eq!(stored["title"], "Cliffside cabin");
    assert_eq!(stored["price"], 150.0);
    assert_eq!(stored["booked"], false);
}

#[tokio::test]
async fn test_add_room_path_creates_room() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app
        .send("POST", "/add-room", Some(&cookie), Some(room_body("host@stayvista.com")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.count("rooms", Filter::new()).await, 1);

    let guest = app.cookie_for("guest@stayvista.com");
    let response = app
        .send("POST", "/add-room", Some(&guest), Some(room_body("guest@stayvista.com")))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_finite_price_is_rejected() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    app.seed_room("host@stayvista.com", "Beach hut").await;
    let cookie = app.cookie_for("host@stayvista.com");

    for price in ["NaN", "inf", "-Infinity"] {
        let mut body = room_body("host@stayvista.com");
        body["price"] = json!(price);
        let response = app.send("POST", "/room", Some(&cookie), Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{price}");
    }
    assert_eq!(app.count("rooms", Filter::new()).await, 1);

    let listed = app.send("GET", "/rooms", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_room_does_not_break_listing() {
    let app = setup_test_app();
    app.seed_room("host@stayvista.com", "Beach hut").await;
    app.store
        .insert_one(
            "rooms",
            json!({
                "title": "Broken",
                "location": "Nowhere",
                "category": "Beach",
                "price": null,
                "host": { "email": "host@stayvista.com" }
            }),
        )
        .await
        .unwrap();

    let response = app.send("GET", "/rooms", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let rooms = response.body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["title"], "Beach hut");
}

#[tokio::test]
async fn test_guest_cannot_create_room() {
    let app = setup_test_app();
    app.seed_user("guest@stayvista.com", "guest").await;
    let cookie = app.cookie_for("guest@stayvista.com");

    let response = app
        .send("POST", "/room", Some(&cookie), Some(room_body("guest@stayvista.com")))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("rooms", Filter::new()).await, 0);
}

#[tokio::test]
async fn test_host_cannot_list_room_for_someone_else() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app
        .send("POST", "/room", Some(&cookie), Some(room_body("other@stayvista.com")))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("rooms", Filter::new()).await, 0);
}

#[tokio::test]
async fn test_create_room_validation() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let mut missing_title = room_body("host@stayvista.com");
    missing_title.as_object_mut().unwrap().remove("title");
    let response = app.send("POST", "/room", Some(&cookie), Some(missing_title)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "title is required");

    let mut negative_price = room_body("host@stayvista.com");
    negative_price["price"] = json!(-10);
    let response = app.send("POST", "/room", Some(&cookie), Some(negative_price)).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_owner_updates_room() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let id = app.seed_room("host@stayvista.com", "Beach hut").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app
        .send(
            "PUT",
            &format!("/room/update/{id}"),
            Some(&cookie),
            Some(json!({ "title": "Renovated beach hut", "price": 180 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["modifiedCount"], 1);

    let stored = app.find("rooms", Filter::by_id(id)).await.unwrap();
    assert_eq!(stored["title"], "Renovated beach hut");
    assert_eq!(stored["host"]["email"], "host@stayvista.com");
}

#[tokio::test]
async fn test_other_host_cannot_update_room() {
    let app = setup_test_app();
    app.seed_user("other@stayvista.com", "host").await;
    let id = app.seed_room("host@stayvista.com", "Beach hut").await;
    let cookie = app.cookie_for("other@stayvista.com");

    let response = app
        .send(
            "PUT",
            &format!("/room/update/{id}"),
            Some(&cookie),
            Some(json!({ "title": "Hijacked" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let stored = app.find("rooms", Filter::by_id(id)).await.unwrap();
    assert_eq!(stored["title"], "Beach hut");
}

#[tokio::test]
async fn test_empty_room_update_is_rejected() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    let id = app.seed_room("host@stayvista.com", "Beach hut").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app
        .send("PUT", &format!("/room/update/{id}"), Some(&cookie), Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_authenticated_user_sets_booked_flag() {
    let app = setup_test_app();
    let id = app.seed_room("host@stayvista.com", "Beach hut").await;
    let cookie = app.cookie_for("guest@stayvista.com");

    let unauthenticated = app
        .send(
            "PATCH",
            &format!("/room/status/{id}"),
            None,
            Some(json!({ "booked": true })),
        )
        .await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);

    let response = app
        .send(
            "PATCH",
            &format!("/room/status/{id}"),
            Some(&cookie),
            Some(json!({ "booked": true })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stored = app.find("rooms", Filter::by_id(id)).await.unwrap();
    assert_eq!(stored["booked"], true);
}

#[tokio::test]
async fn test_delete_room_is_gated_and_owner_scoped() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    app.seed_user("other@stayvista.com", "host").await;
    app.seed_user("guest@stayvista.com", "guest").await;
    let id = app.seed_room("host@stayvista.com", "Beach hut").await;
    let uri = format!("/room/{id}");

    let anonymous = app.send("DELETE", &uri, None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let guest = app.cookie_for("guest@stayvista.com");
    let response = app.send("DELETE", &uri, Some(&guest), None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let other = app.cookie_for("other@stayvista.com");
    let response = app.send("DELETE", &uri, Some(&other), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.count("rooms", Filter::new()).await, 1);

    let owner = app.cookie_for("host@stayvista.com");
    let response = app.send("DELETE", &uri, Some(&owner), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["deletedCount"], 1);
    assert_eq!(app.count("rooms", Filter::new()).await, 0);
}

#[tokio::test]
async fn test_my_listings_only_for_self() {
    let app = setup_test_app();
    app.seed_user("host@stayvista.com", "host").await;
    app.seed_room("host@stayvista.com", "Beach hut").await;
    app.seed_room("other@stayvista.com", "Lake house").await;
    let cookie = app.cookie_for("host@stayvista.com");

    let response = app
        .send("GET", "/my-listings/host@stayvista.com", Some(&cookie), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let rooms = response.body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["title"], "Beach hut");

    let response = app
        .send("GET", "/my-listings/other@stayvista.com", Some(&cookie), None)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
