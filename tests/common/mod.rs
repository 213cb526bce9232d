#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use stayvista::modules::payments::gateway::{PaymentError, PaymentGateway};
use stayvista::router::init_router;
use stayvista::state::AppState;
use stayvista_auth::issue_token;
use stayvista_config::{CookieConfig, CorsConfig, JwtConfig};
use stayvista_db::{DocumentStore, Filter, MemoryStore};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Payment gateway double that records every amount it is asked to charge.
#[derive(Debug, Default)]
pub struct FakeGateway {
    pub amounts: Mutex<Vec<u64>>,
    pub fail: bool,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_payment_intent(&self, amount: u64) -> Result<String, PaymentError> {
        self.amounts.lock().unwrap().push(amount);
        if self.fail {
            return Err(PaymentError::Processor {
                status: 402,
                message: "card declined".into(),
            });
        }
        Ok(format!("pi_{amount}_secret_test"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn DocumentStore>,
    pub jwt_config: JwtConfig,
    pub gateway: Arc<FakeGateway>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: 3600,
        cookie: CookieConfig::default(),
    }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_gateway(FakeGateway::default())
}

pub fn setup_test_app_with_gateway(gateway: FakeGateway) -> TestApp {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let gateway = Arc::new(gateway);
    let jwt_config = jwt_config();

    let state = AppState::new(
        Arc::clone(&store),
        jwt_config.clone(),
        CorsConfig::default(),
        gateway.clone(),
    );

    TestApp {
        router: init_router(state),
        store,
        jwt_config,
        gateway,
    }
}

impl TestApp {
    /// `Cookie` header value carrying a valid credential for `email`.
    pub fn cookie_for(&self, email: &str) -> String {
        let token = issue_token(email, &self.jwt_config).unwrap();
        format!("{}={}", self.jwt_config.cookie.name, token)
    }

    pub async fn seed_user(&self, email: &str, role: &str) {
        self.store
            .insert_one(
                "users",
                json!({
                    "email": email,
                    "name": "Test User",
                    "role": role,
                    "timestamp": 1_700_000_000_000i64,
                }),
            )
            .await
            .unwrap();
    }

    pub async fn seed_room(&self, host_email: &str, title: &str) -> String {
        self.store
            .insert_one(
                "rooms",
                json!({
                    "title": title,
                    "location": "Dhaka, Bangladesh",
                    "category": "Beach",
                    "price": 120,
                    "guests": 4,
                    "host": { "name": "Host", "email": host_email },
                    "booked": false,
                }),
            )
            .await
            .unwrap()
            .inserted_id
    }

    pub async fn seed_booking(
        &self,
        guest_email: &str,
        host_email: &str,
        room_id: &str,
        price: f64,
        date: &str,
    ) -> String {
        self.store
            .insert_one(
                "bookings",
                json!({
                    "roomId": room_id,
                    "guest": { "email": guest_email },
                    "host": { "email": host_email },
                    "price": price,
                    "date": date,
                    "transactionId": "pi_seed",
                }),
            )
            .await
            .unwrap()
            .inserted_id
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn find(&self, collection: &str, filter: Filter) -> Option<Value> {
        self.store.find_one(collection, &filter).await.unwrap()
    }

    pub async fn count(&self, collection: &str, filter: Filter) -> u64 {
        self.store.count_documents(collection, &filter).await.unwrap()
    }
}
