use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use learnhub::learnhub_auth::IdentityId;
use learnhub::learnhub_config::{CorsConfig, JwtConfig};
use learnhub::learnhub_db::{AccountStatus, AccountStore, AccountStoreError};
use learnhub::state::AppState;
use serde_json::{Value, json};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

/// In-memory account store that counts lookups.
#[derive(Default)]
pub struct FakeAccountStore {
    statuses: HashMap<IdentityId, AccountStatus>,
    fail: bool,
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl FakeAccountStore {
    pub fn with_status(mut self, id: impl Into<IdentityId>, status: AccountStatus) -> Self {
        self.statuses.insert(id.into(), status);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountStore for FakeAccountStore {
    async fn account_status(&self, id: &IdentityId) -> Result<AccountStatus, AccountStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(AccountStoreError::Database(sqlx::Error::PoolTimedOut));
        }

        Ok(self
            .statuses
            .get(id)
            .copied()
            .unwrap_or(AccountStatus::Unknown))
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state(accounts: Arc<FakeAccountStore>) -> AppState {
    AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        accounts,
    }
}

/// Signs `claims` with the test secret, adding an `exp` one hour out unless
/// the claims already carry one.
pub fn sign_claims(mut claims: Value) -> String {
    if claims.get("exp").is_none() {
        claims["exp"] = json!(Utc::now().timestamp() + 3600);
    }

    sign_exact(&claims, Algorithm::HS256)
}

/// Signs `claims` as given, with no claims added.
pub fn sign_exact(claims: &Value, algorithm: Algorithm) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn student_token(id: i64) -> String {
    sign_claims(json!({ "user": { "id": id, "role": "student" } }))
}

pub fn get(uri: &str, authorization: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Log output collected by [`capture_logs`].
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's tracing events into a buffer until the guard drops.
/// Only reliable under the current-thread runtime `#[tokio::test]` uses.
#[allow(dead_code)]
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
