#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Duration as TimeDelta, Utc};
use lineupcli::config::Config;
use serde_json::{Value, json};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
// base64("test-client:test-secret")
pub const BASIC_CREDENTIALS: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

/// In-memory stand-in for the catalog API.
#[derive(Default)]
pub struct MockCatalog {
    pub token_ttl: i64,
    pub reject_auth: bool,
    /// Later pages answer faster, so responses arrive out of page order.
    pub delay_pages: bool,
    pub playlists: HashMap<String, Vec<Value>>,
    pub tracks: HashMap<String, Vec<Value>>,
    pub related: HashMap<String, Vec<Value>>,
    pub auth_calls: AtomicUsize,
    pub api_calls: AtomicUsize,
    pub issued: AtomicUsize,
    /// Expiry of every token handed out, checked on each API request.
    pub tokens: Mutex<HashMap<String, DateTime<Utc>>>,
    pub stale_rejections: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            token_ttl: 3600,
            ..Default::default()
        }
    }

    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn api_calls(&self) -> usize {
        self.api_calls.load(Ordering::SeqCst)
    }

    pub fn stale_rejections(&self) -> usize {
        self.stale_rejections.load(Ordering::SeqCst)
    }

    fn issue_token(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("token-{}", n);
        let expires_at = TimeDelta::try_seconds(self.token_ttl)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.tokens.lock().unwrap().insert(token.clone(), expires_at);
        token
    }

    /// Accepts only bearer tokens this catalog issued and that have not expired.
    fn authorized(&self, headers: &HeaderMap) -> bool {
        let Some(token) = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
        else {
            return false;
        };

        let expires_at = self.tokens.lock().unwrap().get(token).copied();
        match expires_at {
            Some(expires_at) if Utc::now() <= expires_at => true,
            Some(_) => {
                self.stale_rejections.fetch_add(1, Ordering::SeqCst);
                false
            }
            None => false,
        }
    }
}

pub struct MockServer {
    pub addr: SocketAddr,
    pub catalog: Arc<MockCatalog>,
}

impl MockServer {
    pub async fn start(catalog: MockCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/users/{user_id}/playlists", get(user_playlists))
            .route("/v1/playlists/{playlist_id}/tracks", get(playlist_tracks))
            .route("/v1/artists/{artist_id}/related-artists", get(related_artists))
            .with_state(Arc::clone(&catalog));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, catalog }
    }

    pub fn config(&self) -> Config {
        let mut config = Config::new(CLIENT_ID, CLIENT_SECRET);
        config.api_url = format!("http://{}/v1", self.addr);
        config.token_url = format!("http://{}/api/token", self.addr);
        config
    }
}

async fn token(
    State(catalog): State<Arc<MockCatalog>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    catalog.auth_calls.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == BASIC_CREDENTIALS);
    let grant = form.get("grant_type").map(String::as_str);

    if catalog.reject_auth || !authorized || grant != Some("client_credentials") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid_client"}))).into_response();
    }

    Json(json!({
        "access_token": catalog.issue_token(),
        "token_type": "Bearer",
        "expires_in": catalog.token_ttl,
    }))
    .into_response()
}

async fn user_playlists(
    State(catalog): State<Arc<MockCatalog>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    catalog.api_calls.fetch_add(1, Ordering::SeqCst);
    if !catalog.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match catalog.playlists.get(&user_id) {
        Some(items) => Json(json!({ "items": items })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn playlist_tracks(
    State(catalog): State<Arc<MockCatalog>>,
    Path(playlist_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    catalog.api_calls.fetch_add(1, Ordering::SeqCst);
    if !catalog.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if playlist_id == "broken" {
        return Json(json!({ "items": [{ "track": { "name": "no id" } }], "total": 1, "limit": 100 }))
            .into_response();
    }
    let Some(tracks) = catalog.tracks.get(&playlist_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let limit: usize = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(100);
    let offset: usize = params.get("offset").and_then(|o| o.parse().ok()).unwrap_or(0);

    if catalog.delay_pages {
        let page = offset / limit.max(1);
        tokio::time::sleep(Duration::from_millis(20 * (5u64.saturating_sub(page as u64)))).await;
    }

    let items: Vec<Value> = tracks.iter().skip(offset).take(limit).cloned().collect();
    Json(json!({
        "items": items,
        "total": tracks.len(),
        "limit": limit,
        "offset": offset,
    }))
    .into_response()
}

async fn related_artists(
    State(catalog): State<Arc<MockCatalog>>,
    Path(artist_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    catalog.api_calls.fetch_add(1, Ordering::SeqCst);
    if !catalog.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match catalog.related.get(&artist_id) {
        Some(artists) => Json(json!({ "artists": artists })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn artist(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "followers": { "href": null, "total": 1000 },
        "genres": ["electronic"],
        "popularity": 50,
    })
}

pub fn track(id: &str, name: &str, artists: &[(&str, &str)]) -> Value {
    json!({
        "added_at": "2021-12-01T00:00:00Z",
        "track": {
            "id": id,
            "name": name,
            "popularity": 60,
            "artists": artists
                .iter()
                .map(|(id, name)| json!({ "id": id, "name": name }))
                .collect::<Vec<_>>(),
        }
    })
}

/// `count` tracks named `t0`, `t1`, ... each by a single filler artist.
pub fn numbered_tracks(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| track(&format!("t{}", i), &format!("Track {}", i), &[("filler", "Filler")]))
        .collect()
}
