//! In-process fake of the external card database.
//!
//! Serves the `cardinfo` query interface on `127.0.0.1` with an OS-assigned port and
//! records the query parameters of every request it receives, so tests can assert both
//! what the lookup client returned and how many requests it made.
//!
//! Matching follows the real service closely enough for the lookup client:
//! - `name=a|b|c` returns every known card whose name equals one of the names,
//!   ignoring case
//! - `fname=q` returns known cards whose name contains `q`, ignoring case, capped by `num`
//! - no match answers `400` with an `error` body, as the real service does

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, task::JoinHandle};
use url::Url;

use crate::{error::TestError, factory::helpers::next_id};

/// Builds a card database record with the fields the lookup client reads.
///
/// Monsters get fixed stats; any `card_type` not containing "Monster" is returned without
/// level, ATK, DEF or attribute like the real service does for spells and traps.
pub fn card_record(name: &str, card_type: &str) -> Value {
    let id = 10_000_000 + next_id();
    let image_url = format!("https://images.example.test/cards/{}.jpg", id);
    let image_url_small = format!("https://images.example.test/cards_small/{}.jpg", id);

    if card_type.contains("Monster") {
        json!({
            "id": id,
            "name": name,
            "type": card_type,
            "desc": format!("{} test monster.", name),
            "atk": 1800,
            "def": 1000,
            "level": 4,
            "race": "Spellcaster",
            "attribute": "DARK",
            "card_images": [{ "id": id, "image_url": image_url, "image_url_small": image_url_small }]
        })
    } else {
        json!({
            "id": id,
            "name": name,
            "type": card_type,
            "desc": format!("{} test card.", name),
            "race": "Normal",
            "card_images": [{ "id": id, "image_url": image_url, "image_url_small": image_url_small }]
        })
    }
}

#[derive(Default)]
struct FakeState {
    cards: Vec<Value>,
    failing_names: HashSet<String>,
    fail_all: bool,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

/// Builder for a [`FakeCardApi`].
#[derive(Default)]
pub struct FakeCardApiBuilder {
    cards: Vec<Value>,
    failing_names: HashSet<String>,
    fail_all: bool,
}

impl FakeCardApiBuilder {
    /// Adds a card known to the fake database.
    pub fn with_card(mut self, name: &str, card_type: &str) -> Self {
        self.cards.push(card_record(name, card_type));
        self
    }

    /// Adds a raw record, for payloads the `card_record` helper does not cover.
    pub fn with_record(mut self, record: Value) -> Self {
        self.cards.push(record);
        self
    }

    /// Makes any bulk request whose name list contains `name` fail with `500`.
    pub fn with_failing_name(mut self, name: &str) -> Self {
        self.failing_names.insert(name.to_lowercase());
        self
    }

    /// Makes every request fail with `500`.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Binds the fake to a free local port and starts serving it.
    ///
    /// # Returns
    /// - `Ok(FakeCardApi)` - Running fake; the server stops when it is dropped
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(self) -> Result<FakeCardApi, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let url = Url::parse(&format!("http://{}/api/v7/cardinfo.php", addr))?;

        let state = Arc::new(FakeState {
            cards: self.cards,
            failing_names: self.failing_names,
            fail_all: self.fail_all,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/v7/cardinfo.php", get(card_info))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(FakeCardApi { url, state, handle })
    }
}

/// A running fake card database.
pub struct FakeCardApi {
    url: Url,
    state: Arc<FakeState>,
    handle: JoinHandle<()>,
}

impl FakeCardApi {
    pub fn builder() -> FakeCardApiBuilder {
        FakeCardApiBuilder::default()
    }

    /// Endpoint to hand to the lookup client.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Query parameters of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state
            .requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

impl Drop for FakeCardApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn card_info(
    State(state): State<Arc<FakeState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(params.clone());
    }

    if state.fail_all {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let matches: Vec<Value> = if let Some(names) = params.get("name") {
        let wanted: HashSet<String> = names.split('|').map(str::to_lowercase).collect();
        if wanted.iter().any(|name| state.failing_names.contains(name)) {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        state
            .cards
            .iter()
            .filter(|card| wanted.contains(&record_name(card).to_lowercase()))
            .cloned()
            .collect()
    } else if let Some(fname) = params.get("fname") {
        let needle = fname.to_lowercase();
        let limit = params
            .get("num")
            .and_then(|num| num.parse::<usize>().ok())
            .unwrap_or(usize::MAX);

        state
            .cards
            .iter()
            .filter(|card| record_name(card).to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    if matches.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No card matching your query was found in the database." })),
        )
            .into_response();
    }

    Json(json!({ "data": matches })).into_response()
}

fn record_name(card: &Value) -> &str {
    card.get("name").and_then(Value::as_str).unwrap_or_default()
}
