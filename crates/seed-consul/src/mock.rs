//! In-process stand-in for the Consul KV HTTP API, backed by an
//! [`InMemoryKvStore`].

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use seed_store::{InMemoryKvStore, KvStore};
use tokio::net::TcpListener;

use crate::client::TOKEN_HEADER;
use crate::wire::KvPair;

/// One request as the mock agent saw it.
#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub key: String,
    pub recurse: bool,
    pub datacenter: Option<String>,
    pub token: Option<String>,
}

#[derive(Default)]
struct MockState {
    store: InMemoryKvStore,
    requests: Mutex<Vec<SeenRequest>>,
    failure: Mutex<Option<(u16, String)>>,
}

pub struct MockConsul {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockConsul {
    /// Bind an ephemeral port and serve until the runtime shuts down.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/v1/kv/*key", get(kv_handler))
            .with_state(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    pub fn store(&self) -> &InMemoryKvStore {
        &self.state.store
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Answer every later request with `status` and `body`.
    pub fn fail_with(&self, status: u16, body: &str) {
        *self.state.failure.lock().unwrap() = Some((status, body.to_string()));
    }
}

async fn kv_handler(
    State(state): State<Arc<MockState>>,
    Path(key): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let recurse = params.contains_key("recurse");
    let seen = SeenRequest {
        key: key.clone(),
        recurse,
        datacenter: params.get("dc").cloned(),
        token: headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    };
    state.requests.lock().unwrap().push(seen);

    let failure = state.failure.lock().unwrap().clone();
    if let Some((status, body)) = failure {
        let status = StatusCode::from_u16(status).unwrap();
        return (status, body).into_response();
    }

    let entries = if recurse {
        state.store.list(&key).await.unwrap()
    } else {
        state.store.get(&key).await.unwrap().into_iter().collect()
    };
    if entries.is_empty() {
        return StatusCode::NOT_FOUND.into_response();
    }
    let pairs: Vec<KvPair> = entries.iter().map(KvPair::from_entry).collect();
    Json(pairs).into_response()
}
