//! Fake cart backend served by axum on an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

/// A request as the backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct BackendState {
    inventory: Vec<Value>,
    cart: Vec<Value>,
    requests: Vec<Recorded>,
    fail_next: Option<StatusCode>,
}

type Shared = Arc<Mutex<BackendState>>;

#[derive(Clone)]
pub struct FakeBackend {
    state: Shared,
    pub base_url: String,
}

impl FakeBackend {
    /// Bind to port 0 and serve the given inventory and cart.
    pub async fn start(inventory: Value, cart: Value) -> Self {
        let state: Shared = Arc::new(Mutex::new(BackendState {
            inventory: as_list(inventory),
            cart: as_list(cart),
            ..Default::default()
        }));

        let app = Router::new()
            .route("/inventory", get(get_inventory))
            .route("/cart", get(get_cart).post(create_line).delete(clear_cart))
            .route("/cart/:id", put(update_line).delete(delete_line))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn cart(&self) -> Vec<Value> {
        self.state.lock().unwrap().cart.clone()
    }

    /// Answer the next request with `status` and no side effects.
    pub fn fail_next(&self, status: StatusCode) {
        self.state.lock().unwrap().fail_next = Some(status);
    }
}

fn as_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Record the request; returns an error response if a failure was injected.
fn record(
    state: &mut BackendState,
    method: &'static str,
    path: String,
    body: Option<Value>,
) -> Option<Response> {
    state.requests.push(Recorded { method, path, body });
    state
        .fail_next
        .take()
        .map(|status| (status, Json(json!({ "error": "injected" }))).into_response())
}

async fn get_inventory(State(state): State<Shared>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = record(&mut state, "GET", "/inventory".into(), None) {
        return failure;
    }
    Json(Value::Array(state.inventory.clone())).into_response()
}

async fn get_cart(State(state): State<Shared>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = record(&mut state, "GET", "/cart".into(), None) {
        return failure;
    }
    Json(Value::Array(state.cart.clone())).into_response()
}

async fn create_line(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = record(&mut state, "POST", "/cart".into(), Some(body.clone())) {
        return failure;
    }
    state.cart.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_line(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    let path = format!("/cart/{id}");
    if let Some(failure) = record(&mut state, "PUT", path, Some(body.clone())) {
        return failure;
    }
    // PUT replaces the stored line with the request body, keeping only its id
    match state.cart.iter_mut().find(|line| id_text(&line["id"]) == id) {
        Some(line) => {
            let mut replaced = body;
            replaced["id"] = line["id"].clone();
            *line = replaced.clone();
            Json(replaced).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_line(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = record(&mut state, "DELETE", format!("/cart/{id}"), None) {
        return failure;
    }
    let before = state.cart.len();
    state.cart.retain(|line| id_text(&line["id"]) != id);
    if state.cart.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({})).into_response()
}

async fn clear_cart(State(state): State<Shared>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = record(&mut state, "DELETE", "/cart".into(), None) {
        return failure;
    }
    state.cart.clear();
    StatusCode::NO_CONTENT.into_response()
}
