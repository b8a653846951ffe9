//! Fake json-server collection served on a local socket.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};

use port_admin::core::config::PortStoreConfig;
use port_admin::features::ports::{
    routes as ports_routes, FormService, JsonServerClient, PortService, PortStore,
};

#[derive(Default)]
pub struct FakeDb {
    pub records: Vec<Value>,
    pub queries: Vec<String>,
    pub deletes: Vec<String>,
    pub omit_total: bool,
}

pub type SharedDb = Arc<Mutex<FakeDb>>;

async fn list(State(db): State<SharedDb>, RawQuery(query): RawQuery) -> impl IntoResponse {
    let mut db = db.lock().unwrap();
    db.queries.push(query.unwrap_or_default());

    let mut headers = HeaderMap::new();
    if !db.omit_total {
        headers.insert(
            "x-total-count",
            HeaderValue::from_str(&db.records.len().to_string()).unwrap(),
        );
    }
    (headers, Json(Value::Array(db.records.clone())))
}

async fn fetch(State(db): State<SharedDb>, Path(id): Path<String>) -> impl IntoResponse {
    let db = db.lock().unwrap();
    match db.records.iter().find(|r| r["id"] == json!(id)) {
        Some(record) => (StatusCode::OK, Json(record.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

async fn create(State(db): State<SharedDb>, Json(record): Json<Value>) -> impl IntoResponse {
    db.lock().unwrap().records.push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn replace(
    State(db): State<SharedDb>,
    Path(id): Path<String>,
    Json(record): Json<Value>,
) -> impl IntoResponse {
    let mut db = db.lock().unwrap();
    match db.records.iter_mut().find(|r| r["id"] == json!(id)) {
        Some(slot) => {
            *slot = record.clone();
            (StatusCode::OK, Json(record))
        }
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

async fn remove(State(db): State<SharedDb>, Path(id): Path<String>) -> impl IntoResponse {
    let mut db = db.lock().unwrap();
    db.deletes.push(id.clone());
    let before = db.records.len();
    db.records.retain(|r| r["id"] != json!(id));
    if db.records.len() == before {
        (StatusCode::NOT_FOUND, Json(json!({})))
    } else {
        (StatusCode::OK, Json(json!({})))
    }
}

/// Starts the fake store and returns its base URL
pub async fn spawn_fake_store(db: SharedDb) -> String {
    let app = Router::new()
        .route("/ports", get(list).post(create))
        .route("/ports/{id}", get(fetch).put(replace).delete(remove))
        .with_state(db);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn store_config(base_url: &str) -> PortStoreConfig {
    PortStoreConfig {
        base_url: base_url.to_string(),
        collection: "ports".to_string(),
        timeout: Duration::from_secs(5),
    }
}

/// Admin API wired to a fresh fake store seeded with `records`
pub async fn admin_server(records: Vec<Value>) -> (TestServer, SharedDb) {
    let db: SharedDb = Arc::new(Mutex::new(FakeDb {
        records,
        ..Default::default()
    }));
    let base_url = spawn_fake_store(db.clone()).await;

    let store: Arc<dyn PortStore> = Arc::new(JsonServerClient::new(&store_config(&base_url)).unwrap());
    let app = ports_routes::routes(
        Arc::new(PortService::new(store.clone())),
        Arc::new(FormService::new(store)),
    );

    (TestServer::new(app).unwrap(), db)
}

pub fn port_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "city": name,
        "country": "United Arab Emirates",
        "province": name,
        "timezone": "Asia/Dubai",
        "coordinates": [55.5136433, 25.4052165],
        "code": 52000,
        "alias": [],
        "regions": ["Middle East"],
        "unlocs": [id],
        "time": "2025-01-01T00:00:00.000Z"
    })
}
