//! In-process stand-in for the cattle API, served by axum on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use vacuno::api::{ApiClient, AuthClient, CattleClient, ReqwestTransport};
use vacuno::session::SessionContext;

type Shared = Arc<Mutex<Backend>>;

/// Backend state the handlers work on
#[derive(Default)]
pub struct Backend {
    /// (user record, password)
    pub users: Vec<(Value, String)>,
    /// token -> email
    pub tokens: HashMap<String, String>,
    pub cattle: Vec<Value>,
    /// Number of `GET /cattle` calls
    pub list_calls: usize,
    /// Bearer tokens seen on authenticated routes
    pub bearers: Vec<Option<String>>,
    pub health_records: Vec<Value>,
    pub weight_records: Vec<Value>,
}

impl Backend {
    pub fn with_user(mut self, nombre: &str, email: &str, password: &str) -> Self {
        let user = json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "nombre": nombre,
            "email": email,
            "rol": "field",
            "activo": true,
        });
        self.users.push((user, password.to_string()));
        self
    }

    pub fn with_animal(mut self, identificador: &str, nombre: &str, estado: &str, peso: Option<f64>) -> Self {
        self.cattle.push(json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "identificador": identificador,
            "nombre": nombre,
            "raza": "Holstein",
            "fecha_nacimiento": "2021-03-04",
            "sexo": "H",
            "estado": estado,
            "peso_actual": peso,
        }));
        self
    }

    fn authorize(&mut self, headers: &HeaderMap) -> Option<String> {
        let bearer = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string);
        self.bearers.push(bearer.clone());

        bearer.and_then(|token| self.tokens.get(&token).cloned())
    }
}

pub struct MockServer {
    pub base_url: String,
    state: Shared,
}

impl MockServer {
    pub async fn start(backend: Backend) -> Self {
        let state: Shared = Arc::new(Mutex::new(backend));

        let app = Router::new()
            .route("/health", get(health))
            .route("/auth/login", post(login))
            .route("/auth/register", post(register))
            .route("/auth/me", get(me))
            .route("/cattle", get(list_cattle).post(create_cattle))
            .route("/cattle/health-records", post(health_record))
            .route("/cattle/weight-records", post(weight_record))
            .route(
                "/cattle/:id",
                get(get_cattle).put(update_cattle).delete(delete_cattle),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.state.lock().unwrap()
    }

    /// Clients sharing one session, as a front end wires them
    pub fn clients(&self, session: SessionContext) -> (AuthClient, CattleClient) {
        let transport = ReqwestTransport::new(&self.base_url, Duration::from_secs(5)).unwrap();
        let api = ApiClient::new(Rc::new(transport), session);
        (AuthClient::new(api.clone()), CattleClient::new(api))
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn unauthorized() -> Response {
    detail(StatusCode::UNAUTHORIZED, "Could not validate credentials")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut backend = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();

    let known = backend
        .users
        .iter()
        .any(|(user, pw)| user["email"] == email.as_str() && pw == password);
    if !known {
        return detail(StatusCode::UNAUTHORIZED, "Incorrect email or password");
    }

    let token = format!("tok-{}", uuid::Uuid::new_v4());
    backend.tokens.insert(token.clone(), email);
    Json(json!({ "access_token": token, "token_type": "bearer" })).into_response()
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut backend = state.lock().unwrap();

    if body["rol"].as_str().is_none() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "loc": ["body", "rol"], "msg": "field required" }] })),
        )
            .into_response();
    }
    if backend.users.iter().any(|(user, _)| user["email"] == body["email"]) {
        return detail(StatusCode::BAD_REQUEST, "Email already registered");
    }

    let user = json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "nombre": body["nombre"],
        "email": body["email"],
        "rol": body["rol"],
        "activo": true,
    });
    let password = body["password"].as_str().unwrap_or_default().to_string();
    backend.users.push((user.clone(), password));
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut backend = state.lock().unwrap();
    let Some(email) = backend.authorize(&headers) else {
        return unauthorized();
    };

    match backend.users.iter().find(|(user, _)| user["email"] == email.as_str()) {
        Some((user, _)) => Json(user.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn list_cattle(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut backend = state.lock().unwrap();
    backend.list_calls += 1;
    if backend.authorize(&headers).is_none() {
        return unauthorized();
    }

    let cattle: Vec<Value> = backend
        .cattle
        .iter()
        .filter(|animal| match params.get("estado") {
            Some(estado) => animal["estado"] == estado.as_str(),
            None => true,
        })
        .cloned()
        .collect();
    Json(cattle).into_response()
}

async fn create_cattle(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if backend.authorize(&headers).is_none() {
        return unauthorized();
    }
    if backend
        .cattle
        .iter()
        .any(|animal| animal["identificador"] == body["identificador"])
    {
        return detail(
            StatusCode::BAD_REQUEST,
            "Cattle with this identificador already exists",
        );
    }

    body["id"] = json!(uuid::Uuid::new_v4().to_string());
    body["estado"] = json!("activa");
    backend.cattle.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn get_cattle(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if backend.authorize(&headers).is_none() {
        return unauthorized();
    }

    match backend.cattle.iter().find(|animal| animal["id"] == id.as_str()) {
        Some(animal) => Json(animal.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Cattle not found"),
    }
}

async fn update_cattle(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(changes): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if backend.authorize(&headers).is_none() {
        return unauthorized();
    }

    let Some(animal) = backend.cattle.iter_mut().find(|animal| animal["id"] == id.as_str()) else {
        return detail(StatusCode::NOT_FOUND, "Cattle not found");
    };
    if let Some(fields) = changes.as_object() {
        for (key, value) in fields {
            animal[key.as_str()] = value.clone();
        }
    }
    Json(animal.clone()).into_response()
}

async fn delete_cattle(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if backend.authorize(&headers).is_none() {
        return unauthorized();
    }

    let before = backend.cattle.len();
    backend.cattle.retain(|animal| animal["id"] != id.as_str());
    if backend.cattle.len() == before {
        return detail(StatusCode::NOT_FOUND, "Cattle not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn health_record(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if backend.authorize(&headers).is_none() {
        return unauthorized();
    }

    backend.health_records.push(body);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Health record created successfully" })),
    )
        .into_response()
}

async fn weight_record(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if backend.authorize(&headers).is_none() {
        return unauthorized();
    }

    backend.weight_records.push(body);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Weight record created successfully" })),
    )
        .into_response()
}
