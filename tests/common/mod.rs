//! In-process mock of the authentication/establishment service.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

#[derive(Clone, Debug)]
pub struct MockUser {
    pub password: String,
    pub nome: String,
    pub token: String,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub users: HashMap<String, MockUser>,
    pub establishments: Vec<Value>,
    /// When set, renames fail with this status and optional detail.
    pub rename_failure: Option<(StatusCode, Option<String>)>,
    /// Every request as "METHOD path".
    pub hits: Vec<String>,
}

pub struct MockServer {
    pub base_url: String,
    pub state: Arc<Mutex<MockState>>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}

impl MockServer {
    pub fn hits(&self) -> Vec<String> {
        self.state.lock().unwrap().hits.clone()
    }

    pub fn fail_renames(&self, status: StatusCode, detail: Option<&str>) {
        self.state.lock().unwrap().rename_failure = Some((status, detail.map(str::to_string)));
    }

    pub fn names(&self) -> Vec<(String, String)> {
        self.state
            .lock()
            .unwrap()
            .establishments
            .iter()
            .map(|e| {
                (
                    e["id"].as_str().unwrap_or_default().to_string(),
                    e["nome"].as_str().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }
}

pub fn default_state() -> MockState {
    let mut users = HashMap::new();
    users.insert(
        "ana".to_string(),
        MockUser {
            password: "123".to_string(),
            nome: "Ana".to_string(),
            token: "T1".to_string(),
        },
    );
    MockState {
        users,
        establishments: vec![
            json!({"id": "neopdv1", "nome": "NeoPDV 1", "descricao": "Primeiro estabelecimento", "url": "https://neopdv1.vercel.app/"}),
            json!({"id": "neopdv2", "nome": "NeoPDV 2", "descricao": null, "url": "https://neopdv2.vercel.app/"}),
            json!({"id": "centro", "nome": "Loja Centro Antiga", "url": "https://centro.example/"}),
        ],
        rename_failure: None,
        hits: Vec::new(),
    }
}

pub fn spawn_mock() -> Result<MockServer> {
    spawn_mock_with(default_state())
}

pub fn spawn_mock_with(initial: MockState) -> Result<MockServer> {
    let state = Arc::new(Mutex::new(initial));
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/estabelecimentos", get(list_establishments))
        .route("/estabelecimentos/:id", put(rename_establishment))
        .route("/users/:username", put(update_user))
        .with_state(state.clone());

    let (addr_tx, addr_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let thread = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                let _ = addr_tx.send(Err(anyhow::anyhow!(err)));
                return;
            }
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(err) => {
                    let _ = addr_tx.send(Err(anyhow::anyhow!(err)));
                    return;
                }
            };
            let _ = addr_tx.send(listener.local_addr().map_err(anyhow::Error::from));
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
    });

    let addr = addr_rx
        .recv()
        .context("mock server thread exited")?
        .context("bind mock server")?;

    Ok(MockServer {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

type Shared = Arc<Mutex<MockState>>;

fn detail(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "detail": msg }))).into_response()
}

fn bearer_user(st: &MockState, headers: &HeaderMap) -> Option<String> {
    let auth = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;
    st.users
        .iter()
        .find(|(_, u)| u.token == token)
        .map(|(name, _)| name.clone())
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    st.hits.push("POST /auth/login".to_string());
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    match st.users.get(username) {
        Some(u) if u.password == password => {
            Json(json!({ "access_token": u.token, "usuario": u.nome })).into_response()
        }
        _ => detail(StatusCode::UNAUTHORIZED, "Usuário ou senha inválidos"),
    }
}

async fn list_establishments(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = state.lock().unwrap();
    st.hits.push("GET /estabelecimentos".to_string());
    if bearer_user(&st, &headers).is_none() {
        return detail(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    Json(Value::Array(st.establishments.clone())).into_response()
}

async fn rename_establishment(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    st.hits.push(format!("PUT /estabelecimentos/{}", id));
    if bearer_user(&st, &headers).is_none() {
        return detail(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    if let Some((status, msg)) = st.rename_failure.clone() {
        return match msg {
            Some(m) => detail(status, &m),
            None => (status, "internal error").into_response(),
        };
    }
    let Some(nome) = body["nome"].as_str().map(str::to_string) else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "nome obrigatório");
    };
    match st.establishments.iter_mut().find(|e| e["id"] == id.as_str()) {
        Some(e) => {
            e["nome"] = Value::String(nome);
            Json(e.clone()).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Estabelecimento não encontrado"),
    }
}

async fn update_user(
    State(state): State<Shared>,
    Path(username): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    st.hits.push(format!("PUT /users/{}", username));
    let Some(user) = st.users.get_mut(&username) else {
        return detail(StatusCode::NOT_FOUND, "Usuário não encontrado");
    };
    if let Some(pw) = body.get("password").and_then(|v| v.as_str()) {
        if pw.len() < 3 {
            return detail(StatusCode::BAD_REQUEST, "Senha muito curta");
        }
        user.password = pw.to_string();
    }
    if let Some(nome) = body.get("nome").and_then(|v| v.as_str()) {
        user.nome = nome.to_string();
    }
    Json(json!({ "nome": user.nome })).into_response()
}
