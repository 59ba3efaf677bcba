use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod models;

use models::*;
use tokengen::clipboard::{copy_token, CopyNotice, MemoryClipboard};
use tokengen::config::ServerConfig;
use tokengen::form::{self, FormUpdate, TokenConfig, TokenForm};
use tokengen::page;
use tokengen::TokenError;

pub struct AppState {
    form: Mutex<TokenForm>,
    clipboard: MemoryClipboard,
}

impl AppState {
    fn new(initial: TokenConfig) -> Result<Self, TokenError> {
        Ok(Self {
            form: Mutex::new(TokenForm::new(initial)?),
            clipboard: MemoryClipboard::new(),
        })
    }

    fn form(&self) -> Result<MutexGuard<'_, TokenForm>, AppError> {
        self.form
            .lock()
            .map_err(|_| AppError::Internal("form state lock poisoned".into()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tokengen=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!(?config, "starting tokengen");

    let state = AppState::new(config.initial)?;
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "listening");
    info!("GET   / - token generator page");
    info!("GET   /tokens - generate a batch from query parameters");
    info!("GET   /form - current form and batch");
    info!("PATCH /form - change the form and regenerate");
    info!("POST  /form/regenerate - new batch, same form");
    info!("POST  /copy - copy a token");
    info!("GET   /clipboard - last copied token");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/tokens", get(generate_tokens))
        .route("/form", get(get_form).patch(update_form))
        .route("/form/regenerate", post(regenerate_form))
        .route("/copy", post(copy))
        .route("/clipboard", get(get_clipboard))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let form = state.form()?;
    Ok(Html(page::render(form.config())))
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "tokengen".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn generate_tokens(
    query: Result<Query<TokenConfig>, QueryRejection>,
) -> Result<Json<TokensResponse>, AppError> {
    let Query(config) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let tokens = form::generate_batch(&config)?;
    Ok(Json(TokensResponse::new(config, tokens)))
}

async fn get_form(State(state): State<Arc<AppState>>) -> Result<Json<TokensResponse>, AppError> {
    let form = state.form()?;
    Ok(Json(TokensResponse::from(&*form)))
}

async fn update_form(
    State(state): State<Arc<AppState>>,
    Json(update): Json<FormUpdate>,
) -> Result<Json<TokensResponse>, AppError> {
    let mut form = state.form()?;
    form.apply(update)?;
    info!(config = ?form.config(), "form updated");
    Ok(Json(TokensResponse::from(&*form)))
}

async fn regenerate_form(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokensResponse>, AppError> {
    let mut form = state.form()?;
    form.regenerate()?;
    Ok(Json(TokensResponse::from(&*form)))
}

async fn copy(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CopyRequest>,
) -> Json<CopyNotice> {
    Json(copy_token(&state.clipboard, &payload.token))
}

async fn get_clipboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClipboardResponse>, AppError> {
    let contents = state
        .clipboard
        .contents()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match contents {
        Some(contents) => Ok(Json(ClipboardResponse { contents })),
        None => Err(AppError::NotFound("nothing has been copied".into())),
    }
}

#[derive(Debug)]
pub enum AppError {
    Internal(String),
    NotFound(String),
    BadRequest(String),
    Unprocessable(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        if err.is_insufficient_entropy() {
            AppError::Unprocessable(err.to_string())
        } else {
            AppError::BadRequest(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = Json(serde_json::json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
