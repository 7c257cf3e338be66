//! HTTP surface: the route table, handlers and server entry point.
//!
//! Every dashboard slice gets one GET route serving fixture data with a
//! shared Cache-Control header. The settings routes read and write the
//! JSON-file store through the app state's mutex; failures are translated
//! into `{ "error": <message> }` bodies and never propagate further.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, StoreError};
use crate::mock;
use crate::models::{FieldCheckRequest, FieldCheckResponse};
use crate::resource::{DASHBOARD_RESOURCES, ResourceKey};
use crate::store::SettingsStore;
use crate::validator::validate_field;

const CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=30";
const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;
// The framework body cap sits above the avatar limit so oversized uploads
// reach the handler and get the contractual 400 message.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub struct AppState {
    settings: Mutex<SettingsStore>,
    uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: SettingsStore, uploads_dir: impl Into<PathBuf>) -> Self {
        AppState {
            settings: Mutex::new(settings),
            uploads_dir: uploads_dir.into(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let uploads_dir = state.uploads_dir.clone();
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/api/cards", get(get_cards))
        .route("/api/transactions", get(get_transactions))
        .route("/api/weekly-activity", get(get_weekly_activity))
        .route("/api/expense-statistics", get(get_expense_statistics))
        .route("/api/quick-transfer-users", get(get_quick_transfer_users))
        .route("/api/balance-history", get(get_balance_history))
        .route(
            "/api/settings",
            get(get_settings).post(update_settings).put(check_field),
        )
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Seed the settings store, build the router and serve it.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::new(config.settings_path());
    store.ensure_seeded()?;
    fs::create_dir_all(&config.uploads_dir)?;

    let state = Arc::new(AppState::new(store, config.uploads_dir.clone()));
    let app = router(state);

    let listener = TcpListener::bind(&config.addr).await?;
    log::info!("listening on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn service_info() -> Json<serde_json::Value> {
    let mut endpoints: Vec<String> = DASHBOARD_RESOURCES.iter().map(|key| key.path()).collect();
    endpoints.push(ResourceKey::Settings.path());
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints,
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Success body plus the shared Cache-Control header.
fn cached_json<T: Serialize>(body: T) -> Response {
    ([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(body)).into_response()
}

fn slice_response(key: ResourceKey) -> Response {
    match mock::dashboard_slice(key) {
        Some(body) => cached_json(body),
        None => ApiError::internal(format!("no fixture backs {}", key)).into_response(),
    }
}

async fn get_cards() -> Response {
    slice_response(ResourceKey::Cards)
}

async fn get_transactions() -> Response {
    slice_response(ResourceKey::Transactions)
}

async fn get_weekly_activity() -> Response {
    slice_response(ResourceKey::WeeklyActivity)
}

async fn get_expense_statistics() -> Response {
    slice_response(ResourceKey::ExpenseStatistics)
}

async fn get_quick_transfer_users() -> Response {
    slice_response(ResourceKey::QuickTransferUsers)
}

async fn get_balance_history() -> Response {
    slice_response(ResourceKey::BalanceHistory)
}

/// Map store failures for the settings routes. The "not found" text match
/// applies to settings only; every other failure is a 500.
fn translate_store_error(err: StoreError) -> ApiError {
    let message = err.to_string();
    if message.to_lowercase().contains("not found") {
        ApiError::not_found("Settings data source not found")
    } else {
        ApiError::internal(message)
    }
}

async fn get_settings(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let profile = state
        .settings
        .lock()
        .unwrap()
        .load()
        .map_err(translate_store_error)?;
    Ok(cached_json(profile))
}

/// Multipart settings update: text parts overwrite matching profile fields
/// verbatim (field rules are the PUT route's job); an optional `avatar`
/// file part is checked for MIME type and size, stored under a generated
/// name and served from `/uploads/`.
async fn update_settings(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut fields: Vec<(String, String)> = Vec::new();
    let mut avatar: Option<(&'static str, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "avatar" && field.file_name().is_some() {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let extension = match content_type.as_str() {
                "image/jpeg" => "jpg",
                "image/png" => "png",
                "image/gif" => "gif",
                other => {
                    return Err(ApiError::bad_request(format!(
                        "Invalid file type: {}. Only JPEG, PNG and GIF images are allowed.",
                        other
                    )));
                }
            };
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ApiError::bad_request(err.to_string()))?;
            if bytes.len() > MAX_AVATAR_BYTES {
                return Err(ApiError::bad_request("File too large. Maximum size is 5MB."));
            }
            avatar = Some((extension, bytes.to_vec()));
        } else {
            let value = field
                .text()
                .await
                .map_err(|err| ApiError::bad_request(err.to_string()))?;
            fields.push((name, value));
        }
    }

    let settings = state.settings.lock().unwrap();
    let mut profile = settings.load().map_err(translate_store_error)?;

    for (name, value) in fields {
        if !profile.set_field(&name, value) {
            log::warn!("ignoring unknown settings field '{}'", name);
        }
    }

    if let Some((extension, bytes)) = avatar {
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        fs::create_dir_all(&state.uploads_dir)
            .map_err(|err| ApiError::internal(err.to_string()))?;
        fs::write(state.uploads_dir.join(&filename), &bytes)
            .map_err(|err| ApiError::internal(err.to_string()))?;
        profile.avatar = format!("/uploads/{}", filename);
    }

    settings.save(&profile).map_err(translate_store_error)?;
    Ok(Json(profile).into_response())
}

/// Single-field validation echo: `{ field, value }` in,
/// `{ isValid, error?, field }` out, always 200.
async fn check_field(Json(request): Json<FieldCheckRequest>) -> Json<FieldCheckResponse> {
    let message = validate_field(&request.field, &request.value);
    let is_valid = message.is_empty();
    Json(FieldCheckResponse {
        is_valid,
        error: (!is_valid).then_some(message),
        field: request.field,
    })
}
