use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Prefix the labels routes are mounted under.
pub const API_PREFIX: &str = "/api/v4";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateLabel {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateLabel {
    pub name: Option<String>,
    pub new_name: Option<String>,
    pub color: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub name: Option<String>,
}

/// Labels keyed by the decoded project id or path.
pub type Db = Arc<RwLock<HashMap<String, Vec<Label>>>>;

#[derive(Clone)]
pub struct AppState {
    token: Arc<str>,
    db: Db,
    next_id: Arc<AtomicU64>,
}

pub fn app(token: &str) -> Router {
    let state = AppState {
        token: Arc::from(token),
        db: Arc::new(RwLock::new(HashMap::new())),
        next_id: Arc::new(AtomicU64::new(1)),
    };
    let labels = Router::new()
        .route(
            "/projects/{id}/labels",
            get(list_labels).post(create_label).put(update_label).delete(delete_label),
        )
        .with_state(state);
    Router::new().nest(API_PREFIX, labels)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

fn authorize(headers: &HeaderMap, token: &str) -> Result<(), StatusCode> {
    match headers.get("private-token").and_then(|v| v.to_str().ok()) {
        Some(given) if given == token => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn list_labels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project): Path<String>,
) -> Result<Json<Vec<Label>>, StatusCode> {
    authorize(&headers, &state.token)?;
    let db = state.db.read().await;
    Ok(Json(db.get(&project).cloned().unwrap_or_default()))
}

async fn create_label(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project): Path<String>,
    Json(input): Json<CreateLabel>,
) -> Result<(StatusCode, Json<Label>), StatusCode> {
    authorize(&headers, &state.token)?;
    let (Some(name), Some(color)) = (input.name, input.color) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let mut db = state.db.write().await;
    let labels = db.entry(project.clone()).or_default();
    if labels.iter().any(|l| l.name == name) {
        return Err(StatusCode::CONFLICT);
    }
    let label = Label {
        id: state.next_id.fetch_add(1, Ordering::Relaxed),
        name,
        color,
        description: None,
    };
    labels.push(label.clone());
    tracing::info!(%project, name = %label.name, "label created");
    Ok((StatusCode::CREATED, Json(label)))
}

async fn update_label(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project): Path<String>,
    Json(input): Json<UpdateLabel>,
) -> Result<Json<Label>, StatusCode> {
    authorize(&headers, &state.token)?;
    let Some(name) = input.name else {
        return Err(StatusCode::BAD_REQUEST);
    };
    if input.new_name.is_none() && input.color.is_none() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut db = state.db.write().await;
    let labels = db.get_mut(&project).ok_or(StatusCode::NOT_FOUND)?;
    let index = labels.iter().position(|l| l.name == name).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(new_name) = &input.new_name {
        if new_name != &name && labels.iter().any(|l| &l.name == new_name) {
            return Err(StatusCode::CONFLICT);
        }
    }
    let label = &mut labels[index];
    if let Some(new_name) = input.new_name {
        label.name = new_name;
    }
    if let Some(color) = input.color {
        label.color = color;
    }
    tracing::info!(%project, %name, "label updated");
    Ok(Json(label.clone()))
}

async fn delete_label(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Label>, StatusCode> {
    authorize(&headers, &state.token)?;
    let name = params.name.ok_or(StatusCode::BAD_REQUEST)?;
    let mut db = state.db.write().await;
    let labels = db.get_mut(&project).ok_or(StatusCode::NOT_FOUND)?;
    let index = labels.iter().position(|l| l.name == name).ok_or(StatusCode::NOT_FOUND)?;
    let label = labels.remove(index);
    tracing::info!(%project, %name, "label deleted");
    Ok(Json(label))
}
