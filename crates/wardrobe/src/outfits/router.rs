use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ChosenOutfitSlot, Item, ItemId, OutfitHeader, OutfitId};
use super::service::{OutfitService, OutfitServiceError};
use super::store::{ItemStore, StoreError};

/// Optional knobs for a generation request.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    /// Seed for reproducible outfits; omitted means fresh randomness.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerateRequest {
    /// An empty body means defaults; anything else must be a valid request document.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub slots: Vec<ChosenOutfitSlot>,
}

#[derive(Debug, Deserialize)]
pub struct SaveOutfitRequest {
    #[serde(default)]
    pub header: Option<OutfitHeader>,
    pub slots: Vec<ChosenOutfitSlot>,
}

/// Router builder exposing the wardrobe catalog and outfit endpoints.
pub fn outfit_router<S>(service: Arc<OutfitService<S>>) -> Router
where
    S: ItemStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/items",
            get(list_items_handler::<S>).post(register_item_handler::<S>),
        )
        .route(
            "/api/v1/items/:item_id",
            put(update_item_handler::<S>).delete(delete_item_handler::<S>),
        )
        .route("/api/v1/outfits/generate", post(generate_handler::<S>))
        .route(
            "/api/v1/outfits",
            get(list_outfits_handler::<S>).post(save_outfit_handler::<S>),
        )
        .route("/api/v1/outfits/:outfit_id", get(outfit_handler::<S>))
        .with_state(service)
}

pub(crate) async fn generate_handler<S>(
    State(service): State<Arc<OutfitService<S>>>,
    body: Bytes,
) -> Response
where
    S: ItemStore + 'static,
{
    let request = match GenerateRequest::from_body(&body) {
        Ok(request) => request,
        Err(error) => {
            let payload = json!({
                "error": format!("invalid generate request: {error}"),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let result = match request.seed {
        Some(seed) => service.generate_with(&mut StdRng::seed_from_u64(seed)),
        None => service.generate(),
    };

    match result {
        Ok(slots) => (StatusCode::OK, axum::Json(GenerateResponse { slots })).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn save_outfit_handler<S>(
    State(service): State<Arc<OutfitService<S>>>,
    axum::Json(request): axum::Json<SaveOutfitRequest>,
) -> Response
where
    S: ItemStore + 'static,
{
    match service.save(request.header, request.slots) {
        Ok(saved) => (StatusCode::CREATED, axum::Json(saved)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn list_outfits_handler<S>(
    State(service): State<Arc<OutfitService<S>>>,
) -> Response
where
    S: ItemStore + 'static,
{
    match service.list() {
        Ok(outfits) => (StatusCode::OK, axum::Json(outfits)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn outfit_handler<S>(
    State(service): State<Arc<OutfitService<S>>>,
    Path(outfit_id): Path<String>,
) -> Response
where
    S: ItemStore + 'static,
{
    let id = OutfitId(outfit_id);
    match service.get(&id) {
        Ok(outfit) => (StatusCode::OK, axum::Json(outfit)).into_response(),
        Err(OutfitServiceError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "error": "outfit not found",
                "outfit_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn list_items_handler<S>(State(service): State<Arc<OutfitService<S>>>) -> Response
where
    S: ItemStore + 'static,
{
    match service.items() {
        Ok(items) => (StatusCode::OK, axum::Json(items)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn register_item_handler<S>(
    State(service): State<Arc<OutfitService<S>>>,
    axum::Json(item): axum::Json<Item>,
) -> Response
where
    S: ItemStore + 'static,
{
    match service.register_item(item) {
        Ok(item) => (StatusCode::CREATED, axum::Json(item)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn update_item_handler<S>(
    State(service): State<Arc<OutfitService<S>>>,
    Path(item_id): Path<String>,
    axum::Json(item): axum::Json<Item>,
) -> Response
where
    S: ItemStore + 'static,
{
    match service.update_item(&ItemId(item_id), item) {
        Ok(item) => (StatusCode::OK, axum::Json(item)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn delete_item_handler<S>(
    State(service): State<Arc<OutfitService<S>>>,
    Path(item_id): Path<String>,
) -> Response
where
    S: ItemStore + 'static,
{
    match service.delete_item(&ItemId(item_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => service_error_response(error),
    }
}

/// Status shared by the router and `AppError` for each service failure.
pub fn service_error_status(error: &OutfitServiceError) -> StatusCode {
    match error {
        OutfitServiceError::EmptyOutfit
        | OutfitServiceError::DuplicateRole(_)
        | OutfitServiceError::UnknownItem(_)
        | OutfitServiceError::RoleMismatch { .. }
        | OutfitServiceError::ItemIdMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        OutfitServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        OutfitServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        OutfitServiceError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn service_error_response(error: OutfitServiceError) -> Response {
    let status = service_error_status(&error);
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
