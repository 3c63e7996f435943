//! Product endpoints.
//!
//! Route table:
//! - GET    /products      list all products
//! - POST   /products      create a product
//! - GET    /products/:id  fetch one product
//! - PUT    /products/:id  partial update
//! - DELETE /products/:id  remove a product
//! - GET    /api           static API description

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::store::ProductStore;

use super::errors::ApiError;
use super::response::{ErrorResponse, ListResponse, MutationResponse, RecordResponse};
use super::validate;

/// Shared handler state: the repository behind the endpoints.
pub type SharedStore = Arc<dyn ProductStore>;

/// Create the product routes
pub fn product_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(store)
}

/// GET /products - the full collection, never an error: an unreadable
/// store reads as empty.
async fn list_products(State(store): State<SharedStore>) -> Json<ListResponse> {
    Json(ListResponse::new(store.read_all()))
}

/// GET /products/:id
async fn get_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let id = validate::parse_id(&id)?;
    let product = store.get_by_id(id).ok_or(ApiError::NotFound)?;

    Ok(Json(RecordResponse::new(product)))
}

/// POST /products
async fn create_product(
    State(store): State<SharedStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let body = json_body(body)?;
    let draft = validate::validate_draft(&body)?;

    let product = store.create(draft).map_err(|e| {
        tracing::error!("create failed: {}", e);
        ApiError::CreateFailed {
            detail: e.to_string(),
        }
    })?;

    Ok((StatusCode::CREATED, Json(MutationResponse::created(product))).into_response())
}

/// PUT /products/:id - existence is checked before field validation,
/// so an unknown id answers 404 even with a bad body.
async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let id = validate::parse_id(&id)?;
    let body = json_body(body)?;

    if store.get_by_id(id).is_none() {
        return Err(ApiError::NotFound);
    }
    let patch = validate::validate_patch(&body)?;

    let updated = store
        .update(id, patch)
        .map_err(|e| {
            tracing::error!("update of product {} failed: {}", id, e);
            ApiError::UpdateFailed {
                detail: e.to_string(),
            }
        })?
        .ok_or_else(|| ApiError::UpdateFailed {
            detail: format!("product {} vanished between lookup and update", id),
        })?;

    Ok(Json(MutationResponse::updated(updated)))
}

/// DELETE /products/:id - answers with the record as it was before
/// removal.
async fn delete_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, ApiError> {
    let id = validate::parse_id(&id)?;
    let existing = store.get_by_id(id).ok_or(ApiError::NotFound)?;

    let deleted = store.delete(id).map_err(|e| {
        tracing::error!("delete of product {} failed: {}", id, e);
        ApiError::DeleteFailed {
            detail: e.to_string(),
        }
    })?;
    if !deleted {
        return Err(ApiError::DeleteFailed {
            detail: format!("product {} vanished between lookup and delete", id),
        });
    }

    Ok(Json(MutationResponse::deleted(existing)))
}

/// GET /api - static description of the exposed endpoints.
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "Sistema de Gestión de Inventarios - API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /products": "Obtener todos los productos",
            "GET /products/:id": "Obtener un producto específico",
            "POST /products": "Crear un nuevo producto",
            "PUT /products/:id": "Actualizar un producto",
            "DELETE /products/:id": "Eliminar un producto"
        }
    }))
}

/// Any unmatched route answers 404 inside the envelope rather than a
/// bare transport-level error.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Ruta no encontrada", None)),
    )
        .into_response()
}

/// A request without a JSON content-type carries no usable body and
/// counts as empty, so it falls through to the field validators; one
/// that declares JSON but fails to parse is an internal failure, shaped
/// into the envelope with the parser's diagnostic.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Null),
        Err(rejection) => Err(ApiError::Internal {
            detail: rejection.body_text(),
        }),
    }
}
