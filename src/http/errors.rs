//! # API Errors
//!
//! Request-level failures mapped to the uniform response envelope.
//! `Display` carries the user-facing message (responses are Spanish,
//! matching the served UI locale); write failures additionally carry a
//! diagnostic detail surfaced in the envelope's `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::ErrorResponse;

/// API request errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Create body is missing name, price or quantity (null and an
    /// empty name count as missing).
    #[error("Faltan datos requeridos. Se necesitan: name, price, quantity")]
    MissingFields,

    /// Create body has a wrong-typed field.
    #[error("Tipos de datos inválidos. name debe ser string, price y quantity deben ser números")]
    InvalidTypes,

    /// Create body has price <= 0 or quantity < 0.
    #[error("El precio debe ser mayor a 0 y la cantidad no puede ser negativa")]
    OutOfRange,

    /// Path identifier is not a whole number.
    #[error("El ID debe ser un número válido")]
    InvalidId,

    /// Update patch has a name that is not a non-empty string.
    #[error("El nombre debe ser una cadena de texto")]
    InvalidName,

    /// Update patch has a price that is not a number > 0.
    #[error("El precio debe ser un número mayor a 0")]
    InvalidPrice,

    /// Update patch has a quantity that is not an integer >= 0.
    #[error("La cantidad debe ser un número mayor o igual a 0")]
    InvalidQuantity,

    /// Update body supplies none of name/price/quantity.
    #[error("No se proporcionaron datos para actualizar")]
    EmptyPatch,

    /// No stored record matches the identifier.
    #[error("Producto no encontrado")]
    NotFound,

    #[error("Error al crear el producto")]
    CreateFailed { detail: String },

    #[error("Error al actualizar el producto")]
    UpdateFailed { detail: String },

    #[error("Error al eliminar el producto")]
    DeleteFailed { detail: String },

    /// Malformed request body or any other unexpected failure.
    #[error("Error interno del servidor")]
    Internal { detail: String },
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields
            | ApiError::InvalidTypes
            | ApiError::OutOfRange
            | ApiError::InvalidId
            | ApiError::InvalidName
            | ApiError::InvalidPrice
            | ApiError::InvalidQuantity
            | ApiError::EmptyPatch => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::CreateFailed { .. }
            | ApiError::UpdateFailed { .. }
            | ApiError::DeleteFailed { .. }
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Diagnostic detail for 500-level failures.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::CreateFailed { detail }
            | ApiError::UpdateFailed { detail }
            | ApiError::DeleteFailed { detail }
            | ApiError::Internal { detail } => Some(detail),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.to_string(), self.detail().map(String::from));
        (self.status_code(), Json(body)).into_response()
    }
}
