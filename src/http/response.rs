//! # Response Envelope
//!
//! Every endpoint answers with the same `{success, ...}` envelope
//! shape; these are its concrete variants.

use serde::Serialize;

use crate::store::Product;

/// Full-collection response for GET /products.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub count: usize,
}

impl ListResponse {
    pub fn new(data: Vec<Product>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count,
        }
    }
}

/// Single-record response for GET /products/:id.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub success: bool,
    pub data: Product,
}

impl RecordResponse {
    pub fn new(data: Product) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Mutation confirmation: a message plus the affected record. Delete
/// carries the record as it was before removal.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    pub data: Product,
}

impl MutationResponse {
    pub fn created(data: Product) -> Self {
        Self::new("Producto creado exitosamente", data)
    }

    pub fn updated(data: Product) -> Self {
        Self::new("Producto actualizado exitosamente", data)
    }

    pub fn deleted(data: Product) -> Self {
        Self::new("Producto eliminado exitosamente", data)
    }

    fn new(message: &str, data: Product) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

/// Failure envelope; `error` carries diagnostic detail when present.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            price: 10.5,
            quantity: 3,
        }
    }

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec![widget()]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["name"], "Widget");
    }

    #[test]
    fn test_mutation_response_serialization() {
        let response = MutationResponse::created(widget());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Producto creado exitosamente");
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn test_error_response_omits_absent_detail() {
        let response = ErrorResponse::new("Producto no encontrado", None);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Producto no encontrado");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_response_keeps_detail() {
        let response = ErrorResponse::new("Error al crear el producto", Some("disk full".to_string()));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "disk full");
    }
}
