//! In-memory product store.
//!
//! Mirrors `FileStore` semantics minus the disk; used by tests that do
//! not care about persistence.

use std::sync::{Mutex, MutexGuard};

use super::errors::StoreResult;
use super::product::{Product, ProductDraft, ProductPatch};
use super::{next_id, ProductStore};

/// Product store held entirely in memory.
pub struct InMemoryStore {
    products: Mutex<Vec<Product>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create a store seeded with an initial collection.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryStore {
    fn read_all(&self) -> Vec<Product> {
        self.lock().clone()
    }

    fn create(&self, draft: ProductDraft) -> StoreResult<Product> {
        let mut products = self.lock();
        let product = Product {
            id: next_id(&products),
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
        };
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, id: i64, patch: ProductPatch) -> StoreResult<Option<Product>> {
        let mut products = self.lock();
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply(&mut products[index]);
        Ok(Some(products[index].clone()))
    }

    fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut products = self.lock();
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        products.remove(index);
        Ok(true)
    }

    fn get_by_id(&self, id: i64) -> Option<Product> {
        self.lock().iter().find(|p| p.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_fresh_ids() {
        let store = InMemoryStore::new();

        let a = store
            .create(ProductDraft {
                name: "A".to_string(),
                price: 1.0,
                quantity: 1,
            })
            .unwrap();
        let b = store
            .create(ProductDraft {
                name: "B".to_string(),
                price: 2.0,
                quantity: 2,
            })
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.read_all().len(), 2);
    }

    #[test]
    fn test_delete_unknown_id_does_not_mutate() {
        let store = InMemoryStore::with_products(vec![Product {
            id: 1,
            name: "A".to_string(),
            price: 1.0,
            quantity: 1,
        }]);

        assert!(!store.delete(99).unwrap());
        assert!(!store.delete(99).unwrap());
        assert_eq!(store.read_all().len(), 1);
    }
}
