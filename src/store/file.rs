//! File-backed product store.
//!
//! The entire collection lives in a single pretty-printed JSON array.
//! Every operation re-reads the whole file; mutating operations write
//! the whole file back. A single writer lock serializes the
//! read-modify-write cycles so two in-process writers cannot lose each
//! other's updates. Reads take no lock.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::errors::{StoreError, StoreResult};
use super::product::{Product, ProductDraft, ProductPatch};
use super::{next_id, ProductStore};

/// Product store backed by a single JSON file.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store over the given file. The file does not need to
    /// exist; a missing file is an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means a previous writer panicked
        // mid-cycle; the file remains the source of truth.
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read and parse the collection. A missing file is a legitimately
    /// empty store, not an error.
    fn try_read(&self) -> StoreResult<Vec<Product>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Fail-soft read: an unreadable or corrupt file reads as an empty
    /// collection. Callers cannot distinguish "no data" from "could not
    /// read data"; the failure is only logged.
    fn read_products(&self) -> Vec<Product> {
        match self.try_read() {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("treating product store as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn write_products(&self, products: &[Product]) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(products).map_err(StoreError::Serialize)?;

        fs::write(&self.path, contents).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl ProductStore for FileStore {
    fn read_all(&self) -> Vec<Product> {
        self.read_products()
    }

    fn create(&self, draft: ProductDraft) -> StoreResult<Product> {
        let _guard = self.lock();

        let mut products = self.read_products();
        let product = Product {
            id: next_id(&products),
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
        };

        products.push(product.clone());
        self.write_products(&products)?;

        Ok(product)
    }

    fn update(&self, id: i64, patch: ProductPatch) -> StoreResult<Option<Product>> {
        let _guard = self.lock();

        let mut products = self.read_products();
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply(&mut products[index]);
        let updated = products[index].clone();
        self.write_products(&products)?;

        Ok(Some(updated))
    }

    fn delete(&self, id: i64) -> StoreResult<bool> {
        let _guard = self.lock();

        let mut products = self.read_products();
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        products.remove(index);
        self.write_products(&products)?;

        Ok(true)
    }

    fn get_by_id(&self, id: i64) -> Option<Product> {
        self.read_products().into_iter().find(|p| p.id == id)
    }
}
