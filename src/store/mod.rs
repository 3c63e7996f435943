//! # Product Store
//!
//! File-backed repository for the product collection. The whole
//! collection is one JSON array; every operation re-reads it from disk,
//! applies its change, and writes it back. The `ProductStore` trait is
//! the seam that lets the HTTP layer run against either the on-disk
//! store or an in-memory one.

pub mod errors;
pub mod file;
pub mod memory;
pub mod product;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use product::{Product, ProductDraft, ProductPatch};

/// Repository surface for the product collection.
pub trait ProductStore: Send + Sync {
    /// All products currently alive.
    ///
    /// Fails soft: an unreadable or corrupt store reads as an empty
    /// collection and is logged, never surfaced to the caller.
    fn read_all(&self) -> Vec<Product>;

    /// Append a new product with a fresh unique id.
    fn create(&self, draft: ProductDraft) -> StoreResult<Product>;

    /// Merge `patch` over the record with the given id. Absent fields
    /// are preserved; the id itself never changes. `Ok(None)` when no
    /// record matches.
    fn update(&self, id: i64, patch: ProductPatch) -> StoreResult<Option<Product>>;

    /// Remove the record with the given id. `Ok(true)` iff a record was
    /// removed; a missing id performs no write.
    fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Linear scan for an exact id match.
    fn get_by_id(&self, id: i64) -> Option<Product>;
}

/// Fresh id for a new record: one past the highest id currently in the
/// collection. Saturates at the i64 ceiling rather than overflowing on
/// a hand-edited store file.
pub(crate) fn next_id(products: &[Product]) -> i64 {
    products
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}
