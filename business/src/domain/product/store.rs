use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreError;

use super::model::Product;

/// Keyed product collection. Absence is reported through `Option`/`bool`
/// return values, not errors; only faults of the store itself error.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a product under the id the caller supplied.
    async fn add(&self, product: Product) -> Result<(), StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;
    /// Returns every stored product. Iteration order is unspecified.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;
    /// Deletes if present and reports whether a removal occurred.
    async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;
}
