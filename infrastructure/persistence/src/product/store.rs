use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::StoreError;
use business::domain::product::model::Product;
use business::domain::product::store::ProductStore;

/// In-memory store adapter. Reads share the lock; `add`/`remove` take it
/// exclusively. Contents are lost on process restart.
pub struct InMemoryProductStore {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn add(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products.write().map_err(|_| StoreError::Poisoned)?;
        if products.contains_key(&product.id) {
            return Err(StoreError::Duplicated);
        }
        products.insert(product.id, product);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(products.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(products.values().cloned().collect())
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut products = self.products.write().map_err(|_| StoreError::Poisoned)?;
        Ok(products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn product(name: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: format!("{name} description"),
            unit_price: BigDecimal::from(2),
            quantity: 10,
        }
    }

    #[tokio::test]
    async fn should_add_and_find_product_by_id() {
        let store = InMemoryProductStore::new();
        let pen = product("Pen");

        store.add(pen.clone()).await.unwrap();

        let found = store.find_by_id(pen.id).await.unwrap();
        assert_eq!(found, Some(pen));
    }

    #[tokio::test]
    async fn should_reject_duplicate_id() {
        let store = InMemoryProductStore::new();
        let pen = product("Pen");

        store.add(pen.clone()).await.unwrap();
        let result = store.add(pen).await;

        assert_eq!(result, Err(StoreError::Duplicated));
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let store = InMemoryProductStore::new();

        let found = store.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn should_list_exactly_the_stored_products() {
        let store = InMemoryProductStore::new();
        let pen = product("Pen");
        let notebook = product("Notebook");
        store.add(pen.clone()).await.unwrap();
        store.add(notebook.clone()).await.unwrap();

        let mut names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|product| product.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["Notebook".to_string(), "Pen".to_string()]);
    }

    #[tokio::test]
    async fn should_report_whether_a_removal_occurred() {
        let store = InMemoryProductStore::new();
        let pen = product("Pen");
        store.add(pen.clone()).await.unwrap();

        assert!(store.remove(pen.id).await.unwrap());
        assert!(!store.remove(pen.id).await.unwrap());
        assert!(store.find_by_id(pen.id).await.unwrap().is_none());
    }
}
