use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::mapper;
use crate::application::product::requests::GetProductByIdQuery;
use crate::application::product::responses::ProductDetails;
use crate::domain::logger::Logger;
use crate::domain::product::store::ProductStore;
use crate::mediator::errors::DispatchError;
use crate::mediator::request::RequestHandler;

pub struct GetProductByIdHandler {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestHandler<GetProductByIdQuery> for GetProductByIdHandler {
    async fn handle(
        &self,
        query: GetProductByIdQuery,
    ) -> Result<Option<ProductDetails>, DispatchError> {
        self.logger
            .info(&format!("Fetching product by id: {}", query.id));

        let product = self.store.find_by_id(query.id).await?;
        if product.is_none() {
            self.logger
                .warn(&format!("No product found for id: {}", query.id));
        }

        Ok(product.map(|product| mapper::details(&product)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;
    use crate::domain::product::model::Product;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Store {}

        #[async_trait]
        impl ProductStore for Store {
            async fn add(&self, product: Product) -> Result<(), StoreError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;
            async fn find_all(&self) -> Result<Vec<Product>, StoreError>;
            async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_details_with_total_price_when_product_exists() {
        let product_id = Uuid::new_v4();
        let mut mock_store = MockStore::new();
        mock_store
            .expect_find_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |_| {
                Ok(Some(Product {
                    id: product_id,
                    name: "Pen".to_string(),
                    description: "Blue ink".to_string(),
                    unit_price: BigDecimal::from(2),
                    quantity: 10,
                }))
            });

        let handler = GetProductByIdHandler {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let details = handler
            .handle(GetProductByIdQuery { id: product_id })
            .await
            .unwrap()
            .expect("product should be present");

        assert_eq!(details.id, product_id);
        assert_eq!(details.total_price, BigDecimal::from(20));
    }

    #[tokio::test]
    async fn should_return_none_when_product_is_absent() {
        let mut mock_store = MockStore::new();
        mock_store.expect_find_by_id().returning(|_| Ok(None));

        let handler = GetProductByIdHandler {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = handler
            .handle(GetProductByIdQuery { id: Uuid::new_v4() })
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
