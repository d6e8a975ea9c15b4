use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::mapper;
use crate::application::product::requests::GetAllProductsQuery;
use crate::application::product::responses::ProductListItem;
use crate::domain::logger::Logger;
use crate::domain::product::store::ProductStore;
use crate::mediator::errors::DispatchError;
use crate::mediator::request::RequestHandler;

pub struct GetAllProductsHandler {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestHandler<GetAllProductsQuery> for GetAllProductsHandler {
    async fn handle(
        &self,
        _query: GetAllProductsQuery,
    ) -> Result<Vec<ProductListItem>, DispatchError> {
        self.logger.info("Fetching all products");

        let products = self.store.find_all().await?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products.iter().map(mapper::list_item).collect())
    }
}
