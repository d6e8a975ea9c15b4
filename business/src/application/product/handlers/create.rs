use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::product::mapper;
use crate::application::product::requests::CreateProductCommand;
use crate::application::product::responses::CreateProductResponse;
use crate::domain::logger::Logger;
use crate::domain::product::store::ProductStore;
use crate::mediator::errors::DispatchError;
use crate::mediator::request::RequestHandler;

pub struct CreateProductHandler {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestHandler<CreateProductCommand> for CreateProductHandler {
    async fn handle(
        &self,
        command: CreateProductCommand,
    ) -> Result<CreateProductResponse, DispatchError> {
        self.logger
            .info(&format!("Creating product: {}", command.name));

        let mut product = mapper::product_from_command(&command);
        product.id = Uuid::new_v4();

        self.store.add(product.clone()).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(mapper::create_response(&product))
    }
}
