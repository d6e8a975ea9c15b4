use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::requests::DeleteProductCommand;
use crate::application::product::responses::DeleteProductResponse;
use crate::domain::logger::Logger;
use crate::domain::product::store::ProductStore;
use crate::mediator::errors::DispatchError;
use crate::mediator::request::RequestHandler;

pub struct DeleteProductHandler {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestHandler<DeleteProductCommand> for DeleteProductHandler {
    async fn handle(
        &self,
        command: DeleteProductCommand,
    ) -> Result<DeleteProductResponse, DispatchError> {
        self.logger
            .info(&format!("Deleting product: {}", command.id));

        // Absence is a normal negative result, not an error.
        let deleted = self.store.remove(command.id).await?;
        if deleted {
            self.logger
                .info(&format!("Product deleted: {}", command.id));
        } else {
            self.logger
                .warn(&format!("No product found for id: {}", command.id));
        }

        Ok(DeleteProductResponse { deleted })
    }
}
