use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::store::InMemoryProductStore;

use business::application::product::handlers::create::CreateProductHandler;
use business::application::product::handlers::delete::DeleteProductHandler;
use business::application::product::handlers::get_all::GetAllProductsHandler;
use business::application::product::handlers::get_by_id::GetProductByIdHandler;
use business::application::product::requests::{
    CreateProductCommand, DeleteProductCommand, GetAllProductsQuery, GetProductByIdQuery,
};
use business::application::product::validators::{
    CreateProductValidator, DeleteProductValidator, GetProductByIdValidator,
};
use business::mediator::dispatcher::Mediator;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Builds the request-type registry once. `GetAllProductsQuery` carries
    /// no validator; the validation step passes it straight through.
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let store = Arc::new(InMemoryProductStore::new());

        let mediator = Arc::new(
            Mediator::builder()
                .handler::<CreateProductCommand>(Arc::new(CreateProductHandler {
                    store: store.clone(),
                    logger: logger.clone(),
                }))
                .validator::<CreateProductCommand>(Arc::new(CreateProductValidator))
                .handler::<DeleteProductCommand>(Arc::new(DeleteProductHandler {
                    store: store.clone(),
                    logger: logger.clone(),
                }))
                .validator::<DeleteProductCommand>(Arc::new(DeleteProductValidator))
                .handler::<GetProductByIdQuery>(Arc::new(GetProductByIdHandler {
                    store: store.clone(),
                    logger: logger.clone(),
                }))
                .validator::<GetProductByIdQuery>(Arc::new(GetProductByIdValidator))
                .handler::<GetAllProductsQuery>(Arc::new(GetAllProductsHandler {
                    store,
                    logger,
                }))
                .build(),
        );

        Self {
            health_api: crate::api::health::routes::Api::new(),
            product_api: crate::api::product::routes::ProductApi::new(mediator),
        }
    }
}
