use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use super::errors::DispatchError;
use super::request::{Request, RequestHandler};
use super::validation::{ValidationStep, Validator};

/// Routes each request type to its single registered handler, running the
/// validation step first. The registry is assembled once at startup through
/// [`MediatorBuilder`] and is immutable for the process lifetime.
pub struct Mediator {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    validation: ValidationStep,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, DispatchError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .ok_or(DispatchError::HandlerMissing(type_name::<R>()))?;

        self.validation.check(&request)?;

        handler.handle(request).await
    }
}

#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    validation: ValidationStep,
}

impl MediatorBuilder {
    pub fn handler<R: Request>(mut self, handler: Arc<dyn RequestHandler<R>>) -> Self {
        self.handlers.insert(TypeId::of::<R>(), Box::new(handler));
        self
    }

    pub fn validator<R: Request>(mut self, validator: Arc<dyn Validator<R>>) -> Self {
        self.validation.register::<R>(validator);
        self
    }

    pub fn build(self) -> Mediator {
        Mediator {
            handlers: self.handlers,
            validation: self.validation,
        }
    }
}
