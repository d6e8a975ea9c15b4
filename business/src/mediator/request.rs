use async_trait::async_trait;

use super::errors::DispatchError;

/// A dispatchable request. The associated type ties each request shape to
/// the single response shape its handler produces.
pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> Result<R::Response, DispatchError>;
}
