use crate::domain::errors::StoreError;

use super::validation::FieldError;

/// Dispatch errors surfaced by `Mediator::send`.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("dispatch.validation_failed")]
    Validation(Vec<FieldError>),
    #[error("dispatch.handler_missing")]
    HandlerMissing(&'static str),
    #[error("store.persistence")]
    Store(#[from] StoreError),
}
