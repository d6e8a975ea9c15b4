use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::DispatchError;
use super::request::Request;

/// A single failed rule, addressed by the wire-level property name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub property_name: String,
    pub error_message: String,
}

impl FieldError {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }
}

/// Rule set for one request type. Evaluates every rule and collects all
/// failures rather than stopping at the first.
pub trait Validator<R>: Send + Sync {
    fn validate(&self, request: &R) -> Vec<FieldError>;
}

/// The single pipeline stage in front of the handlers. Requests with no
/// registered validator pass through untouched; a non-empty failure list
/// short-circuits the dispatch before the handler runs.
#[derive(Default)]
pub struct ValidationStep {
    validators: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ValidationStep {
    pub fn register<R: Request>(&mut self, validator: Arc<dyn Validator<R>>) {
        self.validators.insert(TypeId::of::<R>(), Box::new(validator));
    }

    pub fn check<R: Request>(&self, request: &R) -> Result<(), DispatchError> {
        let Some(validator) = self
            .validators
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn Validator<R>>>())
        else {
            return Ok(());
        };

        let failures = validator.validate(request);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Validation(failures))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping {
        ok: bool,
    }

    impl Request for Ping {
        type Response = ();
    }

    struct PingValidator;

    impl Validator<Ping> for PingValidator {
        fn validate(&self, request: &Ping) -> Vec<FieldError> {
            if request.ok {
                Vec::new()
            } else {
                vec![FieldError::new("Ok", "'Ok' must be true.")]
            }
        }
    }

    #[test]
    fn should_pass_when_no_validator_is_registered() {
        let step = ValidationStep::default();
        assert!(step.check(&Ping { ok: false }).is_ok());
    }

    #[test]
    fn should_pass_when_validator_reports_no_failures() {
        let mut step = ValidationStep::default();
        step.register::<Ping>(Arc::new(PingValidator));
        assert!(step.check(&Ping { ok: true }).is_ok());
    }

    #[test]
    fn should_short_circuit_with_collected_failures() {
        let mut step = ValidationStep::default();
        step.register::<Ping>(Arc::new(PingValidator));

        let result = step.check(&Ping { ok: false });

        match result {
            Err(DispatchError::Validation(failures)) => {
                assert_eq!(failures, vec![FieldError::new("Ok", "'Ok' must be true.")]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
