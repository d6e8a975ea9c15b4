//! Per-request rule sets. Property names are the wire-level identifiers the
//! API has always reported (`Name`, `UnitPrice`, ...), and every rule is
//! evaluated so a single response lists all failures.

use bigdecimal::BigDecimal;

use crate::mediator::validation::{FieldError, Validator};

use super::requests::{CreateProductCommand, DeleteProductCommand, GetProductByIdQuery};

pub struct CreateProductValidator;

impl Validator<CreateProductCommand> for CreateProductValidator {
    fn validate(&self, command: &CreateProductCommand) -> Vec<FieldError> {
        let mut failures = Vec::new();

        if command.name.trim().is_empty() {
            failures.push(FieldError::new("Name", "'Name' must not be empty."));
        }
        if command.description.trim().is_empty() {
            failures.push(FieldError::new(
                "Description",
                "'Description' must not be empty.",
            ));
        }
        if command.unit_price < BigDecimal::from(1) {
            failures.push(FieldError::new(
                "UnitPrice",
                "'Unit Price' must be greater than or equal to '1'.",
            ));
        }
        if command.quantity < 10 {
            failures.push(FieldError::new(
                "Quantity",
                "'Quantity' must be greater than or equal to '10'.",
            ));
        }

        failures
    }
}

pub struct DeleteProductValidator;

impl Validator<DeleteProductCommand> for DeleteProductValidator {
    fn validate(&self, command: &DeleteProductCommand) -> Vec<FieldError> {
        if command.id.is_nil() {
            vec![FieldError::new("Id", "'Id' must not be empty.")]
        } else {
            Vec::new()
        }
    }
}

pub struct GetProductByIdValidator;

impl Validator<GetProductByIdQuery> for GetProductByIdValidator {
    fn validate(&self, query: &GetProductByIdQuery) -> Vec<FieldError> {
        if query.id.is_nil() {
            vec![FieldError::new("Id", "'Id' must not be empty.")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn valid_command() -> CreateProductCommand {
        CreateProductCommand {
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            unit_price: BigDecimal::from(2),
            quantity: 10,
        }
    }

    fn failed_properties(failures: &[FieldError]) -> Vec<&str> {
        failures
            .iter()
            .map(|failure| failure.property_name.as_str())
            .collect()
    }

    #[test]
    fn should_accept_valid_create_command() {
        assert!(CreateProductValidator.validate(&valid_command()).is_empty());
    }

    #[test]
    fn should_reject_blank_name() {
        let mut command = valid_command();
        command.name = "   ".to_string();

        let failures = CreateProductValidator.validate(&command);

        assert_eq!(failed_properties(&failures), vec!["Name"]);
        assert_eq!(failures[0].error_message, "'Name' must not be empty.");
    }

    #[test]
    fn should_reject_empty_description() {
        let mut command = valid_command();
        command.description = String::new();

        let failures = CreateProductValidator.validate(&command);

        assert_eq!(failed_properties(&failures), vec!["Description"]);
    }

    #[test]
    fn should_reject_unit_price_below_one() {
        let mut command = valid_command();
        command.unit_price = BigDecimal::from(0);

        let failures = CreateProductValidator.validate(&command);

        assert_eq!(failed_properties(&failures), vec!["UnitPrice"]);
    }

    #[test]
    fn should_accept_unit_price_of_exactly_one() {
        let mut command = valid_command();
        command.unit_price = BigDecimal::from(1);

        assert!(CreateProductValidator.validate(&command).is_empty());
    }

    #[test]
    fn should_reject_quantity_below_ten() {
        let mut command = valid_command();
        command.quantity = 9;

        let failures = CreateProductValidator.validate(&command);

        assert_eq!(failed_properties(&failures), vec!["Quantity"]);
    }

    #[test]
    fn should_collect_every_failure_in_one_pass() {
        let command = CreateProductCommand {
            name: String::new(),
            description: String::new(),
            unit_price: BigDecimal::from(0),
            quantity: 0,
        };

        let failures = CreateProductValidator.validate(&command);

        assert_eq!(
            failed_properties(&failures),
            vec!["Name", "Description", "UnitPrice", "Quantity"]
        );
    }

    #[test]
    fn should_reject_nil_id_on_delete() {
        let failures = DeleteProductValidator.validate(&DeleteProductCommand { id: Uuid::nil() });

        assert_eq!(failed_properties(&failures), vec!["Id"]);
    }

    #[test]
    fn should_accept_non_nil_id_on_delete() {
        let command = DeleteProductCommand { id: Uuid::new_v4() };

        assert!(DeleteProductValidator.validate(&command).is_empty());
    }

    #[test]
    fn should_reject_nil_id_on_get_by_id() {
        let failures = GetProductByIdValidator.validate(&GetProductByIdQuery { id: Uuid::nil() });

        assert_eq!(failed_properties(&failures), vec!["Id"]);
    }

    #[test]
    fn should_accept_non_nil_id_on_get_by_id() {
        let query = GetProductByIdQuery { id: Uuid::new_v4() };

        assert!(GetProductByIdValidator.validate(&query).is_empty());
    }
}
