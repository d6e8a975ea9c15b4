//! Hand-written field-copy projections between the product entity and the
//! request/response shapes. Pure and total: no validation, no failure modes.

use uuid::Uuid;

use crate::domain::product::model::Product;

use super::requests::CreateProductCommand;
use super::responses::{CreateProductResponse, ProductDetails, ProductListItem};

/// The command carries no identity; the id stays nil until the create
/// handler assigns one.
pub fn product_from_command(command: &CreateProductCommand) -> Product {
    Product {
        id: Uuid::nil(),
        name: command.name.clone(),
        description: command.description.clone(),
        unit_price: command.unit_price.clone(),
        quantity: command.quantity,
    }
}

pub fn create_response(product: &Product) -> CreateProductResponse {
    CreateProductResponse {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        unit_price: product.unit_price.clone(),
        quantity: product.quantity,
        total_price: product.total_price(),
    }
}

pub fn details(product: &Product) -> ProductDetails {
    ProductDetails {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        unit_price: product.unit_price.clone(),
        quantity: product.quantity,
        total_price: product.total_price(),
    }
}

pub fn list_item(product: &Product) -> ProductListItem {
    ProductListItem {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        unit_price: product.unit_price.clone(),
        quantity: product.quantity,
        total_price: product.total_price(),
    }
}
