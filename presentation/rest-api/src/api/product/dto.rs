use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::application::product::requests::CreateProductCommand;
use business::application::product::responses::{
    CreateProductResponse, ProductDetails, ProductListItem,
};

/// Request body for creating a product. Omitted fields fall back to their
/// defaults so the create validator reports them instead of the
/// deserializer.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    #[oai(default)]
    pub name: String,
    /// Product description (cannot be empty)
    #[oai(default)]
    pub description: String,
    /// Price per unit (must be at least 1)
    #[oai(default)]
    pub unit_price: f64,
    /// Units on hand (must be at least 10)
    #[oai(default)]
    pub quantity: i32,
}

impl From<CreateProductRequest> for CreateProductCommand {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            unit_price: BigDecimal::try_from(request.unit_price).unwrap_or_default(),
            quantity: request.quantity,
        }
    }
}

/// Wire shape shared by every product-returning endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductDto {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price per unit
    pub unit_price: f64,
    /// Units on hand
    pub quantity: i32,
    /// Derived price for the whole quantity
    pub total_price: f64,
}

impl From<CreateProductResponse> for ProductDto {
    fn from(response: CreateProductResponse) -> Self {
        Self {
            id: response.id.to_string(),
            name: response.name,
            description: response.description,
            unit_price: response.unit_price.to_f64().unwrap_or_default(),
            quantity: response.quantity,
            total_price: response.total_price.to_f64().unwrap_or_default(),
        }
    }
}

impl From<ProductDetails> for ProductDto {
    fn from(details: ProductDetails) -> Self {
        Self {
            id: details.id.to_string(),
            name: details.name,
            description: details.description,
            unit_price: details.unit_price.to_f64().unwrap_or_default(),
            quantity: details.quantity,
            total_price: details.total_price.to_f64().unwrap_or_default(),
        }
    }
}

impl From<ProductListItem> for ProductDto {
    fn from(item: ProductListItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
            unit_price: item.unit_price.to_f64().unwrap_or_default(),
            quantity: item.quantity,
            total_price: item.total_price.to_f64().unwrap_or_default(),
        }
    }
}
