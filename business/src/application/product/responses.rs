//! Per-call projections of a stored product. Each carries the derived
//! `total_price`, fixed at construction time.

use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub total_price: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProductResponse {
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub total_price: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductListItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub total_price: BigDecimal,
}
