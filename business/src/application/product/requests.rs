use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::mediator::request::Request;

use super::responses::{
    CreateProductResponse, DeleteProductResponse, ProductDetails, ProductListItem,
};

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
}

impl Request for CreateProductCommand {
    type Response = CreateProductResponse;
}

#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub id: Uuid,
}

impl Request for DeleteProductCommand {
    type Response = DeleteProductResponse;
}

#[derive(Debug, Clone)]
pub struct GetProductByIdQuery {
    pub id: Uuid,
}

impl Request for GetProductByIdQuery {
    type Response = Option<ProductDetails>;
}

#[derive(Debug, Clone)]
pub struct GetAllProductsQuery;

impl Request for GetAllProductsQuery {
    type Response = Vec<ProductListItem>;
}
