use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};
use uuid::Uuid;

use business::application::product::requests::{
    CreateProductCommand, DeleteProductCommand, GetAllProductsQuery, GetProductByIdQuery,
};
use business::mediator::dispatcher::Mediator;
use business::mediator::errors::DispatchError;
use business::mediator::validation::FieldError;

use crate::api::error::{self, ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductDto};
use crate::api::tags::ApiTags;

const NO_PRODUCT_WITH_ID: &str = "No Product exists with the given id";

pub struct ProductApi {
    mediator: Arc<Mediator>,
}

impl ProductApi {
    pub fn new(mediator: Arc<Mediator>) -> Self {
        Self { mediator }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, and deleting catalog products. Every
/// request is dispatched through the mediator, so validation runs before
/// any handler.
#[OpenApi]
impl ProductApi {
    /// List all products
    #[oai(
        path = "/products/getallproducts",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_all_products(&self) -> GetAllProductsApiResponse {
        match self.mediator.send(GetAllProductsQuery).await {
            Ok(items) => GetAllProductsApiResponse::Ok(Json(
                items.into_iter().map(ProductDto::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsApiResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id
    ///
    /// Returns the product, or a 400 when the id is missing, malformed, or
    /// unknown.
    #[oai(
        path = "/products/getproductbyid",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_product_by_id(&self, id: Query<Option<String>>) -> GetProductByIdApiResponse {
        let id = match parse_id(id.0) {
            Ok(id) => id,
            Err(body) => return GetProductByIdApiResponse::BadRequest(Json(body)),
        };

        match self.mediator.send(GetProductByIdQuery { id }).await {
            Ok(Some(details)) => GetProductByIdApiResponse::Ok(Json(details.into())),
            Ok(None) => {
                GetProductByIdApiResponse::BadRequest(Json(error::message(NO_PRODUCT_WITH_ID)))
            }
            Err(DispatchError::Validation(errors)) => {
                GetProductByIdApiResponse::BadRequest(Json(error::field_errors(&errors)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductByIdApiResponse::InternalError(json)
            }
        }
    }

    /// Create a new product
    #[oai(
        path = "/products/createproduct",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductApiResponse {
        let command: CreateProductCommand = body.0.into();

        match self.mediator.send(command).await {
            Ok(response) => CreateProductApiResponse::Ok(Json(response.into())),
            Err(DispatchError::Validation(errors)) => {
                CreateProductApiResponse::BadRequest(Json(error::field_errors(&errors)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductApiResponse::InternalError(json)
            }
        }
    }

    /// Delete a product
    ///
    /// Deleting an unknown id is not an error of the pipeline; it surfaces
    /// as the same 400 a missing product does on reads.
    #[oai(
        path = "/products/deleteproduct",
        method = "delete",
        tag = "ApiTags::Products"
    )]
    async fn delete_product(&self, id: Query<Option<String>>) -> DeleteProductApiResponse {
        let id = match parse_id(id.0) {
            Ok(id) => id,
            Err(body) => return DeleteProductApiResponse::BadRequest(Json(body)),
        };

        match self.mediator.send(DeleteProductCommand { id }).await {
            Ok(response) if response.deleted => {
                DeleteProductApiResponse::Ok(Json("Successfully deleted".to_string()))
            }
            Ok(_) => DeleteProductApiResponse::BadRequest(Json(error::message(NO_PRODUCT_WITH_ID))),
            Err(DispatchError::Validation(errors)) => {
                DeleteProductApiResponse::BadRequest(Json(error::field_errors(&errors)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductApiResponse::InternalError(json)
            }
        }
    }
}

/// A missing or empty id parameter behaves like a default one, so the query
/// validator reports it; an unparseable id is rejected here with the same
/// field-error body shape.
fn parse_id(raw: Option<String>) -> Result<Uuid, serde_json::Value> {
    match raw.as_deref() {
        None | Some("") => Ok(Uuid::nil()),
        Some(raw) => Uuid::parse_str(raw).map_err(|_| {
            error::field_errors(&[FieldError::new("Id", "'Id' must be a valid identifier.")])
        }),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsApiResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductDto>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdApiResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDto>),
    /// Field-error array for validation failures, or a plain message when
    /// no product matches the id.
    #[oai(status = 400)]
    BadRequest(Json<serde_json::Value>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductApiResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDto>),
    /// Field-error array for validation failures.
    #[oai(status = 400)]
    BadRequest(Json<serde_json::Value>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductApiResponse {
    #[oai(status = 200)]
    Ok(Json<String>),
    /// Field-error array for validation failures, or a plain message when
    /// no product matches the id.
    #[oai(status = 400)]
    BadRequest(Json<serde_json::Value>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
