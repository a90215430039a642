use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::product::{ProductPayload, ProductsQuery};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, products};

#[post("")]
/// Create a product. Responds `201 Created` with the persisted product, or
/// `400 Bad Request` when the payload has no usable name.
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    payload: web::Json<ProductPayload>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), payload.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/{id}")]
/// Return the product with the given id, or `404 Not Found`.
pub async fn get_product(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> impl Responder {
    match products::get_product(repo.get_ref(), id.into_inner()) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to get product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/{id}")]
/// Partially update the product with the given id. Fields absent from the
/// payload keep their stored values. Responds `404 Not Found` when the id
/// does not exist.
pub async fn update_product(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
    payload: web::Json<ProductPayload>,
) -> impl Responder {
    match products::update_product(repo.get_ref(), id.into_inner(), payload.into_inner()) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/{id}")]
/// Delete the product with the given id. Responds `204 No Content` whether
/// or not the id existed.
pub async fn delete_product(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> impl Responder {
    match products::delete_product(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("")]
/// Return one page of the catalog with optional `page`, `size` and `sort`
/// query parameters.
pub async fn list_products(
    repo: web::Data<DieselRepository>,
    params: web::Query<ProductsQuery>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
