use actix_web::web;

pub mod products;

/// Mounts every product endpoint under the versioned API prefix.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/products")
            .service(products::create_product)
            .service(products::list_products)
            .service(products::get_product)
            .service(products::update_product)
            .service(products::delete_product),
    );
}
