use crate::domain::product::{NewProduct, Product, ProductListQuery, ProductSort, UpdateProduct};
use crate::dto::product::{ProductPayload, ProductsQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE, Paginated};
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Creates a new product from the submitted payload.
///
/// The name must be present and non-empty; no other field is constrained at
/// creation time. A missing price becomes `0.0`.
pub fn create_product<R>(repo: &R, payload: ProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let name = match payload.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(ServiceError::Validation(
                "Product name cannot be null or empty".to_string(),
            ));
        }
    };

    let mut new_product = NewProduct::new(name, payload.price.unwrap_or(0.0));
    if let Some(category) = payload.category {
        new_product = new_product.with_category(category);
    }

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Looks up a product by id. Absence is a normal outcome, not an error.
pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Option<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(id).map_err(ServiceError::from)
}

/// Applies a partial update to the product with the given id.
///
/// Returns `Ok(None)` without writing anything when the id does not exist.
/// Otherwise the stored record is overwritten with the result of
/// [`merge_product`].
pub fn update_product<R>(repo: &R, id: i32, payload: ProductPayload) -> ServiceResult<Option<Product>>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let Some(existing) = repo.get_product_by_id(id)? else {
        return Ok(None);
    };

    let merged = merge_product(existing, &payload);

    match repo.update_product(id, &UpdateProduct::from(&merged)) {
        Ok(saved) => Ok(Some(saved)),
        // The row can vanish between the read and the write; treat that the
        // same as a lookup miss.
        Err(RepositoryError::NotFound) => Ok(None),
        Err(err) => Err(ServiceError::from(err)),
    }
}

/// Merges an update payload into an existing product, field by field.
///
/// A field is replaced only when it passes its eligibility check:
/// - `name`: present and non-empty;
/// - `price`: present and strictly positive (zero is indistinguishable from
///   an omitted price and both mean "keep the stored value");
/// - `category`: present and non-empty.
pub fn merge_product(mut existing: Product, payload: &ProductPayload) -> Product {
    if let Some(name) = payload.name.as_deref().filter(|name| !name.is_empty()) {
        existing.name = name.to_string();
    }
    if let Some(price) = payload.price.filter(|price| *price > 0.0) {
        existing.price = price;
    }
    if let Some(category) = payload
        .category
        .as_deref()
        .filter(|category| !category.is_empty())
    {
        existing.category = Some(category.to_string());
    }
    existing
}

/// Deletes the product with the given id. Deleting a missing id is a no-op.
pub fn delete_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(id).map_err(ServiceError::from)
}

/// Returns one page of the catalog, optionally sorted.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .size
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
        .clamp(1, MAX_ITEMS_PER_PAGE);

    let mut list_query = ProductListQuery::new().paginate(page, per_page);
    // An unrecognized sort field falls back to the default id ordering
    // instead of failing the request.
    if let Some(sort) = query.sort.as_deref().and_then(ProductSort::parse) {
        list_query = list_query.sort(sort);
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;

    Ok(Paginated::new(items, page, per_page, total))
}
