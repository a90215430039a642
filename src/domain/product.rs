use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a product held in the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product, assigned by the store.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Unit price of the product.
    pub price: f64,
    /// Optional free-text category label.
    pub category: Option<String>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Unit price of the product.
    pub price: f64,
    /// Optional free-text category label.
    pub category: Option<String>,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and price.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            category: None,
        }
    }

    /// Attach a category label to the product payload.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Full replacement written back to the store after a merge.
///
/// Field-level update eligibility is decided by the service before this
/// struct is built; the store overwrites the whole record.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
}

impl From<&Product> for UpdateProduct {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
        }
    }
}

/// Columns a product listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Name,
    Price,
    Category,
}

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductSort {
    pub field: SortField,
    pub descending: bool,
}

impl ProductSort {
    /// Parse a `field[,asc|desc]` query value, e.g. `price,desc`.
    ///
    /// Returns `None` for an unknown field so callers can fall back to the
    /// default ordering instead of failing the request.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.splitn(2, ',');
        let field = match parts.next()?.trim().to_ascii_lowercase().as_str() {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "price" => SortField::Price,
            "category" => SortField::Category,
            _ => return None,
        };
        let descending = matches!(
            parts.next().map(str::trim),
            Some(direction) if direction.eq_ignore_ascii_case("desc")
        );
        Some(Self { field, descending })
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Ordering applied to the results, id-ascending when absent.
    pub sort: Option<ProductSort>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Order the results by the given sort definition.
    pub fn sort(mut self, sort: ProductSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
