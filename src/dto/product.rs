use serde::Deserialize;

/// JSON payload accepted by the create and update endpoints.
///
/// Every field is optional at the type level. The payload cannot tell a
/// field that was omitted apart from one sent as an empty string, and an
/// omitted `price` deserializes the same as an explicit zero. The per-field
/// eligibility checks in the service layer treat both the same way; this is
/// a documented limitation of the API, kept to preserve the observable
/// behavior of the original contract.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductPayload {
    /// Name to assign to the product.
    pub name: Option<String>,
    /// Unit price to assign to the product.
    pub price: Option<f64>,
    /// Free-text category label to assign to the product.
    pub category: Option<String>,
}

/// Query parameters accepted by the paginated listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Page requested by the client (1-based).
    pub page: Option<usize>,
    /// Page size requested by the client.
    pub size: Option<usize>,
    /// Ordering as `field[,asc|desc]`, e.g. `price,desc`.
    pub sort: Option<String>,
}
