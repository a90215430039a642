use diesel::prelude::*;

use crate::{
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery, SortField,
        UpdateProduct as DomainUpdateProduct,
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{DieselRepository, ProductReader, ProductWriter, errors::RepositoryResult},
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let total = products::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        let sort = query.sort.unwrap_or_default();
        items = match (sort.field, sort.descending) {
            (SortField::Id, false) => items.order(products::id.asc()),
            (SortField::Id, true) => items.order(products::id.desc()),
            (SortField::Name, false) => items.order(products::name.asc()),
            (SortField::Name, true) => items.order(products::name.desc()),
            (SortField::Price, false) => items.order(products::price.asc()),
            (SortField::Price, true) => items.order(products::price.desc()),
            (SortField::Category, false) => items.order(products::category.asc()),
            (SortField::Category, true) => items.order(products::category.desc()),
        };

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;
        let domain_products = db_products.into_iter().map(Into::into).collect();

        Ok((total, domain_products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let target = products::table.filter(products::id.eq(product_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let target = products::table.filter(products::id.eq(product_id));

        // Deleting an id that no longer exists is a no-op, so the affected
        // row count is deliberately ignored.
        diesel::delete(target).execute(&mut conn)?;

        Ok(())
    }
}
