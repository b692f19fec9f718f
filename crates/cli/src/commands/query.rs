use anyhow::Result;
use product_catalog_core::{Catalog, max_page_limit};
use product_catalog_http::{ProductListQuery, ProductListResponse};

pub(crate) fn run_list(catalog: &Catalog, query: ProductListQuery) -> Result<()> {
    let request = query.into_request(max_page_limit())?;
    let response = ProductListResponse::from(catalog.query(&request));
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) fn run_get(catalog: &Catalog, id: i64) -> Result<()> {
    let product = catalog.get(id)?;
    println!("{}", serde_json::to_string_pretty(product)?);
    Ok(())
}
