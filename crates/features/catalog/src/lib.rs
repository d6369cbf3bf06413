//! Catalog feature slice: the pet-products grid on the pet-owner dashboard.
//!
//! Products come from a static JSON fixture (`{"products": [...]}`) loaded once per session.
//! A failed load stays distinguishable from an empty catalog through [`Loadable`].

mod filter;
mod product;

pub use crate::filter::{ALL_CATEGORIES, CatalogFilter, categories, find};
pub use crate::product::Product;
pub use furever_kernel::Loadable;

use crate::product::ProductsFixture;
use std::path::Path;
use tracing::info;

/// Loads the product fixture.
pub async fn load_products(path: impl AsRef<Path>) -> Loadable<Vec<Product>> {
    let loaded = furever_kernel::load_fixture::<ProductsFixture>(path).await;
    if let Loadable::Ready(fixture) = &loaded {
        info!(products = fixture.products.len(), "Product catalog loaded");
    }
    loaded.map(|fixture| fixture.products)
}
