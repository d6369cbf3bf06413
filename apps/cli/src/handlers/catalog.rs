use super::ready;
use anyhow::{Result, bail};
use furever::Portal;
use furever::domain::features::PET_PRODUCTS;
use furever::features::catalog::{self, CatalogFilter};

pub(crate) async fn products(
    portal: &Portal,
    category: String,
    search: String,
    id: Option<u32>,
    list_categories: bool,
) -> Result<()> {
    portal.require(PET_PRODUCTS)?;
    let products = ready(portal.products().await, "products")?;

    if list_categories {
        for category in catalog::categories(&products) {
            println!("{category}");
        }
        return Ok(());
    }

    if let Some(id) = id {
        let Some(product) = catalog::find(&products, id) else {
            bail!("No product with id {id}");
        };
        println!("{} ({})", product.name, product.category);
        println!("{}  {}/5  {}", product.price, product.stars(), product.availability());
        println!("{}", product.description);
        return Ok(());
    }

    let shown = CatalogFilter::new(category, search).apply(&products);
    if shown.is_empty() {
        println!("No products found.");
    }
    for product in shown {
        println!(
            "#{} {} [{}] {} ({})",
            product.id,
            product.name,
            product.category,
            product.price,
            product.availability()
        );
    }
    Ok(())
}
