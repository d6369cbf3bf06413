use crate::product::Product;

pub const ALL_CATEGORIES: &str = "all";

/// Category selection plus free-text search over the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: String,
    pub search: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self { category: ALL_CATEGORIES.to_owned(), search: String::new() }
    }
}

impl CatalogFilter {
    #[must_use]
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self { category: category.into(), search: search.into() }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.category != ALL_CATEGORIES && product.category != self.category {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|product| self.matches(product)).collect()
    }
}

/// `all` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut seen = vec![ALL_CATEGORIES];
    for product in products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(&product.category);
        }
    }
    seen
}

#[must_use]
pub fn find(products: &[Product], id: u32) -> Option<&Product> {
    products.iter().find(|product| product.id == id)
}
