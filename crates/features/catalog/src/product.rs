use serde::{Deserialize, Serialize};

/// One item of the pet-products fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Display price, already formatted (e.g. `"$24.99"`).
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub in_stock: bool,
}

impl Product {
    #[must_use]
    pub const fn availability(&self) -> &'static str {
        if self.in_stock { "In Stock" } else { "Out of Stock" }
    }

    /// Number of filled stars out of five.
    #[must_use]
    pub fn stars(&self) -> u8 {
        // Clamped to 0..=5 before the cast.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = self.rating.clamp(0.0, 5.0).floor() as u8;
        stars
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProductsFixture {
    #[serde(default)]
    pub(crate) products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixture_item() -> Result<(), serde_json::Error> {
        let product: Product = serde_json::from_str(
            r#"{"id":3,"name":"Salmon Bites","category":"Treats","price":"$8.50",
                "image":"/treats.jpg","description":"Grain free","rating":4.6,"inStock":false}"#,
        )?;
        assert_eq!(product.price, "$8.50");
        assert_eq!(product.availability(), "Out of Stock");
        assert_eq!(product.stars(), 4);
        Ok(())
    }
}
