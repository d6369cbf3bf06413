use furever_catalog::{CatalogFilter, Loadable, Product, categories, load_products};
use proptest::prelude::*;
use tempfile::TempDir;

const FIXTURE: &str = r#"{"products":[
  {"id":1,"name":"Premium Dog Food","category":"Food","price":"$45.99","image":"/food.jpg",
   "description":"Balanced nutrition","rating":4.8,"inStock":true},
  {"id":2,"name":"Rope Toy","category":"Toys","price":"$9.99","image":"/rope.jpg",
   "description":"Durable cotton rope","rating":4.2,"inStock":true},
  {"id":3,"name":"Cat Food","category":"Food","price":"$29.99","image":"/cat.jpg",
   "description":"Salmon recipe","rating":4.5,"inStock":false}
]}"#;

#[tokio::test]
async fn loads_fixture_and_lists_categories() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("pet-products.json");
    std::fs::write(&path, FIXTURE)?;

    let Loadable::Ready(products) = load_products(&path).await else {
        panic!("fixture should load");
    };
    assert_eq!(categories(&products), ["all", "Food", "Toys"]);
    assert_eq!(CatalogFilter::new("Food", "salmon").apply(&products).len(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_load_is_not_an_empty_catalog() {
    let loaded = load_products("/definitely/missing/pet-products.json").await;
    assert!(matches!(loaded, Loadable::Failed(_)));
}

fn product() -> impl Strategy<Value = Product> {
    (any::<u32>(), "[a-z]{1,8}", prop_oneof![Just("Food"), Just("Toys")], "[a-z ]{0,16}")
        .prop_map(|(id, name, category, description)| Product {
            id,
            name,
            category: category.to_owned(),
            price: "$1.00".to_owned(),
            image: String::new(),
            description,
            rating: 3.0,
            in_stock: true,
        })
}

proptest! {
    #[test]
    fn default_filter_keeps_everything(products in prop::collection::vec(product(), 0..20)) {
        prop_assert_eq!(CatalogFilter::default().apply(&products).len(), products.len());
    }

    #[test]
    fn results_are_a_subsequence(
        products in prop::collection::vec(product(), 0..20),
        search in "[a-z]{0,2}",
    ) {
        let filter = CatalogFilter::new("Food", search);
        let hits = filter.apply(&products);
        prop_assert!(hits.iter().all(|p| p.category == "Food"));

        let mut rest = products.iter();
        for hit in hits {
            prop_assert!(rest.any(|p| std::ptr::eq(p, hit)));
        }
    }
}
