//! # Product Catalog
//!
//! The fixed in-memory product list backing the storefront.
//!
//! ## Key Operations
//! - Lookup by product id
//! - Filter by the featured flag (for the home page)
//!
//! Products are created once at startup and never mutated; everything hands
//! out references into the catalog's own list. The demo data set mirrors the
//! storefront's eight showcase products.

use ecommsim_core::{Price, Product};

/// The storefront's product catalog.
///
/// ## Usage
/// ```rust
/// use ecommsim_store::Catalog;
///
/// let catalog = Catalog::demo();
///
/// let backpack = catalog.get_by_id("3").unwrap();
/// assert_eq!(backpack.name, "Aqua Adventure Backpack");
///
/// let featured = catalog.featured();
/// assert_eq!(featured.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Gets a product by its id.
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Lists featured products in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.is_featured())
            .collect()
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Builds the demonstration catalog.
    pub fn demo() -> Self {
        fn gallery(urls: &[&str]) -> Option<Vec<String>> {
            Some(urls.iter().map(|url| url.to_string()).collect())
        }

        Catalog::new(vec![
            Product {
                id: "1".to_string(),
                name: "Playful Polka Dot Dress".to_string(),
                description: "A fun and flirty polka dot dress, perfect for sunny days. \
                              Made with lightweight, breathable cotton."
                    .to_string(),
                price: Price::from_cents(4999),
                category: "Apparel".to_string(),
                image_url: "https://placehold.co/600x800.png".to_string(),
                images: gallery(&[
                    "https://placehold.co/600x800.png",
                    "https://placehold.co/600x800.png?a=1",
                    "https://placehold.co/600x800.png?a=2",
                ]),
                rating: Some(4.5),
                reviews: Some(120),
                featured: Some(true),
            },
            Product {
                id: "2".to_string(),
                name: "Vibrant Striped Tee".to_string(),
                description: "Brighten up your wardrobe with this vibrant striped t-shirt. \
                              Soft and comfortable for everyday wear."
                    .to_string(),
                price: Price::from_cents(2499),
                category: "Apparel".to_string(),
                image_url: "https://placehold.co/600x800.png?p=2".to_string(),
                images: gallery(&[
                    "https://placehold.co/600x800.png?p=2",
                    "https://placehold.co/600x800.png?p=2&a=1",
                ]),
                rating: Some(4.2),
                reviews: Some(85),
                featured: None,
            },
            Product {
                id: "3".to_string(),
                name: "Aqua Adventure Backpack".to_string(),
                description: "A durable and stylish backpack in a cool aqua color. \
                              Plenty of space for all your essentials."
                    .to_string(),
                price: Price::from_cents(7999),
                category: "Accessories".to_string(),
                image_url: "https://placehold.co/600x800.png?p=3".to_string(),
                images: gallery(&[
                    "https://placehold.co/600x800.png?p=3",
                    "https://placehold.co/600x800.png?p=3&a=1",
                ]),
                rating: Some(4.8),
                reviews: Some(210),
                featured: Some(true),
            },
            Product {
                id: "4".to_string(),
                name: "Coral Comfort Sneakers".to_string(),
                description: "Step out in style and comfort with these bright coral sneakers. \
                              Perfect for active days."
                    .to_string(),
                price: Price::from_cents(8999),
                category: "Footwear".to_string(),
                image_url: "https://placehold.co/600x800.png?p=4".to_string(),
                images: None,
                rating: Some(4.6),
                reviews: Some(150),
                featured: None,
            },
            Product {
                id: "5".to_string(),
                name: "Sunshine Yellow Scarf".to_string(),
                description: "Add a pop of color to any outfit with this soft, sunshine yellow \
                              scarf. Lightweight and versatile."
                    .to_string(),
                price: Price::from_cents(1999),
                category: "Accessories".to_string(),
                image_url: "https://placehold.co/600x800.png?p=5".to_string(),
                images: gallery(&["https://placehold.co/600x800.png?p=5"]),
                rating: Some(4.3),
                reviews: Some(65),
                featured: Some(true),
            },
            Product {
                id: "6".to_string(),
                name: "Turquoise Tech Watch".to_string(),
                description: "Stay connected with this sleek smartwatch featuring a vibrant \
                              turquoise band. Tracks fitness and notifications."
                    .to_string(),
                price: Price::from_cents(12999),
                category: "Electronics".to_string(),
                image_url: "https://placehold.co/600x800.png?p=6".to_string(),
                images: None,
                rating: Some(4.7),
                reviews: Some(95),
                featured: None,
            },
            Product {
                id: "7".to_string(),
                name: "Bohemian Print Maxi Skirt".to_string(),
                description: "Flowy and comfortable maxi skirt with a unique bohemian print. \
                              Perfect for festivals or casual outings."
                    .to_string(),
                price: Price::from_cents(5500),
                category: "Apparel".to_string(),
                image_url: "https://placehold.co/600x800.png?p=7".to_string(),
                images: gallery(&[
                    "https://placehold.co/600x800.png?p=7",
                    "https://placehold.co/600x800.png?p=7&a=1",
                ]),
                rating: Some(4.4),
                reviews: Some(77),
                featured: None,
            },
            Product {
                id: "8".to_string(),
                name: "Minimalist Leather Wallet".to_string(),
                description: "A sleek and minimalist wallet crafted from genuine leather, \
                              available in coral or turquoise."
                    .to_string(),
                price: Price::from_cents(3999),
                category: "Accessories".to_string(),
                image_url: "https://placehold.co/600x400.png?p=8".to_string(),
                images: None,
                rating: Some(4.9),
                reviews: Some(130),
                featured: None,
            },
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
