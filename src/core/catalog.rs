//! Built-in listings served when running offline.

use crate::core::model::{ProductResult, SearchResponse};

const LISTINGS: &[(&str, &str, f64, &[&str])] = &[
    ("Dell Inspiron 15 3000", "45,000", 4.2, &["Intel i5", "8GB RAM", "512GB SSD"]),
    ("HP Pavilion 14", "48,500", 4.5, &["AMD Ryzen 5", "16GB RAM", "512GB SSD"]),
    ("Lenovo IdeaPad 3", "42,000", 4.1, &["Intel i5", "8GB RAM", "1TB HDD"]),
    ("Acer Aspire 5", "49,000", 4.3, &["Intel i7", "12GB RAM", "512GB SSD"]),
    ("ASUS VivoBook 15", "46,500", 4.4, &["AMD Ryzen 7", "16GB RAM", "512GB SSD"]),
    ("MSI Modern 14", "47,800", 4.0, &["Intel i5", "8GB RAM", "256GB SSD"]),
    ("Apple MacBook Air M2", "99,900", 4.7, &["Apple M2", "8GB RAM", "18h battery"]),
    ("Samsung Galaxy Book3", "72,990", 4.3, &["Intel i7", "16GB RAM", "1080p camera"]),
];

pub fn products() -> Vec<ProductResult> {
    LISTINGS
        .iter()
        .map(|(name, price, rating, specs)| ProductResult {
            name: name.to_string(),
            price: price.to_string(),
            rating: *rating,
            specifications: specs.iter().map(|s| s.to_string()).collect(),
            link: "#".to_string(),
            image: String::new(),
        })
        .collect()
}

pub fn search() -> SearchResponse {
    SearchResponse {
        products: products(),
        summary: None,
    }
}
