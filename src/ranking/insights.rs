use serde::Serialize;

use crate::core::model::ProductResult;
use crate::ranking::price::parse_price;

const BUCKETS: &[(&str, f64, f64)] = &[
    ("₹0-25k", 0.0, 25_000.0),
    ("₹25k-40k", 25_000.0, 40_000.0),
    ("₹40k-50k", 40_000.0, 50_000.0),
    ("₹50k-80k", 50_000.0, 80_000.0),
    ("₹80k+", 80_000.0, f64::INFINITY),
];

const BRANDS: &[&str] = &["dell", "hp", "lenovo", "acer", "asus", "msi", "samsung", "apple"];
const MAX_BRANDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBucket {
    pub range: &'static str,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandShare {
    pub name: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub items: usize,
    pub average_price: u64,
    pub average_rating: f64,
    pub price_distribution: Vec<PriceBucket>,
    pub brands: Vec<BrandShare>,
}

fn percent(part: usize, total: usize) -> u32 {
    ((part as f64 / total.max(1) as f64) * 100.0).round() as u32
}

pub fn price_distribution(results: &[ProductResult]) -> Vec<PriceBucket> {
    let prices: Vec<f64> = results.iter().map(|r| parse_price(&r.price)).collect();

    BUCKETS
        .iter()
        .map(|&(range, min, max)| {
            let count = prices.iter().filter(|&&p| p >= min && p < max).count();
            PriceBucket {
                range,
                count,
                percentage: percent(count, results.len()),
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Brand mentions across product names, as shares of all mentions.
pub fn brand_breakdown(results: &[ProductResult]) -> Vec<BrandShare> {
    let names = results
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let counts: Vec<(&str, usize)> = BRANDS
        .iter()
        .map(|&brand| (brand, names.matches(brand).count()))
        .collect();
    let total: usize = counts.iter().map(|(_, c)| c).sum();

    let shares: Vec<BrandShare> = counts
        .into_iter()
        .filter(|(_, c)| *c > 0)
        .map(|(brand, c)| BrandShare {
            name: capitalize(brand),
            percentage: percent(c, total),
        })
        .take(MAX_BRANDS)
        .collect();

    if shares.is_empty() {
        return vec![BrandShare {
            name: "Other".to_string(),
            percentage: 100,
        }];
    }
    shares
}

pub fn summarize(results: &[ProductResult]) -> Insights {
    let total = results.len().max(1) as f64;
    let price_sum: f64 = results.iter().map(|r| parse_price(&r.price)).sum();
    let rating_sum: f64 = results.iter().map(|r| r.bounded_rating()).sum();

    Insights {
        items: results.len(),
        average_price: (price_sum / total).round() as u64,
        average_rating: (rating_sum / total * 10.0).round() / 10.0,
        price_distribution: price_distribution(results),
        brands: brand_breakdown(results),
    }
}
