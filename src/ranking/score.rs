//! Client-side ranking of search results.
//!
//! Score is inverse price plus rating, with an additive bias for the
//! selected preference. Records above an "under <amount>" ceiling found
//! in the query are dropped first.

use log::debug;

use crate::core::model::{Preference, ProductResult};
use crate::ranking::price::parse_price;
use crate::ranking::query::price_ceiling;

const PRICE_SCALE: f64 = 100_000.0;
const RATING_WEIGHT: f64 = 10.0;
const FEATURE_BOOST: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProduct {
    pub product: ProductResult,
    pub score: f64,
}

/// Parsed price, floored at 1 so the inverse term stays finite.
pub fn base_price(product: &ProductResult) -> f64 {
    parse_price(&product.price).max(1.0)
}

pub fn score(product: &ProductResult, preference: Preference) -> f64 {
    let price = base_price(product);
    let rating = product.bounded_rating();
    let base = (1.0 / price) * PRICE_SCALE + rating * RATING_WEIGHT;

    let boost = match preference {
        Preference::BestCamera if product.spec_text().contains("camera") => FEATURE_BOOST,
        Preference::BestBattery if product.spec_text().contains("battery") => FEATURE_BOOST,
        Preference::BestValue => rating * 2.0 - price / PRICE_SCALE,
        _ => 0.0,
    };

    base + boost
}

/// Filter by the query's price ceiling, then sort by descending score.
/// Equal scores keep their input order.
pub fn rank_scored(
    products: Vec<ProductResult>,
    query: &str,
    preference: Preference,
) -> Vec<ScoredProduct> {
    let ceiling = price_ceiling(query);
    if let Some(max) = ceiling {
        debug!("Price ceiling {} for {:?}", max, query);
    }

    let mut scored: Vec<ScoredProduct> = products
        .into_iter()
        .filter(|p| ceiling.map_or(true, |max| parse_price(&p.price) <= max))
        .map(|product| {
            let score = score(&product, preference);
            ScoredProduct { product, score }
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

pub fn rank(products: Vec<ProductResult>, query: &str, preference: Preference) -> Vec<ProductResult> {
    rank_scored(products, query, preference)
        .into_iter()
        .map(|s| s.product)
        .collect()
}
