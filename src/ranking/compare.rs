use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::core::model::ProductResult;
use crate::ranking::price::parse_price;

const PREMIUM_THRESHOLD: f64 = 50_000.0;
const MAX_FEATURES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum Category {
    Premium,
    Value,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Premium => write!(f, "Premium"),
            Category::Value => write!(f, "Value"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
    Price,
    #[default]
    Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub id: usize,
    pub name: String,
    pub price: String,
    pub rating: f64,
    pub features: Vec<String>,
    pub link: String,
    pub category: Category,
}

impl ComparisonRow {
    fn parsed_price(&self) -> f64 {
        parse_price(&self.price)
    }
}

pub fn rows(results: &[ProductResult]) -> Vec<ComparisonRow> {
    results
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let category = if parse_price(&r.price) > PREMIUM_THRESHOLD {
                Category::Premium
            } else {
                Category::Value
            };
            ComparisonRow {
                id: idx + 1,
                name: r.name.clone(),
                price: r.price.clone(),
                rating: r.bounded_rating(),
                features: r.specifications.iter().take(MAX_FEATURES).cloned().collect(),
                link: if r.link.is_empty() { "#".to_string() } else { r.link.clone() },
                category,
            }
        })
        .collect()
}

/// Keep rows whose name contains `term` (case-insensitive) and, if given,
/// that fall into `category`.
pub fn filter(rows: Vec<ComparisonRow>, term: &str, category: Option<Category>) -> Vec<ComparisonRow> {
    let term = term.to_lowercase();
    rows.into_iter()
        .filter(|r| r.name.to_lowercase().contains(&term))
        .filter(|r| category.map_or(true, |c| r.category == c))
        .collect()
}

/// Stable in both directions: equal keys keep their current order.
pub fn sort(rows: &mut [ComparisonRow], field: SortField, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Price => a.parsed_price().total_cmp(&b.parsed_price()),
            SortField::Rating => a.rating.total_cmp(&b.rating),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: &str, rating: f64, specs: &[&str]) -> ProductResult {
        ProductResult {
            name: name.to_string(),
            price: price.to_string(),
            rating,
            specifications: specs.iter().map(|s| s.to_string()).collect(),
            link: String::new(),
            image: String::new(),
        }
    }

    fn fixture() -> Vec<ComparisonRow> {
        rows(&[
            product("Dell Inspiron", "45,000", 4.2, &["i5", "8GB", "512GB", "FHD"]),
            product("apple MacBook", "99,900", 4.7, &[]),
            product("HP Pavilion", "50,000", 4.2, &[]),
        ])
    }

    #[test]
    fn test_row_fields() {
        let rows = fixture();
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].features.len(), 3);
        assert_eq!(rows[0].link, "#");
        assert_eq!(rows[0].category, Category::Value);
        assert_eq!(rows[1].category, Category::Premium);
        // threshold is exclusive
        assert_eq!(rows[2].category, Category::Value);
    }

    #[test]
    fn test_filter() {
        let found = filter(fixture(), "DELL", None);
        assert_eq!(found.len(), 1);

        let premium = filter(fixture(), "", Some(Category::Premium));
        assert_eq!(premium.len(), 1);
        assert_eq!(premium[0].name, "apple MacBook");
    }

    #[test]
    fn test_sort_by_fields() {
        let mut rows = fixture();
        sort(&mut rows, SortField::Price, true);
        let ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        sort(&mut rows, SortField::Name, true);
        let ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_rating_ties_stay_in_order() {
        let mut rows = fixture();
        sort(&mut rows, SortField::Rating, false);
        let ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
