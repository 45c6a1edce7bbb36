use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Backend query intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Search,
    Compare,
    Summarize,
}

/// Ranking bias applied on top of the base score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Preference {
    #[default]
    Default,
    BestCamera,
    BestBattery,
    BestValue,
}

/// A single product listing as returned by the search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResult {
    pub name: String,
    /// Locale formatted, e.g. "45,000" or "₹45,000".
    pub price: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub specifications: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: String,
}

impl ProductResult {
    /// Rating clamped to [0, 5]; NaN counts as 0.
    pub fn bounded_rating(&self) -> f64 {
        if self.rating.is_nan() {
            0.0
        } else {
            self.rating.clamp(0.0, 5.0)
        }
    }

    pub fn spec_text(&self) -> String {
        self.specifications.join(" ").to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<ProductResult>,
    #[serde(default)]
    pub summary: Option<String>,
}
