use once_cell::sync::Lazy;
use regex::Regex;

// under [currency] <amount>[k]
static UNDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bunder\s*(?:₹|rs\.?|inr|\$)?\s*([0-9](?:[0-9]|,[0-9])*(?:\.[0-9]+)?)\s*(k\b)?",
    )
    .expect("static regex")
});

/// Extract the price ceiling from an "under <amount>" phrase, if the query has one.
///
/// Accepts `50k`, `50000`, `₹50,000`, `₹1,20,000`, `rs 45k` and similar
/// spellings. Any comma grouping is accepted. The first
/// phrase in the query wins.
pub fn price_ceiling(query: &str) -> Option<f64> {
    let caps = UNDER_RE.captures(query)?;
    let amount: f64 = caps.get(1)?.as_str().replace(',', "").parse().ok()?;
    let multiplier = if caps.get(2).is_some() { 1000.0 } else { 1.0 };
    Some(amount * multiplier)
}
