use anyhow::Result;
use colored::*;

use crate::commands::submit;
use crate::core::model::{Mode, Preference};
use crate::ranking::insights;

const BAR_WIDTH: usize = 30;

pub async fn run(query: &str, preference: Option<Preference>, json: bool, offline: bool) -> Result<()> {
    let state = submit(query, Mode::Summarize, preference, offline).await?;
    let report = insights::summarize(&state.results);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format!("Insights for \"{}\"", query).bold());
    println!("  Items analyzed:  {}", report.items);
    println!("  Average price:   ₹{}", report.average_price);
    println!("  Average rating:  {:.1} / 5", report.average_rating);

    println!();
    println!("{}", "Price distribution".bold());
    for bucket in &report.price_distribution {
        let bar = "█".repeat(bucket.percentage as usize * BAR_WIDTH / 100);
        println!(
            "  {:<10} {:>3} {:>4}%  {}",
            bucket.range,
            bucket.count,
            bucket.percentage,
            bar.blue()
        );
    }

    println!();
    println!("{}", "Brands".bold());
    for brand in &report.brands {
        println!("  {:<10} {:>4}%", brand.name, brand.percentage);
    }

    Ok(())
}
