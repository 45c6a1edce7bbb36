use anyhow::Result;
use colored::*;

use crate::commands::submit;
use crate::core::model::{Mode, Preference};
use crate::ranking::compare::{self, Category, SortField};

pub struct CompareOptions {
    pub preference: Option<Preference>,
    pub sort: SortField,
    pub ascending: bool,
    pub filter: String,
    pub category: Option<Category>,
    pub json: bool,
    pub offline: bool,
}

pub async fn run(query: &str, opts: CompareOptions) -> Result<()> {
    let state = submit(query, Mode::Compare, opts.preference, opts.offline).await?;

    let mut rows = compare::filter(compare::rows(&state.results), &opts.filter, opts.category);
    compare::sort(&mut rows, opts.sort, opts.ascending);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} ({} items)",
        format!("Comparison results: \"{}\"", query).bold(),
        rows.len()
    );
    if rows.is_empty() {
        return Ok(());
    }

    println!(
        "{:<4} {:<32} {:>12} {:>6}  {:<8} {}",
        "#", "Name", "Price", "Rating", "Category", "Features"
    );
    for row in &rows {
        let category = match row.category {
            Category::Premium => row.category.to_string().magenta(),
            Category::Value => row.category.to_string().green(),
        };
        println!(
            "{:<4} {:<32} {:>12} {:>6.1}  {:<8} {}",
            row.id,
            truncate(&row.name, 32),
            format!("₹{}", row.price.trim_start_matches('₹')),
            row.rating,
            category,
            row.features.join(", ").dimmed()
        );
    }

    Ok(())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Dell Inspiron 15", 6), "Dell …");
    }
}
