use anyhow::Result;
use colored::*;
use std::fmt::Write;

use crate::commands::submit;
use crate::core::model::{Mode, Preference};
use crate::ranking::score::score;
use crate::session::AgentState;

pub async fn run(
    query: &str,
    mode: Mode,
    preference: Option<Preference>,
    limit: usize,
    json: bool,
    offline: bool,
) -> Result<()> {
    let state = submit(query, mode, preference, offline).await?;

    if json {
        let shown = &state.results[..limit.min(state.results.len())];
        let out = serde_json::json!({
            "query": state.query,
            "summary": state.summary,
            "products": shown,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!("{}", render(&state, limit)?);
    Ok(())
}

fn render(state: &AgentState, limit: usize) -> Result<String> {
    let mut out = String::new();

    if state.results.is_empty() {
        writeln!(out, "No results found for \"{}\".", state.query)?;
        writeln!(
            out,
            "{} laptops under 50k, gaming laptops, ultrabooks",
            "Try:".dimmed()
        )?;
        return Ok(out);
    }

    let shown = &state.results[..limit.min(state.results.len())];
    for (rank, item) in shown.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {}  {}  {}  {:.2}",
            rank + 1,
            item.name.bold(),
            format!("₹{}", item.price.trim_start_matches('₹')).green(),
            format!("★ {:.1}", item.bounded_rating()).yellow(),
            score(item, state.preference)
        )?;
        if !item.specifications.is_empty() {
            writeln!(out, "    {}", item.specifications.join(" · ").dimmed())?;
        }
        if !item.link.is_empty() && item.link != "#" {
            writeln!(out, "    {}", item.link.magenta())?;
        }
    }

    if state.results.len() > shown.len() {
        writeln!(
            out,
            "{}",
            format!("... {} more results", state.results.len() - shown.len()).dimmed()
        )?;
    }
    if let Some(summary) = &state.summary {
        writeln!(out)?;
        writeln!(out, "{}", summary.cyan())?;
    }

    Ok(out)
}
