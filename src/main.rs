mod commands;
mod core;
mod ranking;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::compare::CompareOptions;
use crate::commands::{compare, insights, search};
use crate::core::model::{Mode, Preference};
use crate::ranking::compare::{Category, SortField};

#[derive(Parser)]
#[command(name = "pricelens")]
#[command(about = "pricelens - search, rank and compare product listings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products and print them ranked
    Search {
        /// Search query, e.g. "laptops under 50k"
        query: String,

        /// Backend query intent
        #[arg(short, long, value_enum, default_value_t = Mode::Search)]
        mode: Mode,

        /// Ranking bias (defaults to the configured preference)
        #[arg(short, long, value_enum)]
        preference: Option<Preference>,

        /// Limit results
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Use the built-in catalog instead of the backend
        #[arg(long, default_value_t = false)]
        offline: bool,
    },

    /// Compare results side by side
    Compare {
        /// Search query
        query: String,

        #[arg(short, long, value_enum)]
        preference: Option<Preference>,

        /// Column to sort by
        #[arg(short, long, value_enum, default_value_t = SortField::Rating)]
        sort: SortField,

        /// Sort ascending instead of descending
        #[arg(long, default_value_t = false)]
        asc: bool,

        /// Only rows whose name contains this text
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Premium or Value
        #[arg(short, long, value_enum, ignore_case = true)]
        category: Option<Category>,

        #[arg(long, default_value_t = false)]
        json: bool,

        #[arg(long, default_value_t = false)]
        offline: bool,
    },

    /// Price distribution, brand breakdown and averages
    Insights {
        /// Search query
        query: String,

        #[arg(short, long, value_enum)]
        preference: Option<Preference>,

        #[arg(long, default_value_t = false)]
        json: bool,

        #[arg(long, default_value_t = false)]
        offline: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, mode, preference, limit, json, offline } => {
            search::run(&query, mode, preference, limit, json, offline).await?;
        }
        Commands::Compare { query, preference, sort, asc, filter, category, json, offline } => {
            let opts = CompareOptions {
                preference,
                sort,
                ascending: asc,
                filter,
                category,
                json,
                offline,
            };
            compare::run(&query, opts).await?;
        }
        Commands::Insights { query, preference, json, offline } => {
            insights::run(&query, preference, json, offline).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let c = crate::core::config::load_config()?;
                println!("{:#?}", c);
            }
            ConfigAction::Path => println!("{}", crate::core::config::config_path().display()),
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_flag_spellings() {
        for spelled in ["Premium", "premium", "PREMIUM"] {
            let cli = Cli::try_parse_from(["pricelens", "compare", "q", "--category", spelled]).unwrap();
            match cli.command {
                Commands::Compare { category, .. } => assert_eq!(category, Some(Category::Premium)),
                _ => panic!("expected compare"),
            }
        }
        assert!(Cli::try_parse_from(["pricelens", "compare", "q", "--category", "Value"]).is_ok());
        assert!(Cli::try_parse_from(["pricelens", "compare", "q", "--category", "luxury"]).is_err());
    }

    #[test]
    fn test_preference_flag_uses_snake_case() {
        let cli = Cli::try_parse_from(["pricelens", "search", "q", "--preference", "best_value"]).unwrap();
        match cli.command {
            Commands::Search { preference, .. } => assert_eq!(preference, Some(Preference::BestValue)),
            _ => panic!("expected search"),
        }
    }
}
