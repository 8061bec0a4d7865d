use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use lms_catalog::catalog::command::export_books_cmd::{ExportBooksCommand, ExportBooksCommandRequest};
use lms_catalog::catalog::factory::create_catalog_service;
use lms_catalog::categories::command::count_categories_cmd::{CountCategoriesCommand, CountCategoriesCommandRequest};
use lms_catalog::categories::factory::create_category_registry;
use lms_catalog::core::command::{Command, CommandError};
use lms_catalog::core::domain::Configuration;
use lms_catalog::core::library::LibraryError;
use lms_catalog::search::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use lms_catalog::utils::logs::setup_tracing;

/// Browse the branch catalog from the command line. Output is JSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
struct Cli {
    /// Start from an empty catalog instead of the sample collection
    #[arg(long)]
    empty: bool,

    #[command(subcommand)]
    command: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Print every book in catalog order
    List,
    /// Print books whose field contains the query, ignoring case
    Search {
        /// One of title, author, category, isbn
        #[arg(long, default_value = "title")]
        by: String,
        #[arg(default_value = "")]
        query: String,
    },
    /// Print the number of books in each registered category
    Categories,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value).map_err(LibraryError::from)?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<(), CommandError> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = Configuration::from_env();
    if cli.empty {
        config = config.without_samples();
    }
    info!(branch = config.branch_id.as_str(), samples = config.load_sample_books, "starting catalog");

    let catalog_svc = create_catalog_service(&config);
    match cli.command {
        Action::List => {
            let res = ExportBooksCommand::new(catalog_svc).execute(ExportBooksCommandRequest::default())?;
            print_json(&res)
        }
        Action::Search { by, query } => {
            let res = SearchBooksCommand::new(catalog_svc).execute(SearchBooksCommandRequest::new(by.as_str(), query.as_str()))?;
            info!(summary = res.summary.as_str(), "search finished");
            print_json(&res)
        }
        Action::Categories => {
            let registry = create_category_registry(&config);
            let res = CountCategoriesCommand::new(catalog_svc, registry).execute(CountCategoriesCommandRequest::default())?;
            print_json(&res)
        }
    }
}
