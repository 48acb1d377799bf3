// src/main.rs
//! skygarden CLI: browse the library inventory and add books.

use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use skygarden::application::session::{BOOKS_NOT_LOADED, NO_MATCHING_BOOKS};
use skygarden::application::{BookRowDto, CatalogSession, SubmitOutcome};
use skygarden::{validate_book_input_today, AppConfig, AppState, BookInput, ValidationReport};

#[derive(Parser)]
#[command(name = "skygarden", version, about = "SkyGarden library inventory")]
struct Cli {
    /// Base URL of the library REST API (overrides SKYGARDEN_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books, ascending by quantity.
    List {
        /// Case-insensitive part of the book name.
        #[arg(long, default_value = "")]
        name: String,

        /// Only books of this category id.
        #[arg(long, default_value = "")]
        category: String,

        /// Print rows as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List categories.
    Categories,

    /// Add a new book.
    Add {
        /// Book code, e.g. BO-0001.
        #[arg(long, default_value = "")]
        code: String,

        #[arg(long, default_value = "")]
        name: String,

        /// Category id.
        #[arg(long, default_value = "")]
        category: String,

        /// Import date as YYYY-MM-DD.
        #[arg(long, default_value = "")]
        import_date: String,

        #[arg(long, default_value = "")]
        quantity: String,

        /// Only validate, do not send anything.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }

    let state = AppState::from_config(config)?;
    let mut session = state.new_session();
    session.reload(&state.library_service).await;

    match cli.command {
        Commands::List {
            name,
            category,
            json,
        } => {
            if let Some(banner) = session.banner() {
                bail!("{}", banner);
            }

            session.set_name_query(name);
            session.set_category_filter(category);
            let rows = session.rows();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("{}", NO_MATCHING_BOOKS);
            } else {
                print_table(&rows);
            }
        }

        Commands::Categories => {
            if session.categories().is_empty() {
                if let Some(banner) = session.banner() {
                    bail!("{}", banner);
                }
            }
            for option in session.category_options() {
                println!("{:>6}  {}", option.value, option.label);
            }
        }

        Commands::Add {
            code,
            name,
            category,
            import_date,
            quantity,
            dry_run,
        } => {
            // Without the current list neither uniqueness nor the next id can be trusted
            if !session.books_loaded() {
                bail!("{}", session.banner().unwrap_or(BOOKS_NOT_LOADED));
            }

            let input = BookInput {
                code,
                name,
                category_id: category,
                import_date,
                quantity,
            };

            if dry_run {
                let report = validate_book_input_today(&input, session.books());
                if !report.is_valid() {
                    print_field_errors(&report);
                    bail!("Book input is invalid");
                }
                println!("Book input is valid");
                return Ok(());
            }

            submit(&mut session, &state, &input).await?;
        }
    }

    Ok(())
}

async fn submit(session: &mut CatalogSession, state: &AppState, input: &BookInput) -> Result<()> {
    let outcome = session.submit(&state.library_service, input).await;
    let flash_text = session
        .flash(Instant::now())
        .map(|flash| flash.text.clone())
        .unwrap_or_default();

    match outcome {
        SubmitOutcome::Created(book) => {
            println!("{} (id {})", flash_text, book.id);
            Ok(())
        }
        SubmitOutcome::Invalid(report) => {
            print_field_errors(&report);
            bail!("Book input is invalid")
        }
        SubmitOutcome::Failed(response) => {
            eprintln!("{}", flash_text);
            if let Some(details) = response.details {
                eprintln!("  {}", details);
            }
            bail!("{}", response.message)
        }
    }
}

fn print_field_errors(report: &ValidationReport) {
    for (field, message) in report.errors() {
        eprintln!("  {}: {}", field, message);
    }
}

fn print_table(rows: &[BookRowDto]) {
    println!(
        "{:>4}  {:<8}  {:<40}  {:<20}  {:<10}  {:>8}",
        "#", "Code", "Name", "Category", "Imported", "Quantity"
    );
    for row in rows {
        println!(
            "{:>4}  {:<8}  {:<40}  {:<20}  {:<10}  {:>8}",
            row.position, row.code, row.name, row.category, row.import_date, row.quantity
        );
    }
}
