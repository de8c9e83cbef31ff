use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use serde::Serialize;
use library_inventory::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use library_inventory::catalog::command::find_book_cmd::{FindBookCommand, FindBookCommandRequest};
use library_inventory::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use library_inventory::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use library_inventory::catalog::factory;
use library_inventory::checkout::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use library_inventory::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use library_inventory::core::command::{Command, CommandError};
use library_inventory::core::domain::Configuration;
use library_inventory::utils::logs::{setup_json_tracing, setup_tracing};

#[derive(Parser)]
#[command(name = "catalog", about = "Book inventory backed by a JSON mirror file")]
struct Cli {
    /// Location of the catalog mirror file [default: $LMS_CATALOG_FILE or data/catalog.json]
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Emit diagnostics as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book unless its ISBN is already catalogued
    Add {
        isbn: String,
        title: String,
        #[arg(long, default_value = "")]
        author: String,
    },
    /// Look up a book by exact ISBN
    Find { isbn: String },
    /// Case-insensitive title substring search
    Search { title: String },
    /// Print every book in catalog order
    List,
    /// Check a book out
    Issue { isbn: String },
    /// Check a book back in
    Return { isbn: String },
}

fn print_json<T: Serialize>(res: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(res)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = match cli.data_file.as_deref() {
        Some(path) => Configuration::new(path),
        None => Configuration::from_env(),
    };
    let svc = factory::create_catalog_service(&config);
    match cli.command {
        Commands::Add { isbn, title, author } => {
            let res = AddBookCommand::new(svc)
                .execute(AddBookCommandRequest::new(isbn.as_str(), title.as_str(), author.as_str())).await?;
            print_json(&res)
        }
        Commands::Find { isbn } => {
            let res = FindBookCommand::new(svc).execute(FindBookCommandRequest { isbn }).await?;
            print_json(&res)
        }
        Commands::Search { title } => {
            let res = SearchBooksCommand::new(svc).execute(SearchBooksCommandRequest { title }).await?;
            print_json(&res)
        }
        Commands::List => {
            let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await?;
            for line in res.lines {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Issue { isbn } => {
            let res = IssueBookCommand::new(svc).execute(IssueBookCommandRequest::new(isbn)).await?;
            print_json(&res)
        }
        Commands::Return { isbn } => {
            let res = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(isbn)).await?;
            print_json(&res)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.json_logs {
        setup_json_tracing();
    } else {
        setup_tracing();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("command failed: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
