//! Bookshelf CLI
//!
//! Command-line front end for the book store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use bookshelf::config::DEFAULT_STORAGE_KEY;
use bookshelf::render::{render_book, render_shelves};
use bookshelf::store::{Command, Outcome};
use bookshelf::{BookForm, BookPayload, BookStore, BookshelfError, Config, FileStorage};

/// Bookshelf CLI
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Track the books you are reading and have finished")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./bookshelf_data")]
    data_dir: String,

    /// Storage key the collection is kept under
    #[arg(short, long, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        author: String,

        #[arg(short, long)]
        year: String,

        /// Put the book on the finished shelf
        #[arg(short, long)]
        complete: bool,
    },

    /// Edit a book; omitted fields keep their current value
    Edit {
        id: u64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        /// New finished flag
        #[arg(short, long)]
        complete: Option<bool>,
    },

    /// Move a book to the other shelf
    Toggle { id: u64 },

    /// Delete a book
    Delete { id: u64 },

    /// Show both shelves
    List {
        /// Only titles containing this text (any case)
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookshelf=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Bookshelf v{}", bookshelf::VERSION);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .storage_key(&args.key)
        .build();

    let mut store = match BookStore::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open book store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut store, args.command) {
        match e {
            BookshelfError::InvalidInput => eprintln!("{}", e),
            _ => tracing::error!("{}", e),
        }
        std::process::exit(1);
    }
}

fn run(store: &mut BookStore<FileStorage>, command: Commands) -> bookshelf::Result<()> {
    let outcome = match command {
        Commands::List { search } => {
            print!("{}", render_shelves(&store.query(search.trim())));
            return Ok(());
        }
        Commands::Add {
            title,
            author,
            year,
            complete,
        } => store.execute(Command::Add {
            payload: BookPayload::new(title, author, year).complete(complete),
        })?,
        Commands::Edit {
            id,
            title,
            author,
            year,
            complete,
        } => {
            let mut form = BookForm::new();
            let Some(current) = form.begin_edit(store, id) else {
                eprintln!("No book with id {}", id);
                return Ok(());
            };
            let payload = BookPayload {
                title: title.unwrap_or(current.title),
                author: author.unwrap_or(current.author),
                year: year.unwrap_or(current.year),
                is_complete: complete.unwrap_or(current.is_complete),
            };
            form.submit(store, &payload)?
        }
        Commands::Toggle { id } => store.execute(Command::Toggle { id })?,
        Commands::Delete { id } => store.execute(Command::Delete { id })?,
    };

    report(store, outcome);
    Ok(())
}

fn report(store: &BookStore<FileStorage>, outcome: Outcome) {
    match outcome {
        Outcome::Added(id) | Outcome::Updated(id) => {
            if let Some(book) = store.get(id) {
                println!("{}", render_book(book));
            }
        }
        Outcome::Toggled { id, is_complete } => {
            println!(
                "Moved {} to the {} shelf",
                id,
                bookshelf::form::shelf_name(is_complete)
            );
        }
        Outcome::Deleted(id) => println!("Deleted {}", id),
        Outcome::NotFound(id) => eprintln!("No book with id {}", id),
    }
}
