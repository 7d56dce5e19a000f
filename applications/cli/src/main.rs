/// Tunebook - ABC corpus loader and query tool
use clap::{Parser, Subcommand};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebook_core::Tune;
use tunebook_importer::CorpusImporter;

#[derive(Parser)]
#[command(name = "tunebook")]
#[command(about = "Load ABC tune corpora into SQLite and query them", long_about = None)]
struct Cli {
    /// SQLite connection string
    #[arg(
        long,
        global = true,
        env = "TUNEBOOK_DATABASE_URL",
        default_value = "sqlite://tunes.db"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an ABC corpus from numbered book directories
    Import {
        /// Corpus root directory
        root: PathBuf,

        /// Append to the stored corpus instead of replacing it
        #[arg(long)]
        append: bool,
    },
    /// Show tune counts per book
    Books,
    /// List the tunes of one book
    List {
        /// Book number
        #[arg(short, long)]
        book: i64,

        /// Print full ABC text instead of one-line summaries
        #[arg(long)]
        full: bool,
    },
    /// Search stored tunes (case-insensitive substring match)
    Search {
        /// Match against titles
        #[arg(long, conflicts_with_all = ["rhythm", "key"])]
        title: Option<String>,

        /// Match against rhythm/type
        #[arg(long, conflicts_with = "key")]
        rhythm: Option<String>,

        /// Match against key signatures
        #[arg(long)]
        key: Option<String>,

        /// Print full ABC text instead of one-line summaries
        #[arg(long)]
        full: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunebook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let pool = connect(&cli.database_url).await?;

    match cli.command {
        Commands::Import { root, append } => {
            import(&pool, &root, append).await?;
        }
        Commands::Books => {
            books(&pool).await?;
        }
        Commands::List { book, full } => {
            let tunes = tunebook_storage::tunes::get_by_book(&pool, book).await?;
            print_tunes(&tunes, full);
        }
        Commands::Search {
            title,
            rhythm,
            key,
            full,
        } => {
            let tunes = match (title, rhythm, key) {
                (Some(q), _, _) => tunebook_storage::tunes::search_title(&pool, &q).await?,
                (_, Some(q), _) => tunebook_storage::tunes::search_type(&pool, &q).await?,
                (_, _, Some(q)) => tunebook_storage::tunes::search_key(&pool, &q).await?,
                (None, None, None) => {
                    anyhow::bail!("pass one of --title, --rhythm or --key");
                }
            };
            print_tunes(&tunes, full);
        }
    }

    Ok(())
}

async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = tunebook_storage::create_pool(database_url).await?;
    tunebook_storage::run_migrations(&pool).await?;
    Ok(pool)
}

async fn import(pool: &SqlitePool, root: &std::path::Path, append: bool) -> anyhow::Result<()> {
    tracing::info!("Importing corpus from {}", root.display());

    let summary = CorpusImporter::new(pool.clone())
        .replace(!append)
        .import_directory(root)
        .await?;

    println!(
        "Imported {} tunes from {} files in {}s",
        summary.tunes_imported, summary.files_loaded, summary.duration_seconds
    );
    if summary.rows_cleared > 0 {
        println!("Replaced {} previously stored tunes", summary.rows_cleared);
    }
    for (path, reason) in &summary.skipped {
        println!("Skipped {}: {}", path.display(), reason);
    }

    Ok(())
}

async fn books(pool: &SqlitePool) -> anyhow::Result<()> {
    let counts = tunebook_storage::tunes::count_by_book(pool).await?;

    if counts.is_empty() {
        println!("No tunes stored. Run `tunebook import <root>` first.");
        return Ok(());
    }

    println!("Book  Tunes");
    for count in counts {
        println!("{:<5} {}", count.book_number, count.tunes);
    }

    Ok(())
}

/// Print query results. Display options are passed in explicitly; there is
/// no process-wide formatting state.
fn print_tunes(tunes: &[Tune], full: bool) {
    if tunes.is_empty() {
        println!("No matching tunes.");
        return;
    }

    for tune in tunes {
        if full {
            println!("{}", tune.raw_text);
            println!();
        } else {
            println!(
                "[book {}] {}  ({}, {})",
                tune.book_number,
                tune.display_name(),
                tune.tune_type.as_deref().unwrap_or("-"),
                tune.key_signature.as_deref().unwrap_or("-"),
            );
        }
    }
    println!("{} tune(s)", tunes.len());
}
