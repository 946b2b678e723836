//! # Grocer CLI Library
//!
//! The presentation layer of Grocer: argument parsing, the subcommand
//! surface, and process-level wiring (logging, data directory).
//!
//! ## Command Surface
//! ```text
//! grocer                         help + about (the home view)
//! grocer list                    the inventory list view
//! grocer add --id .. --name ..   the add form
//! grocer update <ID> [--flags]   the edit form (omitted fields keep
//!                                their stored value)
//! grocer delete <ID> [--yes]     delete with confirmation prompt
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Determine the data directory (env override, else platform dir)
//! 3. Open the inventory store (loads the persisted inventory)
//! 4. Dispatch to the subcommand handler

pub mod commands;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use grocer_core::{Category, Money, Product};
use grocer_store::{FileStorage, InventoryStore};

use commands::update::Edits;
use error::{CliError, CliResult};

// =============================================================================
// Argument Surface
// =============================================================================

/// Grocery inventory manager.
#[derive(Parser)]
#[command(
    name = "grocer",
    version,
    about = "Manage your store inventory efficiently"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the inventory list.
    List,

    /// Add a new product to the inventory.
    Add {
        /// Product id, the unique lookup key.
        #[arg(long = "id")]
        product_id: String,

        /// Product category: fruits, vegetables, or dairy.
        #[arg(long, default_value_t)]
        category: Category,

        /// Product name.
        #[arg(long = "name")]
        product_name: String,

        /// Units on hand.
        #[arg(long)]
        quantity: i64,

        /// Maximum retail price, e.g. 50 or 49.99.
        #[arg(long)]
        mrp: Money,

        /// Selling price, e.g. 45 or 44.50.
        #[arg(long)]
        selling_price: Money,
    },

    /// Edit an existing product; omitted fields keep their stored value.
    Update {
        /// Id of the product to edit.
        product_id: String,

        /// New category.
        #[arg(long)]
        category: Option<Category>,

        /// New product name.
        #[arg(long = "name")]
        product_name: Option<String>,

        /// New quantity.
        #[arg(long)]
        quantity: Option<i64>,

        /// New maximum retail price.
        #[arg(long)]
        mrp: Option<Money>,

        /// New selling price.
        #[arg(long)]
        selling_price: Option<Money>,
    },

    /// Delete a product from the inventory.
    Delete {
        /// Id of the product to delete.
        product_id: String,

        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the CLI. Returns the process exit code.
pub fn run() -> i32 {
    init_tracing();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// Opens the store and dispatches to the subcommand handler.
fn execute(cli: Cli) -> CliResult<()> {
    let dir = data_dir()?;
    debug!(dir = %dir.display(), "using data directory");

    let mut store = InventoryStore::open(FileStorage::new(dir));

    match cli.command {
        Commands::List => commands::list::run(&store),
        Commands::Add {
            product_id,
            category,
            product_name,
            quantity,
            mrp,
            selling_price,
        } => {
            let product = Product {
                product_id,
                category,
                product_name,
                quantity,
                mrp,
                selling_price,
            };
            commands::add::run(&mut store, product)
        }
        Commands::Update {
            product_id,
            category,
            product_name,
            quantity,
            mrp,
            selling_price,
        } => {
            let edits = Edits {
                category,
                product_name,
                quantity,
                mrp,
                selling_price,
            };
            commands::update::run(&mut store, &product_id, edits)
        }
        Commands::Delete { product_id, yes } => commands::delete::run(&mut store, &product_id, yes),
    }
}

// =============================================================================
// Process Wiring
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so `grocer list` output stays clean for pipes.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grocer=trace` - Show trace for grocer crates only
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the data directory for the inventory file.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.grocer.grocer`
/// - **Windows**: `%APPDATA%\grocer\grocer\data`
/// - **Linux**: `~/.local/share/grocer`
///
/// ## Development Override
/// Set the `GROCER_DATA_DIR` environment variable to use a custom path.
/// The directory is created on first write, not here.
fn data_dir() -> CliResult<PathBuf> {
    // Check for override
    if let Ok(dir) = std::env::var("GROCER_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    // Use the platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "grocer", "grocer")
        .ok_or_else(|| CliError::DataDir("no home directory available".to_string()))?;

    Ok(proj_dirs.data_dir().to_path_buf())
}
