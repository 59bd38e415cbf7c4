//! Flohmarkt admin console.
//!
//! Drives the same controller as the web panel, asking for confirmations
//! and names on the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List products with their status
//! fm-admin products list
//!
//! # Approve or reject a pending product
//! fm-admin products approve 12
//! fm-admin products reject 12
//!
//! # Delete without the confirmation question
//! fm-admin --yes products delete 12
//!
//! # Manage categories
//! fm-admin categories add "أدوات منزلية"
//! fm-admin categories rename 3 "أثاث"
//! fm-admin categories delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `FLOHMARKT_API_URL` - Backend base URL (required)
//! - `FLOHMARKT_API_SESSION` - Backend session cookie

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use flohmarkt_core::{CategoryId, ProductId};

mod commands;

use commands::TerminalDialogs;

#[derive(Parser)]
#[command(name = "fm-admin")]
#[command(author, version, about = "Flohmarkt admin console")]
struct Cli {
    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review and manage product listings
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// List registered users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List all products
    List,
    /// Approve a pending product
    Approve { id: ProductId },
    /// Reject a pending product
    Reject { id: ProductId },
    /// Delete a product
    Delete { id: ProductId },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// List categories with their product counts
    List,
    /// Add a category (asks for the name when omitted)
    Add { name: Option<String> },
    /// Rename a category (asks for the name when omitted)
    Rename { id: CategoryId, name: Option<String> },
    /// Delete a category
    Delete { id: CategoryId },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let controller = commands::connect()?;

    match cli.command {
        Commands::Products { action } => {
            let dialogs = TerminalDialogs::new(cli.yes, None);
            match action {
                ProductsAction::List => commands::products::list(&controller).await?,
                ProductsAction::Approve { id } => {
                    commands::products::approve(&controller, id).await?;
                }
                ProductsAction::Reject { id } => {
                    commands::products::reject(&controller, id, &dialogs).await?;
                }
                ProductsAction::Delete { id } => {
                    commands::products::delete(&controller, id, &dialogs).await?;
                }
            }
        }
        Commands::Users { action } => match action {
            UsersAction::List => commands::users::list(&controller).await?,
        },
        Commands::Categories { action } => match action {
            CategoriesAction::List => commands::categories::list(&controller).await?,
            CategoriesAction::Add { name } => {
                let dialogs = TerminalDialogs::new(cli.yes, name);
                commands::categories::add(&controller, &dialogs).await?;
            }
            CategoriesAction::Rename { id, name } => {
                let dialogs = TerminalDialogs::new(cli.yes, name);
                commands::categories::rename(&controller, id, &dialogs).await?;
            }
            CategoriesAction::Delete { id } => {
                let dialogs = TerminalDialogs::new(cli.yes, None);
                commands::categories::delete(&controller, id, &dialogs).await?;
            }
        },
    }
    Ok(())
}
