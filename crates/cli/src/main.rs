//! Quitanda CLI - the storefront's page interactions in a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the product listing
//! quitanda catalog list
//!
//! # Add one unit of a product, like the listing's add button
//! quitanda cart add cafe-torrado
//!
//! # Show the cart page
//! quitanda cart show
//!
//! # Finish the purchase (simulated)
//! quitanda cart checkout
//! ```
//!
//! Each run plays the role of one page load: the persisted cart is
//! loaded eagerly, one interaction runs, and the result is persisted.
//!
//! # Commands
//!
//! - `catalog list` - Product listing
//! - `cart add|remove|set-quantity|show|clear|checkout` - Cart operations
//! - `contact` - Contact form

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use quitanda_storefront::config::StoreConfig;

mod commands;

#[derive(Parser)]
#[command(name = "quitanda")]
#[command(author, version, about = "Quitanda storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Send a message through the contact form
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your email address
        #[arg(short, long)]
        email: String,

        /// The message text
        #[arg(short, long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List every product on the storefront
    List,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product slug from the catalog
        #[arg(required_unless_present = "item_name", conflicts_with = "item_name")]
        slug: Option<String>,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Ad-hoc item name (instead of a catalog slug)
        #[arg(long = "name", requires = "price")]
        item_name: Option<String>,

        /// Ad-hoc price text, e.g. "R$ 12,50"
        #[arg(long, requires = "item_name")]
        price: Option<String>,

        /// Ad-hoc image reference
        #[arg(long, requires = "item_name")]
        image: Option<String>,
    },
    /// Remove a product from the cart
    Remove {
        /// Product name as shown in the cart
        name: String,
    },
    /// Change the quantity of a product already in the cart
    SetQuantity {
        /// Product name as shown in the cart
        name: String,

        /// New quantity; 0 removes the item
        quantity: u32,
    },
    /// Show the cart page
    Show {
        /// Print the rendered HTML instead of the text summary
        #[arg(long)]
        html: bool,
    },
    /// Empty the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Finish the purchase (simulated)
    Checkout {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quitanda=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> quitanda_storefront::error::Result<()> {
    let config = StoreConfig::from_env()?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&config),
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                slug,
                quantity,
                item_name,
                price,
                image,
            } => match (slug, item_name, price) {
                (Some(slug), None, _) => {
                    commands::cart::add_from_catalog(&config, &slug, quantity)
                }
                (None, Some(name), Some(price)) => {
                    commands::cart::add_custom(&config, &name, &price, quantity, image)
                }
                // clap's requires/conflicts rules keep this arm unreachable
                _ => Ok(()),
            },
            CartAction::Remove { name } => commands::cart::remove(&config, &name),
            CartAction::SetQuantity { name, quantity } => {
                commands::cart::set_quantity(&config, &name, quantity)
            }
            CartAction::Show { html } => commands::cart::show(&config, html),
            CartAction::Clear { yes } => commands::cart::clear(&config, yes),
            CartAction::Checkout { yes } => commands::cart::checkout(&config, yes),
        },
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::submit(&name, &email, &message),
    }
}
