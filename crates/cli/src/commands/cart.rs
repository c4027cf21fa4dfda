//! Cart page interactions.

use std::io::{self, Write as _};

use askama::Template;
use quitanda_storefront::cart::{
    CartDisplay, CartError, CartStore, FileStorage, NotificationCenter,
};
use quitanda_storefront::catalog::Catalog;
use quitanda_storefront::config::StoreConfig;
use quitanda_storefront::error::{AppError, Result};
use quitanda_storefront::views::{CartCountTemplate, CartShowTemplate, CartView};

/// Terminal stand-in for the page's display collaborators: the nav
/// badge becomes a printed line, notifications go through the overlay
/// model before being printed.
#[derive(Default)]
struct TerminalDisplay {
    notifications: NotificationCenter,
}

impl CartDisplay for TerminalDisplay {
    fn refresh_badge(&mut self, count: u32) {
        match (CartCountTemplate { count }).render() {
            Ok(badge) if badge.trim().is_empty() => println!("Carrinho"),
            Ok(badge) => println!("Carrinho {}", badge.trim()),
            Err(e) => tracing::error!("Failed to render cart badge: {e}"),
        }
    }

    fn notify(&mut self, message: &str) {
        self.notifications.show(message);
        if let Some(notification) = self.notifications.visible() {
            println!("● {}", notification.message());
        }
    }
}

/// Open the persistent cart with the terminal display attached.
fn open_store(config: &StoreConfig) -> Result<CartStore<FileStorage>> {
    let storage = FileStorage::open(&config.data_dir).map_err(CartError::from)?;
    Ok(CartStore::with_display(
        storage,
        Box::new(TerminalDisplay::default()),
    ))
}

/// The listing's add button: scrape name, price text, and image from
/// the catalog entry and add them to the cart.
pub fn add_from_catalog(config: &StoreConfig, slug: &str, quantity: u32) -> Result<()> {
    let catalog = Catalog::load(&config.content_dir)?;
    let product = catalog
        .get(slug)
        .ok_or_else(|| AppError::NotFound(format!("product '{slug}'")))?;

    let mut store = open_store(config)?;
    store.add_item(
        &product.meta.name,
        &product.meta.price,
        quantity,
        product.meta.image.clone(),
    )?;
    Ok(())
}

/// Add an item that is not in the catalog.
pub fn add_custom(
    config: &StoreConfig,
    name: &str,
    price: &str,
    quantity: u32,
    image: Option<String>,
) -> Result<()> {
    let mut store = open_store(config)?;
    store.add_item(name, price, quantity, image)?;
    Ok(())
}

/// Remove an item by name.
pub fn remove(config: &StoreConfig, name: &str) -> Result<()> {
    let mut store = open_store(config)?;
    store.remove_item(name)?;
    Ok(())
}

/// Change an item's quantity; 0 removes it.
pub fn set_quantity(config: &StoreConfig, name: &str, quantity: u32) -> Result<()> {
    let mut store = open_store(config)?;
    store.set_quantity(name, quantity)?;
    Ok(())
}

/// Show the cart page: a text summary, or the rendered HTML with
/// `html` set.
pub fn show(config: &StoreConfig, html: bool) -> Result<()> {
    let store = open_store(config)?;
    let cart = CartView::from(&store);

    if html {
        println!("{}", (CartShowTemplate { cart }).render()?);
        return Ok(());
    }

    if cart.items.is_empty() {
        println!("Seu carrinho está vazio.");
    } else {
        for item in &cart.items {
            println!(
                "{:<30} x{:<3} {:>12} {:>12}",
                item.name, item.quantity, item.unit_price, item.line_total
            );
        }
    }
    println!("Total: {}", cart.total);
    Ok(())
}

/// Empty the cart after a confirmation prompt.
pub fn clear(config: &StoreConfig, yes: bool) -> Result<()> {
    if !yes && !confirm("Tem certeza que deseja limpar o carrinho?") {
        return Ok(());
    }

    let mut store = open_store(config)?;
    store.clear()?;
    Ok(())
}

/// Simulated checkout: refuse on an empty cart, confirm the total,
/// then thank and clear.
pub fn checkout(config: &StoreConfig, yes: bool) -> Result<()> {
    let mut store = open_store(config)?;

    if store.is_empty() {
        println!("Seu carrinho está vazio!");
        return Ok(());
    }

    let total = store.total();
    if !yes && !confirm(&format!("Finalizar compra no valor de {total}?")) {
        return Ok(());
    }

    println!("Compra finalizada com sucesso! Obrigado pela preferência.");
    store.clear()?;
    Ok(())
}

/// Blocking yes/no prompt; anything but "s"/"sim" declines.
fn confirm(question: &str) -> bool {
    print!("{question} [s/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "s" | "sim")
}
