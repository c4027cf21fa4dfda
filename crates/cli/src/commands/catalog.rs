//! Product listing.

use quitanda_storefront::catalog::Catalog;
use quitanda_storefront::config::StoreConfig;
use quitanda_storefront::error::Result;

/// Print the product listing with add-to-cart affordances.
pub fn list(config: &StoreConfig) -> Result<()> {
    let catalog = Catalog::load(&config.content_dir)?;

    if catalog.is_empty() {
        println!("Nenhum produto disponível no momento.");
        return Ok(());
    }

    for product in catalog.products() {
        println!(
            "{:<24} {:<32} {:>12}",
            product.slug, product.meta.name, product.meta.price
        );
    }
    println!();
    println!("Use `quitanda cart add <produto>` para adicionar ao carrinho.");
    Ok(())
}
