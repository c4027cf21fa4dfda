//! Product catalog loaded from markdown content files.
//!
//! Each product lives in `content/products/<slug>.md` with YAML front
//! matter carrying exactly what the listing page shows: the product
//! name, the price as display text (e.g. `"R$ 12,50"`), and an optional
//! image reference. The markdown body becomes the product description.
//! Adding a product to the cart scrapes these plain-text values; in
//! particular the price text flows into the cart unparsed, the same way
//! it appears on the page.

use std::path::Path;

use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;

/// Front matter for a product file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductMeta {
    /// Product name as shown on the listing.
    pub name: String,
    /// Price display text, e.g. `"R$ 12,50"`.
    pub price: String,
    /// Optional product image reference.
    #[serde(default)]
    pub image: Option<String>,
}

/// A product with its rendered description.
#[derive(Debug, Clone)]
pub struct Product {
    pub slug: String,
    pub meta: ProductMeta,
    pub description_html: String,
}

/// Errors raised while loading the catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// All products available on the storefront, in name order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load every product under `<content_dir>/products`.
    ///
    /// A missing directory yields an empty catalog; individual files
    /// that fail to parse are skipped with an error log.
    ///
    /// # Errors
    ///
    /// Returns an error if the products directory exists but cannot be
    /// read.
    pub fn load(content_dir: &Path) -> Result<Self, CatalogError> {
        let dir = content_dir.join("products");
        let mut products = Vec::new();

        if !dir.exists() {
            tracing::warn!("Products directory does not exist: {:?}", dir);
            return Ok(Self { products });
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| CatalogError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_product(&path) {
                    Ok(product) => {
                        tracing::info!("Loaded product: {}", product.slug);
                        products.push(product);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load product {:?}: {}", path, e);
                    }
                }
            }
        }

        products.sort_by(|a, b| a.meta.name.cmp(&b.meta.name));

        Ok(Self { products })
    }

    /// Load a single product from a markdown file.
    fn load_product(path: &Path) -> Result<Product, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CatalogError::Parse("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<ProductMeta> = matter
            .parse(&content)
            .map_err(|e| CatalogError::Parse(format!("Failed to parse front matter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| CatalogError::Parse("Missing front matter".to_string()))?;

        let description_html = render_markdown(&parsed.content);

        Ok(Product {
            slug,
            meta,
            description_html,
        })
    }

    /// Get a product by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// All products in name order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns `true` if no products are available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Render a product description to HTML.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    markdown_to_html(content, &options)
}
