//! Cart state, mutation, and persistence.

use quitanda_core::{Price, PriceParseError};
use tracing::{debug, warn};

use super::display::{CartDisplay, NullDisplay};
use super::item::LineItem;
use super::storage::{CartStorage, StorageError};

/// Storage key under which the cart is persisted.
pub const CART_KEY: &str = "cart";

/// Errors raised by cart operations.
#[derive(thiserror::Error, Debug)]
pub enum CartError {
    /// The price text on an added item was rejected.
    #[error(transparent)]
    Price(#[from] PriceParseError),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart state could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An item was added with a quantity of zero.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// The shopping cart: an ordered list of line items, persisted in full
/// after every mutation.
///
/// Construction eagerly loads whatever the storage holds; absent or
/// unreadable data yields an empty cart rather than an error. Display
/// collaborators are injected through [`CartDisplay`], keeping state
/// separate from rendering.
pub struct CartStore<S: CartStorage> {
    items: Vec<LineItem>,
    storage: S,
    display: Box<dyn CartDisplay>,
}

impl<S: CartStorage> CartStore<S> {
    /// Open a cart over `storage` with no display attached.
    #[must_use]
    pub fn open(storage: S) -> Self {
        Self::with_display(storage, Box::new(NullDisplay))
    }

    /// Open a cart over `storage`, wiring display side effects to
    /// `display`. The badge is refreshed once with the loaded count.
    #[must_use]
    pub fn with_display(storage: S, display: Box<dyn CartDisplay>) -> Self {
        let mut store = Self {
            items: Vec::new(),
            storage,
            display,
        };
        store.load();
        store.refresh_badge();
        store
    }

    /// Re-read persisted state, replacing the in-memory items.
    ///
    /// Missing or malformed data is treated as an empty cart; this
    /// operation never fails.
    pub fn load(&mut self) -> &[LineItem] {
        self.items = match self.storage.read(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Discarding unreadable cart data: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read persisted cart: {e}");
                Vec::new()
            }
        };
        &self.items
    }

    /// Persist the full cart state, then refresh the counter badge.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save(&mut self) -> Result<(), CartError> {
        let payload = serde_json::to_string(&self.items)?;
        self.storage.write(CART_KEY, &payload)?;
        self.refresh_badge();
        Ok(())
    }

    /// Recompute the item count and push it to the display's counter
    /// badge.
    pub fn refresh_badge(&mut self) {
        let count = self.item_count();
        self.display.refresh_badge(count);
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// `price_text` is the listing's display text (e.g. `"R$ 12,50"`) and
    /// is parsed through [`Price::parse`]. If an item with the same name
    /// already exists its quantity is incremented and its stored price
    /// kept; otherwise a new line item is appended. Persists and emits a
    /// notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the price text is rejected, the quantity is
    /// zero, or persisting fails.
    pub fn add_item(
        &mut self,
        name: &str,
        price_text: &str,
        quantity: u32,
        image_ref: Option<String>,
    ) -> Result<(), CartError> {
        let unit_price = Price::parse(price_text)?;
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        match self.items.iter_mut().find(|item| item.name == name) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(LineItem {
                name: name.to_owned(),
                unit_price,
                quantity,
                image_ref,
            }),
        }

        self.save()?;
        self.display.notify(&format!("{name} adicionado ao carrinho!"));
        Ok(())
    }

    /// Remove the item named `name` from the cart.
    ///
    /// Persists and notifies only when something was actually removed;
    /// an unknown name is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove_item(&mut self, name: &str) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        if self.items.len() == before {
            debug!("Ignoring removal of unknown cart item: {name}");
            return Ok(());
        }

        self.save()?;
        self.display.notify("Produto removido do carrinho!");
        Ok(())
    }

    /// Set the quantity of the item named `name`.
    ///
    /// A quantity of zero removes the item. An unknown name is a silent
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove_item(name);
        }

        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.quantity = quantity;
                self.save()
            }
            None => {
                debug!("Ignoring quantity update for unknown cart item: {name}");
                Ok(())
            }
        }
    }

    /// Empty the cart. Persists and notifies.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        self.save()?;
        self.display.notify("Carrinho limpo!");
        Ok(())
    }

    /// Sum of `unit_price * quantity` over all items.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns `true` if the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::super::storage::MemoryStorage;
    use super::*;

    fn store() -> CartStore<MemoryStorage> {
        CartStore::open(MemoryStorage::new())
    }

    /// Display that records every badge refresh and notification.
    #[derive(Default)]
    struct Recorder {
        badges: Vec<u32>,
        notifications: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct RecordingDisplay(Rc<RefCell<Recorder>>);

    impl CartDisplay for RecordingDisplay {
        fn refresh_badge(&mut self, count: u32) {
            self.0.borrow_mut().badges.push(count);
        }

        fn notify(&mut self, message: &str) {
            self.0.borrow_mut().notifications.push(message.to_owned());
        }
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = store();
        cart.add_item("Café Torrado", "R$ 42,90", 1, None).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Price::parse("R$ 42,90").unwrap());
    }

    #[test]
    fn test_add_same_name_accumulates_quantity() {
        let mut cart = store();
        cart.add_item("Widget", "R$ 10,00", 1, None).unwrap();
        cart.add_item("Widget", "R$ 10,00", 2, None).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Price::parse("R$ 30,00").unwrap());
    }

    #[test]
    fn test_add_existing_keeps_stored_price() {
        let mut cart = store();
        cart.add_item("Queijo Minas", "R$ 38,00", 1, None).unwrap();
        cart.add_item("Queijo Minas", "R$ 99,00", 1, None).unwrap();

        assert_eq!(cart.total(), Price::parse("R$ 76,00").unwrap());
    }

    #[test]
    fn test_add_rejects_malformed_price() {
        let mut cart = store();
        let result = cart.add_item("Mistério", "R$ caro", 1, None);

        assert!(matches!(result, Err(CartError::Price(_))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let mut cart = store();
        let result = cart.add_item("Café Torrado", "R$ 42,90", 0, None);

        assert!(matches!(result, Err(CartError::ZeroQuantity)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = store();
        cart.add_item("Café Torrado", "R$ 42,90", 1, None).unwrap();
        cart.add_item("Doce de Leite", "R$ 19,50", 1, None).unwrap();
        cart.remove_item("Café Torrado").unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().name, "Doce de Leite");
    }

    #[test]
    fn test_remove_unknown_name_is_a_no_op() {
        let mut cart = store();
        cart.add_item("Café Torrado", "R$ 42,90", 2, None).unwrap();
        let before = cart.items().to_vec();

        cart.remove_item("Geleia").unwrap();
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn test_remove_unknown_name_does_not_persist() {
        let mut cart = store();
        cart.remove_item("Geleia").unwrap();

        // Nothing was ever saved: a fresh load still sees no stored value.
        assert!(cart.storage.get(CART_KEY).is_none());
    }

    #[test]
    fn test_set_quantity_updates_in_place() {
        let mut cart = store();
        cart.add_item("Café Torrado", "R$ 42,90", 1, None).unwrap();
        cart.set_quantity("Café Torrado", 5).unwrap();

        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut removed = store();
        removed.add_item("Café Torrado", "R$ 42,90", 2, None).unwrap();
        removed.remove_item("Café Torrado").unwrap();

        let mut zeroed = store();
        zeroed.add_item("Café Torrado", "R$ 42,90", 2, None).unwrap();
        zeroed.set_quantity("Café Torrado", 0).unwrap();

        assert_eq!(zeroed.items(), removed.items());
        assert!(zeroed.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_name_is_a_no_op() {
        let mut cart = store();
        cart.set_quantity("Geleia", 3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = store();
        cart.add_item("Café Torrado", "R$ 42,90", 1, None).unwrap();
        cart.add_item("Doce de Leite", "R$ 19,50", 3, None).unwrap();
        cart.clear().unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_item_count_ignores_insertion_order() {
        let mut forward = store();
        forward.add_item("A", "R$ 1,00", 2, None).unwrap();
        forward.add_item("B", "R$ 2,00", 3, None).unwrap();

        let mut backward = store();
        backward.add_item("B", "R$ 2,00", 3, None).unwrap();
        backward.add_item("A", "R$ 1,00", 2, None).unwrap();

        assert_eq!(forward.item_count(), 5);
        assert_eq!(backward.item_count(), forward.item_count());
    }

    #[test]
    fn test_reload_preserves_insertion_order() {
        let mut cart = store();
        cart.add_item("Café Torrado", "R$ 42,90", 1, None).unwrap();
        cart.add_item("Queijo Minas", "R$ 38,00", 2, None).unwrap();
        cart.add_item("Doce de Leite", "R$ 19,50", 1, None).unwrap();

        let before = cart.items().to_vec();
        cart.load();
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn test_corrupt_persisted_data_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.write(CART_KEY, "not json at all").unwrap();

        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_wrong_shape_persisted_data_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.write(CART_KEY, "{\"name\":\"not an array\"}").unwrap();

        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_display_notifications() {
        let display = RecordingDisplay::default();
        let mut cart =
            CartStore::with_display(MemoryStorage::new(), Box::new(display.clone()));

        cart.add_item("Café Torrado", "R$ 42,90", 1, None).unwrap();
        cart.remove_item("Café Torrado").unwrap();
        cart.clear().unwrap();

        let recorder = display.0.borrow();
        assert_eq!(
            recorder.notifications,
            vec![
                "Café Torrado adicionado ao carrinho!",
                "Produto removido do carrinho!",
                "Carrinho limpo!",
            ]
        );
    }

    #[test]
    fn test_display_badge_follows_item_count() {
        let display = RecordingDisplay::default();
        let mut cart =
            CartStore::with_display(MemoryStorage::new(), Box::new(display.clone()));

        cart.add_item("Café Torrado", "R$ 42,90", 2, None).unwrap();
        cart.add_item("Doce de Leite", "R$ 19,50", 1, None).unwrap();
        cart.clear().unwrap();

        // Once on open, then after each persisted mutation.
        assert_eq!(display.0.borrow().badges, vec![0, 2, 3, 0]);
    }
}
