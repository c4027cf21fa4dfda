//! The shopping cart component.
//!
//! [`CartStore`] owns the line items and writes the full cart state
//! through a [`CartStorage`] implementation after every mutation.
//! Display collaborators (counter badge, notification overlay) hang off
//! the [`CartDisplay`] seam so the store never touches rendering.

mod display;
mod item;
mod notify;
mod storage;
mod store;

pub use display::{CartDisplay, NullDisplay};
pub use item::LineItem;
pub use notify::{NOTIFICATION_TTL, Notification, NotificationCenter};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CART_KEY, CartError, CartStore};
