//! Display seam between the cart and its collaborators.

/// Receiver for the cart's observable display side effects.
///
/// The store calls [`refresh_badge`](Self::refresh_badge) after every
/// persist with the recomputed item count, and
/// [`notify`](Self::notify) when a mutation warrants a transient
/// message. Implementations decide what a badge or a notification looks
/// like; the store itself never renders.
pub trait CartDisplay {
    /// Synchronize the cart counter indicator with `count`.
    ///
    /// A count of zero means the indicator should disappear.
    fn refresh_badge(&mut self, count: u32);

    /// Show a short-lived notification message.
    fn notify(&mut self, message: &str);
}

/// Display that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl CartDisplay for NullDisplay {
    fn refresh_badge(&mut self, _count: u32) {}

    fn notify(&mut self, _message: &str) {}
}
