//! Quitanda Core - Shared types library.
//!
//! This crate provides common types used across all Quitanda components:
//! - `storefront` - Cart component, views, catalog, and contact form
//! - `cli` - The `quitanda` binary wiring page interactions together
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money and email types with validated parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
