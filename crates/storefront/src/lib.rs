//! Quitanda Storefront library.
//!
//! The cart component and the page pieces around it: persistent cart
//! state, HTML views, the product catalog, and the contact form. The
//! `quitanda` binary wires these to terminal interactions.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod filters;
pub mod views;
