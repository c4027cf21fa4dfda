//! Integration tests for Quitanda.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quitanda-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Round-trip law and last-writer-wins through
//!   file-backed storage
//! - `cart_flow` - Full add/update/clear flows over the public API
//! - `catalog_to_cart` - Catalog front matter feeding the cart

#![cfg_attr(not(test), forbid(unsafe_code))]
