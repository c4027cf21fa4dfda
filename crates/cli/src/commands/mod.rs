//! Command implementations for the `quitanda` binary.

pub mod cart;
pub mod catalog;
pub mod contact;
