//! Configuration module for img2term
//!
//! Provides types, discovery, and loading for the optional `img2term.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
