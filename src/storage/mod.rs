//! Storage module for downloaded assets
//!
//! This module writes fetched cover images and book texts to disk:
//! - Sanitized filename derivation for both asset kinds
//! - Idempotent creation of the `images/` and `books/` directories
//! - The redirect-means-missing download convention

mod assets;
mod names;

pub use assets::download_asset;
pub use names::{image_filename, text_filename};
