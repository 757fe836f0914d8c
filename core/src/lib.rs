//! Domain types and site plumbing for the blog search widget.
//!
//! - [`types`]: validated post records and the TOML app config
//! - [`catalog`]: loading the post index emitted at site-generation time
//! - [`structured_data`]: JSON-LD script tags for post and site pages

pub mod catalog;
pub mod error;
pub mod structured_data;
pub mod types;

pub use catalog::PostCatalog;
pub use catalog::error::CatalogError;
pub use error::{Error, Result};
pub use structured_data::error::StructuredDataError;
pub use structured_data::{ImageRef, PostMeta, StructuredData, json_ld};
