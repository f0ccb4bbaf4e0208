//! rxkata service - country queries built from stream operators
//!
//! Each query is a short chain over `futures` streams: map, filter,
//! reduce, zip, count and default-if-empty, over an in-memory list of
//! [`Country`] records.
//!
//! # Quick Start
//!
//! ```rust
//! use futures::StreamExt;
//! use rxkata_service::{CountriesService, CountriesServiceSolved, Country};
//!
//! # tokio_test::block_on(async {
//! let service = CountriesServiceSolved::new();
//! let countries = vec![
//!     Country::new("France", 67_000_000, "EUR"),
//!     Country::new("Malta", 520_000, "EUR"),
//! ];
//!
//! let large: Vec<Country> = service.filter_above_threshold(&countries).collect().await;
//! assert_eq!(large.len(), 1);
//!
//! let currency: Vec<String> = service.currency_or_default("Atlantis", &countries).collect().await;
//! assert_eq!(currency, vec!["USD (default)".to_string()]);
//! # });
//! ```
//!
//! # Modules
//!
//! - [`service`] - The [`CountriesService`] trait
//! - [`solved`] - Stream-operator implementation
//! - [`operators`] - `default_if_empty` and seedless `reduce`
//! - [`config`] - Threshold and fallback configuration
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod operators;
pub mod service;
pub mod solved;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::{KataError, Result};
pub use service::CountriesService;
pub use solved::CountriesServiceSolved;

pub use rxkata_core::Country;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::ServiceConfig;
    pub use crate::error::KataError;
    pub use crate::service::CountriesService;
    pub use crate::solved::CountriesServiceSolved;
    pub use rxkata_core::Country;
}
