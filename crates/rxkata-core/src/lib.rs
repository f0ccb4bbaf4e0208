// File: `crates/rxkata-core/src/lib.rs`
pub mod country;
pub mod fixtures;

pub use country::{is_above, Country};
