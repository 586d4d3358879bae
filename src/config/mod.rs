//! Configuration module
//!
//! Defines the renderer Config and its Placeholders.
//! The CLI always renders with `Config::default()`.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Placeholders};
