//! Command-line interface module
//!
//! Implements the single generate command:
//! - gen: Render a keyword description to Markdown
pub mod gen;
