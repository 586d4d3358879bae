//! Keyword description models
//!
//! Typed view of a keyword JSON description: Keyword, Item, Literal,
//! Sizing, KeywordRef, CodeBlock, DataSpec.
//! Documents are adapted once here, at the input boundary.

pub mod item;
pub mod keyword;

pub use item::{Item, Literal};
pub use keyword::{DataSpec, Keyword, Record, Sizing};

use crate::error::{KwdocError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a keyword description from a JSON file
pub fn load(path: &Path) -> Result<Keyword> {
    if !path.is_file() {
        return Err(KwdocError::NotAFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let keyword: Keyword = serde_json::from_str(&content)?;

    debug!(
        path = %path.display(),
        name = keyword.name.as_deref().unwrap_or_default(),
        "loaded keyword description"
    );

    Ok(keyword)
}
