use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::models;
use crate::renderer::Renderer;

/// Generate a documentation skeleton for one keyword description
pub fn run(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let markdown = generate(&input)?;

    match output {
        Some(output_path) => {
            fs::write(&output_path, markdown)?;
            eprintln!("Written to '{}'.", output_path.display());
        }
        None => println!("{}", markdown),
    }

    Ok(())
}

/// Load and render a keyword description
fn generate(input: &Path) -> Result<String> {
    let keyword = models::load(input)?;

    if keyword.name.is_none() {
        warn!(path = %input.display(), "keyword description has no name");
    }

    let config = Config::default();
    let renderer = Renderer::new(&config);
    let markdown = renderer.render(&keyword);

    debug!(
        summary = ?renderer.summary_kind(&keyword),
        bytes = markdown.len(),
        "rendered keyword"
    );

    Ok(markdown)
}
