use serde::{Deserialize, Serialize};

/// Renderer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Texts used when the description has nothing to say
    pub placeholders: Placeholders,
}

/// Placeholder texts for the documentation skeleton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placeholders {
    /// Title used when the keyword has no name
    pub name: String,

    /// Summary paragraph when neither description nor comment is given
    pub description: String,

    /// Body of the Notes section
    pub notes: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            name: "UNKNOWN".to_string(),
            description: "TODO: Add a short description of this keyword.".to_string(),
            notes: "TODO: Add any additional notes or examples here.".to_string(),
        }
    }
}
