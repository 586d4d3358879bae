use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed scalar as it appears in a keyword description.
///
/// Numbers keep their JSON spelling, so a default written as `0.0`
/// displays as `0.0` rather than `0`. Any other value (an object, or a
/// `null` inside a list) is kept as-is and displayed as compact JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<Literal>),
    Other(serde_json::Value),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => f.write_str(s),
            Literal::List(entries) => {
                for (idx, entry) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", entry)?;
                }
                Ok(())
            }
            Literal::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(n.into())
    }
}

/// A single item (scalar field) of a record or flat item list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Declared 1-based position
    pub item: Option<Literal>,
    pub name: Option<String>,
    pub value_type: Option<String>,
    pub default: Option<Literal>,
    pub default_value: Option<Literal>,
    pub dimension: Option<Literal>,
    pub dimensions: Option<Literal>,
    pub description: Option<String>,
    pub comment: Option<String>,
}

impl Item {
    /// Position label: the declared position, else `index` (1-based)
    pub fn position(&self, index: usize) -> String {
        match &self.item {
            Some(pos) => pos.to_string(),
            None => index.to_string(),
        }
    }

    /// `default` wins over `default_value`
    pub fn default_value(&self) -> Option<&Literal> {
        self.default.as_ref().or(self.default_value.as_ref())
    }

    /// `dimension` wins over `dimensions`
    pub fn dimension(&self) -> Option<&Literal> {
        self.dimension.as_ref().or(self.dimensions.as_ref())
    }

    /// Item description, falling back to the comment
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.comment.as_deref())
    }
}
