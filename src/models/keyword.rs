use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::item::{Item, Literal};

/// One record layout: an ordered list of items
pub type Record = Vec<Item>;

/// A `{keyword, item}` pair naming where a count is read from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordRef {
    pub keyword: Option<String>,
    pub item: Option<Literal>,
}

/// Record or table count: fixed, or driven by another keyword's item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sizing {
    Reference(KeywordRef),
    Fixed(Literal),
}

impl<'de> Deserialize<'de> for Sizing {
    /// Only a JSON object is a reference; anything else is a fixed count
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_object() {
            serde_json::from_value(value)
                .map(Sizing::Reference)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Sizing::Fixed)
                .map_err(D::Error::custom)
        }
    }
}

/// Marker for a free-form code block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Keyword terminating the block
    pub end: Option<String>,
}

/// Element type of a flat data array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSpec {
    pub value_type: Option<String>,
    pub dimension: Option<Literal>,
    pub dimensions: Option<Literal>,
}

impl DataSpec {
    pub fn dimension(&self) -> Option<&Literal> {
        self.dimension.as_ref().or(self.dimensions.as_ref())
    }
}

/// Keeps a present `null` apart from a missing key: a missing key stays
/// `None` through `#[serde(default)]`, a present key becomes `Some(_)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parsed keyword description.
///
/// Every field is optional. Scalar and object fields are present when
/// their key exists with a non-null value, so `"size": 0` is present
/// while `"size": null` is not. The item and record lists are present
/// whenever their key exists, even with a `null` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub name: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,

    pub deck_name: Option<String>,
    pub deck_names: Option<Vec<String>>,
    pub deck_name_regex: Option<String>,

    pub sections: Option<Vec<String>>,
    pub requires: Option<Vec<String>>,
    pub prohibits: Option<Vec<String>>,

    pub size: Option<Sizing>,
    pub min_size: Option<Literal>,
    pub num_tables: Option<Sizing>,

    pub code: Option<CodeBlock>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub items: Option<Option<Vec<Item>>>,
    pub data: Option<DataSpec>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub records: Option<Option<Vec<Record>>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub records_set: Option<Option<Vec<Record>>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub alternating_records: Option<Option<Vec<Record>>>,
}

/// A present list key, with `null` read as an empty list
fn listed<T>(field: &Option<Option<Vec<T>>>) -> Option<&[T]> {
    field
        .as_ref()
        .map(|list| list.as_deref().unwrap_or_default())
}

impl Keyword {
    /// Whether any sizing field is present
    pub fn has_sizing(&self) -> bool {
        self.size.is_some() || self.min_size.is_some() || self.num_tables.is_some()
    }

    pub fn requires(&self) -> &[String] {
        self.requires.as_deref().unwrap_or_default()
    }

    pub fn prohibits(&self) -> &[String] {
        self.prohibits.as_deref().unwrap_or_default()
    }

    /// Whether the keyword depends on or conflicts with other keywords
    pub fn has_dependencies(&self) -> bool {
        !self.requires().is_empty() || !self.prohibits().is_empty()
    }

    pub fn items(&self) -> Option<&[Item]> {
        listed(&self.items)
    }

    pub fn records(&self) -> Option<&[Record]> {
        listed(&self.records)
    }

    pub fn records_set(&self) -> Option<&[Record]> {
        listed(&self.records_set)
    }

    pub fn alternating_records(&self) -> Option<&[Record]> {
        listed(&self.alternating_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_from(json: &str) -> Keyword {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_keyword() {
        let keyword = keyword_from(r#"{"name": "WELSPECS"}"#);
        assert_eq!(keyword.name.as_deref(), Some("WELSPECS"));
        assert!(keyword.items.is_none());
        assert!(!keyword.has_sizing());
        assert!(!keyword.has_dependencies());
    }

    #[test]
    fn test_empty_object_is_valid() {
        let keyword = keyword_from("{}");
        assert_eq!(keyword, Keyword::default());
    }

    #[test]
    fn test_size_fixed() {
        let keyword = keyword_from(r#"{"name": "ACTDIMS", "size": 1}"#);
        assert_eq!(keyword.size, Some(Sizing::Fixed(Literal::from(1))));
    }

    #[test]
    fn test_size_zero_is_present() {
        let keyword = keyword_from(r#"{"name": "X", "size": 0}"#);
        assert_eq!(keyword.size, Some(Sizing::Fixed(Literal::from(0))));
        assert!(keyword.has_sizing());
    }

    #[test]
    fn test_size_null_is_absent() {
        let keyword = keyword_from(r#"{"name": "X", "size": null}"#);
        assert!(keyword.size.is_none());
        assert!(!keyword.has_sizing());
    }

    #[test]
    fn test_size_reference() {
        let keyword = keyword_from(
            r#"{"name": "PVTWSALT", "size": {"keyword": "TABDIMS", "item": "NTPVT"}}"#,
        );
        assert_eq!(
            keyword.size,
            Some(Sizing::Reference(KeywordRef {
                keyword: Some("TABDIMS".to_string()),
                item: Some(Literal::from("NTPVT")),
            }))
        );
    }

    #[test]
    fn test_size_list_is_fixed() {
        let keyword = keyword_from(r#"{"name": "X", "size": ["TABDIMS", "NTPVT"]}"#);
        assert_eq!(
            keyword.size,
            Some(Sizing::Fixed(Literal::List(vec![
                Literal::from("TABDIMS"),
                Literal::from("NTPVT"),
            ])))
        );
    }

    #[test]
    fn test_num_tables_text_is_fixed() {
        let keyword = keyword_from(r#"{"name": "X", "num_tables": "NTPVT"}"#);
        assert_eq!(keyword.num_tables, Some(Sizing::Fixed(Literal::from("NTPVT"))));
    }

    #[test]
    fn test_min_size_only_counts_as_sizing() {
        let keyword = keyword_from(r#"{"name": "X", "min_size": 0}"#);
        assert!(keyword.has_sizing());
    }

    #[test]
    fn test_records_nested_lists() {
        let keyword = keyword_from(
            r#"{"name": "PYACTION", "records": [[{"name": "NAME"}], [{"name": "FILENAME"}]]}"#,
        );
        let records = keyword.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1][0].name.as_deref(), Some("FILENAME"));
    }

    #[test]
    fn test_null_lists_are_present() {
        let keyword = keyword_from(
            r#"{"name": "X", "items": null, "records": null, "records_set": null, "alternating_records": null}"#,
        );
        assert_eq!(keyword.items(), Some(&[][..]));
        assert_eq!(keyword.records().map(<[Record]>::len), Some(0));
        assert_eq!(keyword.records_set().map(<[Record]>::len), Some(0));
        assert_eq!(keyword.alternating_records().map(<[Record]>::len), Some(0));
    }

    #[test]
    fn test_missing_lists_are_absent() {
        let keyword = keyword_from(r#"{"name": "X"}"#);
        assert!(keyword.items().is_none());
        assert!(keyword.records().is_none());
        assert!(keyword.records_set().is_none());
        assert!(keyword.alternating_records().is_none());
    }

    #[test]
    fn test_data_dimension_precedence() {
        let keyword = keyword_from(
            r#"{"name": "PORO", "data": {"value_type": "DOUBLE", "dimensions": "1"}}"#,
        );
        let data = keyword.data.unwrap();
        assert_eq!(data.value_type.as_deref(), Some("DOUBLE"));
        assert_eq!(data.dimension(), Some(&Literal::from("1")));
    }

    #[test]
    fn test_empty_dependency_lists() {
        let keyword = keyword_from(r#"{"name": "X", "requires": [], "prohibits": []}"#);
        assert!(!keyword.has_dependencies());

        let keyword = keyword_from(r#"{"name": "X", "prohibits": ["POELCOEF"]}"#);
        assert!(keyword.has_dependencies());
    }

    #[test]
    fn test_wrong_shape_rejected() {
        let result = serde_json::from_str::<Keyword>(r#"{"name": "X", "items": "none"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Keyword>("[1, 2, 3]");
        assert!(result.is_err());
    }
}
