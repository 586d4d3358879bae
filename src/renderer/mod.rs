//! Markdown renderer module
//!
//! Generates a documentation skeleton for one keyword description.
//! Renders sections in a fixed order: Title, Summary, Alternative Names,
//! Sections, Dependencies, Sizing, Syntax, Items, Data, Records,
//! Records Set, Alternating Records, Notes.

use crate::config::Config;
use crate::models::{DataSpec, Item, Keyword, Literal, Record, Sizing};

const ITEMS_TABLE_HEADER: &str = "| # | Name | Type | Default | Dimension | Description |";
const ITEMS_TABLE_SEPARATOR: &str = "|---|------|------|---------|-----------|-------------|";

/// Which source the summary paragraph was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// Long-form `description`
    Described,
    /// Short `comment` fallback
    Commented,
    /// Neither was given
    Placeholder,
}

/// Markdown renderer for keyword descriptions
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render a complete keyword description to Markdown
    pub fn render(&self, keyword: &Keyword) -> String {
        let sections = [
            Some(self.render_title(keyword)),
            Some(self.render_summary(keyword)),
            self.render_alternative_names(keyword),
            self.render_sections(keyword),
            self.render_dependencies(keyword),
            self.render_sizing(keyword),
            self.render_syntax(keyword),
            keyword.items().map(|items| self.render_items(items)),
            keyword.data.as_ref().map(|data| self.render_data(data)),
            keyword
                .records()
                .map(|records| self.render_records("Records", None, records)),
            keyword.records_set().map(|records| {
                self.render_records(
                    "Records Set",
                    Some("This keyword uses a *records set* format with the following record types:"),
                    records,
                )
            }),
            keyword.alternating_records().map(|records| {
                self.render_records(
                    "Alternating Records",
                    Some("This keyword uses alternating records with the following layouts:"),
                    records,
                )
            }),
            Some(self.render_notes()),
        ];

        let mut output = String::new();
        for section in sections.into_iter().flatten() {
            output.push_str(&section);
            output.push_str("\n\n");
        }

        format!("{}\n", output.trim_end())
    }

    /// Where the summary paragraph comes from
    pub fn summary_kind(&self, keyword: &Keyword) -> SummaryKind {
        if non_empty(&keyword.description).is_some() {
            SummaryKind::Described
        } else if non_empty(&keyword.comment).is_some() {
            SummaryKind::Commented
        } else {
            SummaryKind::Placeholder
        }
    }

    fn render_title(&self, keyword: &Keyword) -> String {
        let name = keyword
            .name
            .as_deref()
            .unwrap_or(&self.config.placeholders.name);
        format!("# {}", name)
    }

    fn render_summary(&self, keyword: &Keyword) -> String {
        match self.summary_kind(keyword) {
            SummaryKind::Described => non_empty(&keyword.description)
                .unwrap_or_default()
                .to_string(),
            SummaryKind::Commented => {
                format!("*{}*", non_empty(&keyword.comment).unwrap_or_default())
            }
            SummaryKind::Placeholder => format!("*{}*", self.config.placeholders.description),
        }
    }

    fn render_alternative_names(&self, keyword: &Keyword) -> Option<String> {
        let mut entries = Vec::new();

        if let Some(deck_name) = &keyword.deck_name {
            entries.push(format!("- `{}`", deck_name));
        }
        for deck_name in keyword.deck_names.iter().flatten() {
            entries.push(format!("- `{}`", deck_name));
        }
        if let Some(regex) = &keyword.deck_name_regex {
            entries.push(format!("- regex: `{}`", regex));
        }

        if entries.is_empty() {
            return None;
        }

        Some(format!("## Alternative Names\n\n{}", entries.join("\n")))
    }

    fn render_sections(&self, keyword: &Keyword) -> Option<String> {
        let sections = keyword.sections.as_deref().filter(|s| !s.is_empty())?;

        let mut output = String::from("## Sections\n\n");
        output.push_str(
            &sections
                .iter()
                .map(|section| format!("- {}", section))
                .collect::<Vec<_>>()
                .join("\n"),
        );

        Some(output)
    }

    fn render_dependencies(&self, keyword: &Keyword) -> Option<String> {
        if !keyword.has_dependencies() {
            return None;
        }

        let mut output = String::from("## Dependencies");

        if !keyword.requires().is_empty() {
            output.push_str(&format!(
                "\n\n**Requires:** {}",
                quoted_list(keyword.requires())
            ));
        }
        if !keyword.prohibits().is_empty() {
            output.push_str(&format!(
                "\n\n**Prohibits:** {}",
                quoted_list(keyword.prohibits())
            ));
        }

        Some(output)
    }

    fn render_sizing(&self, keyword: &Keyword) -> Option<String> {
        if !keyword.has_sizing() {
            return None;
        }

        let mut output = String::from("## Sizing");

        if let Some(size) = &keyword.size {
            output.push_str("\n\n");
            output.push_str(&sizing_sentence(size, "records"));
        }
        if let Some(min_size) = &keyword.min_size {
            output.push_str(&format!("\n\nMinimum number of records: {}.", min_size));
        }
        if let Some(num_tables) = &keyword.num_tables {
            output.push_str("\n\n");
            output.push_str(&sizing_sentence(num_tables, "tables"));
        }

        Some(output)
    }

    fn render_syntax(&self, keyword: &Keyword) -> Option<String> {
        let code = keyword.code.as_ref()?;

        let ending = match non_empty(&code.end) {
            Some(end) => format!(" terminated by `{}`.", end),
            None => ".".to_string(),
        };

        Some(format!(
            "## Syntax\n\nThis keyword introduces a free-form code block{}",
            ending
        ))
    }

    /// Render the Items section
    fn render_items(&self, items: &[Item]) -> String {
        format!("## Items\n\n{}", self.render_items_table(items))
    }

    /// Render a list of items as a Markdown table.
    ///
    /// An empty list still yields the header rows.
    fn render_items_table(&self, items: &[Item]) -> String {
        let mut lines = vec![
            ITEMS_TABLE_HEADER.to_string(),
            ITEMS_TABLE_SEPARATOR.to_string(),
        ];

        for (idx, item) in items.iter().enumerate() {
            lines.push(self.render_item_row(item, idx + 1));
        }

        lines.join("\n")
    }

    /// Render a single item table row
    fn render_item_row(&self, item: &Item, index: usize) -> String {
        format!(
            "| {} | `{}` | {} | {} | {} | {} |",
            item.position(index),
            item.name.as_deref().unwrap_or_default(),
            item.value_type.as_deref().unwrap_or_default(),
            display_or_empty(item.default_value()),
            display_or_empty(item.dimension()),
            item.description().unwrap_or_default(),
        )
    }

    fn render_data(&self, data: &DataSpec) -> String {
        let mut output = format!(
            "## Data\n\nThis is a *data* keyword containing a flat array of `{}` values.",
            data.value_type.as_deref().unwrap_or_default()
        );

        let dimension = display_or_empty(data.dimension());
        if !dimension.is_empty() {
            output.push_str(&format!("\nDimension: {}.", dimension));
        }

        output
    }

    /// Render one record heading and table per record
    fn render_records(&self, title: &str, intro: Option<&str>, records: &[Record]) -> String {
        let mut output = format!("## {}", title);

        if let Some(intro) = intro {
            output.push_str("\n\n");
            output.push_str(intro);
        }

        for (idx, record) in records.iter().enumerate() {
            output.push_str(&format!("\n\n### Record {}\n\n", idx + 1));
            output.push_str(&self.render_items_table(record));
        }

        output
    }

    fn render_notes(&self) -> String {
        format!("## Notes\n\n*{}*", self.config.placeholders.notes)
    }
}

/// The string if present and non-empty
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn display_or_empty(value: Option<&Literal>) -> String {
    value.map(Literal::to_string).unwrap_or_default()
}

/// Comma-joined, backtick-quoted keyword names
fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("`{}`", name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sizing sentence for `noun` ("records" or "tables")
fn sizing_sentence(sizing: &Sizing, noun: &str) -> String {
    match sizing {
        Sizing::Fixed(count) => format!("Fixed number of {}: {}.", noun, count),
        Sizing::Reference(reference) => format!(
            "Number of {} is determined by item `{}` of keyword `{}`.",
            noun,
            display_or_empty(reference.item.as_ref()),
            reference.keyword.as_deref().unwrap_or_default(),
        ),
    }
}
