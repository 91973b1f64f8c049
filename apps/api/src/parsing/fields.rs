//! Field extraction: matches labelled lines inside a block against a record schema.
//!
//! Every schema declares the kind of each field:
//! - `Scalar`: single-line value, a repeated label overwrites the earlier value.
//! - `Paragraph`: like `Scalar`, but unlabelled lines that follow are joined on with spaces.
//! - `List`: the label line and every unlabelled line after it become items,
//!   until the next recognised label. A repeated label keeps appending.

use std::collections::HashMap;

/// How values for a label are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Paragraph,
    List,
}

/// A single recognised label and the record field it feeds.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Exact, case-sensitive prefix including the trailing colon, e.g. `"Name:"`.
    pub label: &'static str,
    pub key: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn scalar(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            kind: FieldKind::Scalar,
        }
    }

    pub const fn paragraph(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            kind: FieldKind::Paragraph,
        }
    }

    pub const fn list(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            kind: FieldKind::List,
        }
    }
}

/// The fixed label set for one record type.
#[derive(Debug)]
pub struct RecordSchema {
    /// Record type name, used in diagnostics.
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    /// Accept a leading `- ` / `* ` / `• ` before a label (bulleted layouts).
    pub allow_list_markers: bool,
}

impl RecordSchema {
    fn match_label<'a>(&self, line: &'a str) -> Option<(&'static FieldSpec, &'a str)> {
        let candidate = if self.allow_list_markers {
            strip_bullet(line)
        } else {
            line
        };
        self.fields.iter().find_map(|field| {
            candidate
                .strip_prefix(field.label)
                .map(|rest| (field, rest.trim()))
        })
    }
}

/// An extracted value. Scalar and paragraph fields produce `Text`, list fields `Items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Items(Vec<String>),
}

/// Partial key → value mapping for one block. Only labels that were found are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    values: HashMap<&'static str, FieldValue>,
    recognized_lines: usize,
}

impl ExtractedFields {
    /// Returns the text for `key`, or `None` when the label was absent or its value empty.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(FieldValue::Text(value)) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the list items for `key`; empty when the label was absent.
    pub fn items(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(FieldValue::Items(items)) => items,
            _ => &[],
        }
    }

    /// Number of lines that started with a recognised label.
    pub fn recognized_lines(&self) -> usize {
        self.recognized_lines
    }

    /// True when no line in the block carried a recognised label.
    pub fn is_empty(&self) -> bool {
        self.recognized_lines == 0
    }
}

/// Extracts every recognised field from `block` according to `schema`.
pub fn extract_fields(block: &str, schema: &RecordSchema) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    // The field that unlabelled lines continue into, if its kind accepts continuation.
    let mut open: Option<&'static FieldSpec> = None;

    for raw_line in block.lines() {
        let line = raw_line.trim();

        if let Some((field, value)) = schema.match_label(line) {
            fields.recognized_lines += 1;
            match field.kind {
                FieldKind::Scalar | FieldKind::Paragraph => {
                    fields
                        .values
                        .insert(field.key, FieldValue::Text(value.to_string()));
                }
                FieldKind::List => {
                    let entry = fields
                        .values
                        .entry(field.key)
                        .or_insert_with(|| FieldValue::Items(Vec::new()));
                    if let FieldValue::Items(items) = entry {
                        push_item(items, value);
                    }
                }
            }
            open = match field.kind {
                FieldKind::Scalar => None,
                FieldKind::Paragraph | FieldKind::List => Some(field),
            };
            continue;
        }

        let Some(field) = open else { continue };
        if line.is_empty() {
            continue;
        }
        match fields.values.get_mut(field.key) {
            Some(FieldValue::Text(text)) => {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(line);
            }
            Some(FieldValue::Items(items)) => push_item(items, line),
            None => {}
        }
    }

    fields
}

fn push_item(items: &mut Vec<String>, raw: &str) {
    let item = strip_list_marker(raw);
    if !item.is_empty() {
        items.push(item.to_string());
    }
}

/// Removes a leading `- `, `* ` or `• ` bullet.
fn strip_bullet(line: &str) -> &str {
    ["- ", "* ", "• "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim_start)
        .unwrap_or(line)
}

/// Removes a leading bullet or an ordinal such as `1.` / `2)`.
fn strip_list_marker(line: &str) -> &str {
    let line = strip_bullet(line.trim());
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return stripped.trim_start();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SCHEMA: RecordSchema = RecordSchema {
        name: "test",
        fields: &[
            FieldSpec::scalar("Name:", "name"),
            FieldSpec::scalar("Explanation:", "explanation"),
        ],
        allow_list_markers: false,
    };

    const PLAN_SCHEMA: RecordSchema = RecordSchema {
        name: "plan",
        fields: &[
            FieldSpec::paragraph("Summary:", "summary"),
            FieldSpec::list("Next Steps:", "next_steps"),
        ],
        allow_list_markers: true,
    };

    #[test]
    fn test_extracts_labelled_values_trimmed() {
        let fields = extract_fields("Name:   Lumen  \nExplanation: Light.", &TEST_SCHEMA);
        assert_eq!(fields.text("name"), Some("Lumen"));
        assert_eq!(fields.text("explanation"), Some("Light."));
        assert_eq!(fields.recognized_lines(), 2);
    }

    #[test]
    fn test_label_order_does_not_matter() {
        let fields = extract_fields("Explanation: Light.\nName: Lumen", &TEST_SCHEMA);
        assert_eq!(fields.text("name"), Some("Lumen"));
        assert_eq!(fields.text("explanation"), Some("Light."));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let fields = extract_fields("name: Lumen\nNAME: Other", &TEST_SCHEMA);
        assert!(fields.is_empty());
        assert_eq!(fields.text("name"), None);
    }

    #[test]
    fn test_label_must_start_the_line() {
        let fields = extract_fields("Brand Name: Lumen", &TEST_SCHEMA);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_scalar_repeat_overwrites() {
        let fields = extract_fields("Name: First\nName: Second", &TEST_SCHEMA);
        assert_eq!(fields.text("name"), Some("Second"));
    }

    #[test]
    fn test_empty_value_is_extracted_but_reads_as_missing() {
        let fields = extract_fields("Name:\nExplanation: Something", &TEST_SCHEMA);
        assert_eq!(fields.text("name"), None);
        assert_eq!(fields.recognized_lines(), 2);
    }

    #[test]
    fn test_scalar_ignores_unlabelled_continuation() {
        let fields = extract_fields("Name: Lumen\nsome stray commentary", &TEST_SCHEMA);
        assert_eq!(fields.text("name"), Some("Lumen"));
    }

    #[test]
    fn test_unrecognized_block_is_empty() {
        let fields = extract_fields("Here are some great names for you!", &TEST_SCHEMA);
        assert!(fields.is_empty());
        assert_eq!(fields.recognized_lines(), 0);
    }

    #[test]
    fn test_paragraph_joins_following_lines() {
        let block = "- Summary:\nA marketplace for\nlocal bakers.\n\n- Next Steps:\n1. Build MVP";
        let fields = extract_fields(block, &PLAN_SCHEMA);
        assert_eq!(fields.text("summary"), Some("A marketplace for local bakers."));
    }

    #[test]
    fn test_list_accumulates_until_next_label() {
        let block = "Next Steps: Register company\n1. Build MVP\n- Recruit testers\n* Launch beta\nSummary: Done.";
        let fields = extract_fields(block, &PLAN_SCHEMA);
        assert_eq!(
            fields.items("next_steps"),
            &[
                "Register company".to_string(),
                "Build MVP".to_string(),
                "Recruit testers".to_string(),
                "Launch beta".to_string(),
            ]
        );
        assert_eq!(fields.text("summary"), Some("Done."));
    }

    #[test]
    fn test_repeated_list_label_keeps_appending() {
        let block = "Next Steps: one\nSummary: s\nNext Steps: two";
        let fields = extract_fields(block, &PLAN_SCHEMA);
        assert_eq!(
            fields.items("next_steps"),
            &["one".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn test_bullet_before_label_only_when_allowed() {
        let with_markers = extract_fields("- Summary: ok", &PLAN_SCHEMA);
        assert_eq!(with_markers.text("summary"), Some("ok"));

        let without_markers = extract_fields("- Name: Lumen", &TEST_SCHEMA);
        assert!(without_markers.is_empty());
    }

    #[test]
    fn test_strip_list_marker_variants() {
        assert_eq!(strip_list_marker("1. Build"), "Build");
        assert_eq!(strip_list_marker("12) Ship"), "Ship");
        assert_eq!(strip_list_marker("• Test"), "Test");
        assert_eq!(strip_list_marker("2024 revenue target"), "2024 revenue target");
    }
}
