use serde::{Deserialize, Serialize};

use crate::parsing::fields::{ExtractedFields, FieldSpec, RecordSchema};
use crate::parsing::normalize::bounded;
use crate::parsing::records::Record;

const TITLE_MAX: usize = 80;
const DESCRIPTION_MAX: usize = 400;

static IDEA_SCHEMA: RecordSchema = RecordSchema {
    name: "idea",
    fields: &[
        FieldSpec::scalar("Title:", "title"),
        FieldSpec::paragraph("Description:", "description"),
    ],
    allow_list_markers: false,
};

/// A business idea suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub description: String,
}

impl Record for Idea {
    type Context = ();

    fn schema() -> &'static RecordSchema {
        &IDEA_SCHEMA
    }

    fn from_fields(fields: &ExtractedFields, _index: usize, _ctx: &()) -> Self {
        Self {
            title: bounded(fields.text("title"), "Untitled Idea", TITLE_MAX),
            description: bounded(
                fields.text("description"),
                "No description provided.",
                DESCRIPTION_MAX,
            ),
        }
    }

    fn placeholder(index: usize, _ctx: &()) -> Self {
        Self {
            title: format!("Idea {}", index + 1),
            description: "Additional idea to round out your list.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::fields::extract_fields;

    #[test]
    fn test_idea_defaults_for_missing_description() {
        let fields = extract_fields("Title: Solo", Idea::schema());
        let idea = Idea::from_fields(&fields, 0, &());
        assert_eq!(idea.title, "Solo");
        assert_eq!(idea.description, "No description provided.");
    }

    #[test]
    fn test_idea_title_truncated() {
        let block = format!("Title: {}\nDescription: d", "t".repeat(100));
        let idea = Idea::from_fields(&extract_fields(&block, Idea::schema()), 0, &());
        assert_eq!(idea.title.chars().count(), TITLE_MAX);
        assert!(idea.title.ends_with("..."));
    }

    #[test]
    fn test_wrapped_description_is_joined() {
        let block = "Title: Brew Track\nDescription: A loyalty app for cafes.\nIt rewards repeat visits with stamps.";
        let idea = Idea::from_fields(&extract_fields(block, Idea::schema()), 0, &());
        assert_eq!(
            idea.description,
            "A loyalty app for cafes. It rewards repeat visits with stamps."
        );
    }

    #[test]
    fn test_idea_placeholder_pattern() {
        assert_eq!(Idea::placeholder(2, &()).title, "Idea 3");
    }
}
