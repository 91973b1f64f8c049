use serde::{Deserialize, Serialize};

use crate::parsing::fields::{ExtractedFields, FieldSpec, RecordSchema};
use crate::parsing::normalize::bounded;
use crate::parsing::records::Record;

const NAME_MAX: usize = 60;
const EXPLANATION_MAX: usize = 120;

static BRAND_NAME_SCHEMA: RecordSchema = RecordSchema {
    name: "brand_name",
    fields: &[
        FieldSpec::scalar("Name:", "name"),
        FieldSpec::paragraph("Explanation:", "explanation"),
    ],
    allow_list_markers: false,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandName {
    pub name: String,
    pub explanation: String,
}

impl Record for BrandName {
    type Context = ();

    fn schema() -> &'static RecordSchema {
        &BRAND_NAME_SCHEMA
    }

    fn from_fields(fields: &ExtractedFields, _index: usize, _ctx: &()) -> Self {
        Self {
            name: bounded(fields.text("name"), "Unnamed Brand", NAME_MAX),
            explanation: bounded(
                fields.text("explanation"),
                "No explanation provided.",
                EXPLANATION_MAX,
            ),
        }
    }

    fn placeholder(index: usize, _ctx: &()) -> Self {
        Self {
            name: format!("Brand {}", index + 1),
            explanation: "Alternative name suggestion.".to_string(),
        }
    }
}
