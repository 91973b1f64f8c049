use serde::{Deserialize, Serialize};

use crate::parsing::fields::{ExtractedFields, FieldSpec, RecordSchema};
use crate::parsing::normalize::{bounded, default_colors, extract_hex_colors};
use crate::parsing::records::Record;

const CONCEPT_MAX: usize = 80;
const DESCRIPTION_MAX: usize = 200;
const FONT_MAX: usize = 60;
const SYMBOL_MAX: usize = 100;
const RATIONALE_MAX: usize = 150;

const DEFAULT_FONT: &str = "Sans-serif";
const DEFAULT_SYMBOL: &str = "Geometric shape representing the brand";
const DEFAULT_RATIONALE: &str =
    "Designed to appeal to the target audience while conveying brand values";

static LOGO_SCHEMA: RecordSchema = RecordSchema {
    name: "logo_concept",
    fields: &[
        FieldSpec::scalar("Concept:", "concept"),
        FieldSpec::scalar("Description:", "description"),
        FieldSpec::scalar("Colors:", "colors"),
        FieldSpec::scalar("Font:", "font"),
        FieldSpec::scalar("Symbol:", "symbol"),
        FieldSpec::scalar("Rationale:", "rationale"),
    ],
    allow_list_markers: false,
};

/// A logo design direction for a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConcept {
    pub concept: String,
    pub description: String,
    /// Hex codes such as `#3B82F6`; never empty.
    pub colors: Vec<String>,
    pub font: String,
    pub symbol: String,
    pub rationale: String,
}

impl Record for LogoConcept {
    /// The brand name.
    type Context = str;

    fn schema() -> &'static RecordSchema {
        &LOGO_SCHEMA
    }

    fn from_fields(fields: &ExtractedFields, _index: usize, brand: &str) -> Self {
        Self {
            concept: bounded(fields.text("concept"), &format!("{brand} Logo"), CONCEPT_MAX),
            description: bounded(
                fields.text("description"),
                &format!("Modern logo design for {brand}"),
                DESCRIPTION_MAX,
            ),
            colors: extract_hex_colors(fields.text("colors")),
            font: bounded(fields.text("font"), DEFAULT_FONT, FONT_MAX),
            symbol: bounded(fields.text("symbol"), DEFAULT_SYMBOL, SYMBOL_MAX),
            rationale: bounded(fields.text("rationale"), DEFAULT_RATIONALE, RATIONALE_MAX),
        }
    }

    fn placeholder(index: usize, brand: &str) -> Self {
        Self {
            concept: format!("{brand} Concept {}", index + 1),
            description: format!("Alternative logo design for {brand}"),
            colors: default_colors(),
            font: DEFAULT_FONT.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            rationale: DEFAULT_RATIONALE.to_string(),
        }
    }
}
