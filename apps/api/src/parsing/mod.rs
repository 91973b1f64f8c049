//! Response parsing: turns free-text model output into fixed-shape, fully-defaulted records.
//!
//! Pipeline: split_blocks → extract_fields (per block) → Record::from_fields → fill_to_count.
//! Everything here is a pure function of its input string; no client, no I/O.

pub mod blocks;
pub mod fields;
pub mod generator;
pub mod normalize;
pub mod records;

use thiserror::Error;
use tracing::{debug, warn};

use crate::parsing::blocks::{normalize_newlines, split_blocks};
use crate::parsing::fields::extract_fields;
use crate::parsing::generator::fill_to_count;
use crate::parsing::records::Record;

/// Longest block excerpt carried in diagnostics.
const PREVIEW_CHARS: usize = 80;

/// Controls how parse anomalies are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Raise a `ParseError` instead of substituting defaults for unrecognised input.
    pub strict: bool,
    /// Drop blocks with no recognised label instead of turning them into default records.
    pub skip_unrecognized_blocks: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Raised only in strict mode, when the response has drifted from the expected format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{record} response contained no content")]
    EmptyResponse { record: &'static str },

    #[error("{record} block {index} has no recognized labels: {preview:?}")]
    UnrecognizedBlock {
        record: &'static str,
        index: usize,
        preview: String,
    },

    #[error("{record} response has no recognized labels")]
    NoRecognizedFields { record: &'static str },
}

/// Parses `raw` into exactly `count` records of type `R`.
///
/// Extra records are dropped, missing ones are filled with `R::placeholder`.
pub fn parse_records<R: Record>(
    raw: &str,
    count: usize,
    ctx: &R::Context,
    options: ParseOptions,
) -> Result<Vec<R>, ParseError> {
    let schema = R::schema();
    let blocks = split_blocks(raw);
    debug!(
        record = schema.name,
        bytes = raw.len(),
        blocks = blocks.len(),
        "parsing model response"
    );

    if blocks.is_empty() {
        if options.strict {
            return Err(ParseError::EmptyResponse {
                record: schema.name,
            });
        }
        warn!(record = schema.name, "model response was empty; using placeholders");
    }

    let mut records = Vec::with_capacity(blocks.len().max(count));
    for (index, block) in blocks.iter().enumerate() {
        let fields = extract_fields(block, schema);
        if fields.is_empty() {
            let preview = preview(block);
            if options.strict {
                return Err(ParseError::UnrecognizedBlock {
                    record: schema.name,
                    index,
                    preview,
                });
            }
            warn!(
                record = schema.name,
                index,
                preview = %preview,
                "block has no recognized labels"
            );
            if options.skip_unrecognized_blocks {
                continue;
            }
        }
        records.push(R::from_fields(&fields, records.len(), ctx));
    }

    let parsed = records.len();
    let records = fill_to_count(records, count, |index| R::placeholder(index, ctx));
    if parsed < count {
        debug!(
            record = schema.name,
            parsed, count, "padded record list with placeholders"
        );
    }
    Ok(records)
}

/// Parses the whole of `raw` as a single record, ignoring blank-line boundaries.
pub fn parse_record<R: Record>(
    raw: &str,
    ctx: &R::Context,
    options: ParseOptions,
) -> Result<R, ParseError> {
    let schema = R::schema();
    let text = normalize_newlines(raw);
    let fields = extract_fields(&text, schema);

    if fields.is_empty() {
        if options.strict {
            return Err(if text.trim().is_empty() {
                ParseError::EmptyResponse {
                    record: schema.name,
                }
            } else {
                ParseError::NoRecognizedFields {
                    record: schema.name,
                }
            });
        }
        warn!(
            record = schema.name,
            preview = %preview(&text),
            "response has no recognized labels; using defaults"
        );
    }

    Ok(R::from_fields(&fields, 0, ctx))
}

fn preview(block: &str) -> String {
    normalize::truncate_with_ellipsis(&block.replace('\n', " "), PREVIEW_CHARS)
}
