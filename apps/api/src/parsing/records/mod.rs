//! Typed records assembled from extracted fields.

mod brand_name;
mod business_plan;
mod domain;
mod idea;
mod logo;

pub use brand_name::BrandName;
pub use business_plan::{BusinessPlan, PlanContext};
pub use domain::{domain_variations, Availability, DomainCheck, DomainContext};
pub use idea::Idea;
pub use logo::LogoConcept;

use crate::parsing::fields::{ExtractedFields, RecordSchema};

/// A record type the pipeline can build from a block.
///
/// Implementations must never leave a field empty: every missing value is
/// replaced with a documented default.
pub trait Record: Sized {
    /// Caller-supplied values some defaults depend on (e.g. the brand name).
    type Context: ?Sized;

    fn schema() -> &'static RecordSchema;

    /// Builds a record from one block's fields. `index` is the record's position in the output list.
    fn from_fields(fields: &ExtractedFields, index: usize, ctx: &Self::Context) -> Self;

    /// Synthesised record used to pad a list up to its fixed length.
    fn placeholder(index: usize, ctx: &Self::Context) -> Self;
}
