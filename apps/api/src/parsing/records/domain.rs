use serde::{Deserialize, Serialize};

use crate::parsing::fields::{ExtractedFields, FieldSpec, RecordSchema};
use crate::parsing::normalize::{bounded, parse_leading_int, truncate_with_ellipsis};
use crate::parsing::records::Record;

/// Longest legal DNS name.
const DOMAIN_MAX: usize = 253;
const REASON_MAX: usize = 80;
const RATING_MAX: u8 = 10;

static DOMAIN_SCHEMA: RecordSchema = RecordSchema {
    name: "domain_check",
    fields: &[
        FieldSpec::scalar("Domain:", "domain"),
        FieldSpec::scalar("Available:", "available"),
        FieldSpec::scalar("Rating:", "rating"),
        FieldSpec::scalar("Reason:", "reason"),
    ],
    allow_list_markers: false,
};

/// Estimated registration status. These are model estimates, not WHOIS lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Yes,
    Possibly,
    #[default]
    Unlikely,
}

impl Availability {
    /// Reads the first word case-insensitively; anything unrecognised is `Unlikely`.
    pub fn parse(value: Option<&str>) -> Self {
        let word = value
            .and_then(|v| v.split(|c: char| !c.is_alphabetic()).find(|w| !w.is_empty()))
            .map(str::to_ascii_lowercase);
        match word.as_deref() {
            Some("yes") | Some("available") | Some("likely") => Availability::Yes,
            Some("possibly") | Some("maybe") => Availability::Possibly,
            _ => Availability::Unlikely,
        }
    }
}

/// The candidate domains checked for a brand, in prompt order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainContext {
    pub variations: Vec<String>,
}

impl DomainContext {
    pub fn for_brand(brand: &str) -> Self {
        Self {
            variations: domain_variations(brand),
        }
    }

    fn variation(&self, index: usize) -> String {
        self.variations
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("domain-{}.com", index + 1))
    }
}

/// Builds the standard domain candidates for a brand: lowercase, whitespace removed.
pub fn domain_variations(brand: &str) -> Vec<String> {
    let base: String = brand
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    vec![
        format!("{base}.com"),
        format!("{base}.io"),
        format!("{base}.co"),
        format!("get{base}.com"),
        format!("{base}app.com"),
    ]
}

/// The model's assessment of one candidate domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheck {
    pub domain: String,
    pub available: Availability,
    /// 0 when the model gave no usable rating, otherwise 1-10.
    pub rating: u8,
    pub reason: String,
}

impl Record for DomainCheck {
    type Context = DomainContext;

    fn schema() -> &'static RecordSchema {
        &DOMAIN_SCHEMA
    }

    fn from_fields(fields: &ExtractedFields, index: usize, ctx: &DomainContext) -> Self {
        let domain = match fields.text("domain") {
            Some(domain) => truncate_with_ellipsis(domain, DOMAIN_MAX),
            None => ctx.variation(index),
        };
        let rating = parse_leading_int(fields.text("rating")).min(u32::from(RATING_MAX)) as u8;

        Self {
            domain,
            available: Availability::parse(fields.text("available")),
            rating,
            reason: bounded(fields.text("reason"), "No assessment available.", REASON_MAX),
        }
    }

    fn placeholder(index: usize, ctx: &DomainContext) -> Self {
        Self {
            domain: ctx.variation(index),
            available: Availability::Unlikely,
            rating: 0,
            reason: "Not assessed.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{parse_records, ParseOptions};

    #[test]
    fn test_domain_variations() {
        assert_eq!(
            domain_variations("Bright Path"),
            vec![
                "brightpath.com",
                "brightpath.io",
                "brightpath.co",
                "getbrightpath.com",
                "brightpathapp.com",
            ]
        );
    }

    #[test]
    fn test_availability_parse() {
        assert_eq!(Availability::parse(Some("Yes")), Availability::Yes);
        assert_eq!(Availability::parse(Some("possibly (common word)")), Availability::Possibly);
        assert_eq!(Availability::parse(Some("**Unlikely**")), Availability::Unlikely);
        assert_eq!(Availability::parse(Some("no idea")), Availability::Unlikely);
        assert_eq!(Availability::parse(None), Availability::Unlikely);
    }

    #[test]
    fn test_rating_coercion() {
        let ctx = DomainContext::for_brand("Lumen");
        let raw = "Domain: lumen.com\nAvailable: Unlikely\nRating: 8/10\nReason: Short and brandable.\n\n\
                   Domain: lumen.io\nAvailable: Yes\nRating: excellent\nReason: Tech friendly.\n\n\
                   Domain: lumen.co\nRating: 42";
        let checks: Vec<DomainCheck> = parse_records(raw, 5, &ctx, ParseOptions::default()).unwrap();
        assert_eq!(checks[0].rating, 8);
        assert_eq!(checks[1].rating, 0);
        assert_eq!(checks[2].rating, 10);
    }

    #[test]
    fn test_missing_domain_falls_back_to_variation_at_same_position() {
        let ctx = DomainContext::for_brand("Lumen");
        let raw = "Domain: lumen.com\nRating: 7\n\nAvailable: Possibly\nRating: 6";
        let checks: Vec<DomainCheck> = parse_records(raw, 5, &ctx, ParseOptions::default()).unwrap();
        assert_eq!(checks[1].domain, "lumen.io");
        assert_eq!(checks[1].available, Availability::Possibly);
        assert_eq!(checks[4].domain, "lumenapp.com");
        assert_eq!(checks[4].reason, "Not assessed.");
    }

    #[test]
    fn test_reason_capped_at_80_chars() {
        let ctx = DomainContext::for_brand("Lumen");
        let raw = format!("Domain: lumen.com\nReason: {}", "r".repeat(120));
        let checks: Vec<DomainCheck> = parse_records(&raw, 1, &ctx, ParseOptions::default()).unwrap();
        assert_eq!(checks[0].reason.chars().count(), REASON_MAX);
    }
}
