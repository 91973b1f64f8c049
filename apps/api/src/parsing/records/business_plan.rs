use serde::{Deserialize, Serialize};

use crate::parsing::fields::{ExtractedFields, FieldSpec, RecordSchema};
use crate::parsing::normalize::or_default;
use crate::parsing::records::Record;

const DEFAULT_SUMMARY: &str = "A concise overview of your business.";
const DEFAULT_NEXT_STEP: &str = "Define your next steps to launch.";

static PLAN_SCHEMA: RecordSchema = RecordSchema {
    name: "business_plan",
    fields: &[
        FieldSpec::paragraph("Executive Summary:", "summary"),
        FieldSpec::paragraph("Target Market:", "target_market"),
        FieldSpec::paragraph("Funding Goal:", "funding_goal"),
        FieldSpec::list("Next Steps:", "next_steps"),
    ],
    allow_list_markers: true,
};

/// What the user asked for; used when the model omits a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanContext {
    pub target_market: String,
    pub funding_goal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessPlan {
    pub summary: String,
    pub target_market: String,
    pub funding_goal: String,
    pub next_steps: Vec<String>,
}

impl Record for BusinessPlan {
    type Context = PlanContext;

    fn schema() -> &'static RecordSchema {
        &PLAN_SCHEMA
    }

    fn from_fields(fields: &ExtractedFields, _index: usize, ctx: &PlanContext) -> Self {
        let next_steps = match fields.items("next_steps") {
            [] => vec![DEFAULT_NEXT_STEP.to_string()],
            steps => steps.to_vec(),
        };

        Self {
            summary: or_default(fields.text("summary"), DEFAULT_SUMMARY),
            target_market: or_default(fields.text("target_market"), &ctx.target_market),
            funding_goal: or_default(fields.text("funding_goal"), &ctx.funding_goal),
            next_steps,
        }
    }

    fn placeholder(_index: usize, ctx: &PlanContext) -> Self {
        Self {
            summary: DEFAULT_SUMMARY.to_string(),
            target_market: ctx.target_market.clone(),
            funding_goal: ctx.funding_goal.clone(),
            next_steps: vec![DEFAULT_NEXT_STEP.to_string()],
        }
    }
}
