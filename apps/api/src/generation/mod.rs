// Feature services: each builds a prompt, makes one upstream call (ideas may retry),
// and shapes the reply through `parsing` or JSON decoding.

pub mod brand_names;
pub mod business_plan;
pub mod domains;
pub mod handlers;
pub mod ideas;
pub mod interview;
pub mod logos;
pub mod prompts;
pub mod resume_analysis;
