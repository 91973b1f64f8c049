// All LLM prompt templates for the generation features.
// Labelled-block prompts append llm_client::prompts::BLOCK_FORMAT_INSTRUCTION;
// JSON prompts append JSON_ONLY_INSTRUCTION.

/// Idea generation. Replace `{count}`, `{skills}`, `{interest}`.
pub const IDEAS_PROMPT_TEMPLATE: &str = "Generate {count} unique and innovative business or startup ideas based on the following:
Skills: {skills}
Current Interest: {interest}

Format each idea as follows:
Title: [Concise business idea in two words]
Description: [2-3 sentences explaining the concept]

Make each idea practical, scalable, and leveraging the mentioned skills.";

/// Brand-name generation. Replace `{count}`, `{title}`, `{description}`, `{style}`.
pub const BRAND_NAMES_PROMPT_TEMPLATE: &str = "Generate {count} unique and creative brand names for the following business idea:
Business: {title}
Description: {description}
Style Preferences: {style}

Format each suggestion as:
Name: [The brand name]
Explanation: [Brief explanation of meaning and relevance, maximum 120 characters]

Make names memorable, relevant to the business concept, and matching the requested style.";

/// Logo concepts. Replace `{count}`, `{brand}`, `{colors}`, `{style}`, `{expectations}`.
pub const LOGO_PROMPT_TEMPLATE: &str = "You are a brand identity expert. Create {count} distinct logo concepts for \"{brand}\" with these preferences:
Color scheme: {colors}
Style: {style}
Additional expectations: {expectations}

Format each concept EXACTLY as:
Concept: [Concept name]
Description: [Overall logo design, maximum 200 characters]
Colors: [2-4 hex codes, e.g. #FFFFFF, #000000]
Font: [Specific font recommendation]
Symbol: [Icon or symbol description, maximum 100 characters]
Rationale: [Why this works for the brand, maximum 150 characters]";

/// Domain assessment. Replace `{brand}`, `{domains}` (one per line).
pub const DOMAIN_PROMPT_TEMPLATE: &str = "You are a domain availability expert. For these potential domain names based on the brand \"{brand}\":

{domains}

For each domain, in the order given:
1. Evaluate if it is LIKELY to be available (not registered)
2. Rate how good it is for business use (1-10)
3. Give ONE brief reason for your rating

This is an ESTIMATE ONLY. You cannot check real-time registrations.

Format each response EXACTLY as:
Domain: [domain]
Available: [Yes/Possibly/Unlikely]
Rating: [1-10]
Reason: [One brief sentence, maximum 80 characters]";

/// Business plan. Replace `{title}`, `{description}`, `{brand}`, `{market}`, `{funding}`.
pub const BUSINESS_PLAN_PROMPT_TEMPLATE: &str = "Generate a concise business plan for the following business idea and brand:

Business Idea: {title}
Description: {description}
Brand Name: {brand}
Target Market: {market}
Funding Goal: {funding}

Provide the business plan in this structured format:
- Executive Summary: [A brief overview of the business, its purpose, and goals]
- Target Market: [Description of the target audience and their needs]
- Funding Goal: [Explanation of the funding amount and its intended use]
- Next Steps: [3-5 actionable steps, one per line]

Keep the content clear, actionable, and tailored to the provided details.";

/// Mock interview questions. Replace `{count}`, `{category}`, `{exam}`, `{level}`.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Generate {count} multiple-choice {category} questions for {exam} at {level} difficulty.
Return a JSON array where each element has this EXACT structure:
{
  "question": "string",
  "options": ["string", "string", "string", "string"],
  "correctAnswer": "string",
  "explanation": "string"
}
"correctAnswer" must be exactly one of the options."#;

/// Resume analysis. Replace `{resume}`, `{job_desc}`.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Resume text:
{resume}

Job description:
{job_desc}

Analyze the resume against the job description. Calculate an ATS score (0-100) based on keyword
and content alignment. Identify key skills, experiences, or keywords present in the job
description that are missing or underrepresented in the resume.

Return a JSON object with:
- "ats_score": the calculated score (integer)
- "suggestions": a list of concise suggestions (e.g. "Add X to highlight Y")

Focus on quantifiable achievements and specific technical skills."#;
