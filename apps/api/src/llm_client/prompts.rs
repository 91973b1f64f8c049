// Shared prompt fragments. Each feature keeps its own templates in generation/prompts.rs;
// this file holds the cross-cutting pieces the text-block parser depends on.

/// Appended to every labelled-block prompt. The parser splits on blank lines and
/// matches labels at the start of a line, so the model must not decorate them.
pub const BLOCK_FORMAT_INSTRUCTION: &str = "\
    Separate each item with exactly one blank line. \
    Start every field on its own line with the label exactly as shown. \
    Do NOT use markdown, bold, numbering, or any introduction or closing remarks.";

/// Instruction for prompts whose response is deserialized as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with valid JSON only. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences.";
