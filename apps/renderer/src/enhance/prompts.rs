/// Context label for the summary field.
pub const SUMMARY_CONTEXT: &str = "professional summary";
/// Context label for experience descriptions.
pub const JOB_DESCRIPTION_CONTEXT: &str = "job description";
/// Context label for custom section bodies.
pub const SECTION_CONTENT_CONTEXT: &str = "section content";

/// User prompt for one field.
pub fn build_enhance_prompt(text: &str, context: &str) -> String {
    format!("Please enhance this {context} for a professional CV:\n\n{text}")
}
