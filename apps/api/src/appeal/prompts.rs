//! Prompt templates for the appeal generator.
//!
//! Each template is paired with exactly one parser mode in `sections.rs`:
//! the bracket template with header lookup, the delimiter template with the
//! `---` splitter. `AppealGenerator` enforces the pairing.

use crate::config::PromptFormat;

pub const OVERVIEW_MARKER: &str = "[Business Model Overview]";
pub const DETAILS_MARKER: &str = "[Business Model Details]";
pub const ADDITIONAL_MARKER: &str = "[Additional Information]";

const BRACKET_TEMPLATE: &str = "Create a Google Ads appeal for {business_name}. Format the response EXACTLY like this:

[Business Model Overview]
Please provide a brief description of your business model being advertised in this account.
(Your answer here)

[Business Model Details]
Please provide a brief description of your business model being advertised in this domain(s).
(Your answer here)

[Additional Information]
Do you have any additional information you'd like us to take into account during the review?
(Your answer here)

Use a professional tone. Do not include any text before or after these bracketed sections. Do not include disclaimers, extra headings, or explanations. Each section must be clearly marked with its header in square brackets.";

const DELIMITER_TEMPLATE: &str = "Create a Google Ads appeal for {business_name} in exactly three parts, in this order:

1. A brief description of the business model being advertised in this account.
2. A brief description of the business model being advertised in the domain(s).
3. Any additional information the reviewer should take into account.

Separate each part from the next with a line containing exactly ---. Use a professional tone. Do not number the parts, do not add headings, and do not include any text before the first part or after the last.";

/// Renders the prompt for `format`, substituting the business name verbatim.
pub fn render(format: PromptFormat, business_name: &str) -> String {
    let template = match format {
        PromptFormat::Bracket => BRACKET_TEMPLATE,
        PromptFormat::Delimiter => DELIMITER_TEMPLATE,
    };
    template.replace("{business_name}", business_name)
}
