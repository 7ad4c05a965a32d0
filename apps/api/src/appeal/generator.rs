//! Appeal generator — validate the business name, render the prompt, make
//! one upstream call (or serve the offline stub), and parse the reply into
//! the three appeal sections.

use serde::Serialize;
use tracing::info;

use crate::appeal::prompts::{self, ADDITIONAL_MARKER, DETAILS_MARKER, OVERVIEW_MARKER};
use crate::appeal::sections::{extract_section, split_sections, SectionError};
use crate::config::{GeneratorMode, PromptFormat};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// The three sections of a drafted appeal, order-significant. All three are
/// non-empty or the generation as a whole has failed; there is no partial
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppealResult {
    pub overview: String,
    pub details: String,
    pub additional: String,
}

pub struct AppealGenerator {
    llm: LlmClient,
    format: PromptFormat,
    mode: GeneratorMode,
}

impl AppealGenerator {
    pub fn new(llm: LlmClient, format: PromptFormat, mode: GeneratorMode) -> Self {
        Self { llm, format, mode }
    }

    /// Drafts an appeal for `business_name`.
    ///
    /// Exactly one upstream call in live mode, none in offline mode, no
    /// retries either way. Any failure aborts the whole request.
    pub async fn generate(&self, business_name: &str) -> Result<AppealResult, AppError> {
        let name = business_name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Business name is required".to_string()));
        }

        let prompt = prompts::render(self.format, name);
        let started = std::time::Instant::now();

        let reply = match self.mode {
            GeneratorMode::Live => self.llm.complete(&prompt).await?,
            GeneratorMode::Offline => offline_reply(self.format, name),
        };

        let result = parse_reply(self.format, &reply)?;

        info!(
            "generated appeal for '{name}' in {:?} (mode: {:?}, format: {:?})",
            started.elapsed(),
            self.mode,
            self.format
        );

        Ok(result)
    }
}

/// Parses a raw reply with the parser mode matching the prompt format.
/// The pairing is fixed here so a bracket prompt can never be fed to the
/// delimiter splitter or vice versa.
fn parse_reply(format: PromptFormat, text: &str) -> Result<AppealResult, SectionError> {
    match format {
        PromptFormat::Bracket => Ok(AppealResult {
            overview: non_empty(
                OVERVIEW_MARKER,
                extract_section(text, OVERVIEW_MARKER, Some(DETAILS_MARKER))?,
            )?,
            details: non_empty(
                DETAILS_MARKER,
                extract_section(text, DETAILS_MARKER, Some(ADDITIONAL_MARKER))?,
            )?,
            additional: non_empty(
                ADDITIONAL_MARKER,
                extract_section(text, ADDITIONAL_MARKER, None)?,
            )?,
        }),
        PromptFormat::Delimiter => {
            let [overview, details, additional] = split_sections(text)?;
            Ok(AppealResult {
                overview,
                details,
                additional,
            })
        }
    }
}

/// A section with its header present but no text under it counts as
/// missing; the result is all-or-nothing.
fn non_empty(marker: &str, value: String) -> Result<String, SectionError> {
    if value.is_empty() {
        Err(SectionError::MissingSection(marker.to_string()))
    } else {
        Ok(value)
    }
}

/// Canned reply for offline mode, rendered in the configured format so it
/// flows through the same parser as a live reply.
fn offline_reply(format: PromptFormat, business_name: &str) -> String {
    let overview = format!(
        "{business_name} operates a legitimate business and advertises only its own products and services in this account."
    );
    let details = format!(
        "The domains in this account belong to {business_name} and present accurate pricing, contact details, and terms of service."
    );
    let additional =
        "We have reviewed our ads and landing pages against the policy and believe the enforcement was applied in error.";

    match format {
        PromptFormat::Bracket => format!(
            "{OVERVIEW_MARKER}\n{overview}\n\n{DETAILS_MARKER}\n{details}\n\n{ADDITIONAL_MARKER}\n{additional}"
        ),
        PromptFormat::Delimiter => format!("{overview}\n---\n{details}\n---\n{additional}"),
    }
}
