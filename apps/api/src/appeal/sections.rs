//! Section parser — pure functions that carve a raw completion reply into
//! the three appeal sections. No I/O, no state: the same input always yields
//! the same sections or the same failure.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("Missing section: {0}")]
    MissingSection(String),

    #[error("Expected 3 sections, got {0}")]
    InvalidSectionCount(usize),
}

/// Header-lookup mode: returns the trimmed content between `start_marker`
/// and `end_marker` (or to end of text when `end_marker` is `None`).
///
/// Content begins immediately after the first occurrence of `start_marker`
/// and ends at the first occurrence of `end_marker` past that point.
pub fn extract_section(
    text: &str,
    start_marker: &str,
    end_marker: Option<&str>,
) -> Result<String, SectionError> {
    let start = text
        .find(start_marker)
        .ok_or_else(|| SectionError::MissingSection(start_marker.to_string()))?;
    let content_start = start + start_marker.len();
    let rest = &text[content_start..];

    let content = match end_marker {
        Some(marker) => {
            let end = rest
                .find(marker)
                .ok_or_else(|| SectionError::MissingSection(marker.to_string()))?;
            &rest[..end]
        }
        None => rest,
    };

    Ok(content.trim().to_string())
}

/// Delimiter-split mode: splits `text` on any line whose content is exactly
/// `---` (surrounding blank lines are absorbed by trimming) and requires
/// exactly three non-empty segments.
pub fn split_sections(text: &str) -> Result<[String; 3], SectionError> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim() == "---" {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    segments.push(current);

    let segments: Vec<String> = segments
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    match <[String; 3]>::try_from(segments) {
        Ok(three) => Ok(three),
        Err(segments) => Err(SectionError::InvalidSectionCount(segments.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRACKET_REPLY: &str = "[Business Model Overview]\nWe sell coffee.\n\
        [Business Model Details]\nOnline ordering.\n\
        [Additional Information]\nNone.";

    #[test]
    fn test_extract_between_consecutive_markers() {
        let overview = extract_section(
            BRACKET_REPLY,
            "[Business Model Overview]",
            Some("[Business Model Details]"),
        )
        .unwrap();
        let details = extract_section(
            BRACKET_REPLY,
            "[Business Model Details]",
            Some("[Additional Information]"),
        )
        .unwrap();
        assert_eq!(overview, "We sell coffee.");
        assert_eq!(details, "Online ordering.");
    }

    #[test]
    fn test_extract_last_section_runs_to_end_of_text() {
        let additional = extract_section(BRACKET_REPLY, "[Additional Information]", None).unwrap();
        assert_eq!(additional, "None.");
    }

    #[test]
    fn test_extract_missing_start_marker_fails() {
        let err = extract_section("no markers here", "[Business Model Overview]", None).unwrap_err();
        assert_eq!(
            err,
            SectionError::MissingSection("[Business Model Overview]".to_string())
        );
    }

    #[test]
    fn test_extract_missing_end_marker_fails() {
        let err = extract_section(
            "[Business Model Overview]\ntext without the next header",
            "[Business Model Overview]",
            Some("[Business Model Details]"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SectionError::MissingSection("[Business Model Details]".to_string())
        );
    }

    #[test]
    fn test_extract_trims_surrounding_whitespace() {
        let text = "[A]\n\n   padded content  \n\n[B]\nrest";
        assert_eq!(
            extract_section(text, "[A]", Some("[B]")).unwrap(),
            "padded content"
        );
    }

    #[test]
    fn test_split_three_segments() {
        let sections = split_sections("A\n---\nB\n---\nC").unwrap();
        assert_eq!(sections, ["A", "B", "C"].map(String::from));
    }

    #[test]
    fn test_split_absorbs_blank_lines_around_delimiter() {
        let sections = split_sections("first part\n\n---\n\nsecond part\n\n ---\nthird").unwrap();
        assert_eq!(sections[0], "first part");
        assert_eq!(sections[1], "second part");
        assert_eq!(sections[2], "third");
    }

    #[test]
    fn test_split_two_segments_fails() {
        let err = split_sections("A\n---\nB").unwrap_err();
        assert_eq!(err, SectionError::InvalidSectionCount(2));
    }

    #[test]
    fn test_split_four_segments_fails() {
        let err = split_sections("A\n---\nB\n---\nC\n---\nD").unwrap_err();
        assert_eq!(err, SectionError::InvalidSectionCount(4));
    }

    #[test]
    fn test_split_inline_dashes_are_not_delimiters() {
        // `---` must occupy a line of its own to count.
        let err = split_sections("A --- B\n---\nC").unwrap_err();
        assert_eq!(err, SectionError::InvalidSectionCount(2));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = split_sections("A\n---\nB\n---\nC").unwrap();
        let second = split_sections("A\n---\nB\n---\nC").unwrap();
        assert_eq!(first, second);

        let e1 = extract_section(BRACKET_REPLY, "[Business Model Overview]", None).unwrap();
        let e2 = extract_section(BRACKET_REPLY, "[Business Model Overview]", None).unwrap();
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_compose_then_split_round_trip() {
        let sections = ["We sell coffee.", "Online ordering.", "None."];
        let text = sections.join("\n---\n");
        let parsed = split_sections(&text).unwrap();
        assert_eq!(parsed, sections.map(String::from));
    }
}
