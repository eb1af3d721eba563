use serde::Deserialize;
use thiserror::Error;

use crate::cursor::{QuestionCursor, Status};
use crate::record::QuestionRecord;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize questions: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered questions with an indented follow-up
    #[default]
    Text,
    /// One heading per question
    Markdown,
    /// Array of `{mainQuestion, followUpQuestion}` objects
    Json,
    /// One truncated line per question with progress markers
    Outline,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub outline_width: usize,
    /// 1-based cursor position used by the outline.
    pub current: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            outline_width: 40,
            current: 1,
        }
    }
}

/// Render records in the requested format.
pub fn render(
    records: &[QuestionRecord],
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let out = match format {
        OutputFormat::Text => to_text(records),
        OutputFormat::Markdown => to_markdown(records),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            json
        }
        OutputFormat::Outline => to_outline(records, options),
    };
    Ok(out)
}

fn to_text(records: &[QuestionRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}\n", i + 1, record.main_question));
        out.push_str(&format!("   Follow-up: {}\n", record.follow_up_question));
    }
    out
}

fn to_markdown(records: &[QuestionRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("### Question {}\n\n", i + 1));
        out.push_str(&record.main_question);
        out.push_str("\n\n**Follow-up:** ");
        out.push_str(&record.follow_up_question);
        out.push_str("\n\n");
    }
    out
}

fn to_outline(records: &[QuestionRecord], options: &RenderOptions) -> String {
    let cursor = QuestionCursor::at(options.current, records.len());
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let marker = match cursor.status(i + 1) {
            Status::Answered => "[x]",
            Status::Current => "[>]",
            Status::Upcoming => "[ ]",
        };
        out.push_str(&format!(
            "{marker} {}. {}\n",
            i + 1,
            truncate(&record.main_question, options.outline_width)
        ));
    }
    out
}

/// Cut `text` to `width` characters, marking the cut with `...`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord {
                main_question: "Tell me about a conflict you resolved with a teammate.".to_string(),
                follow_up_question: "How did it end?".to_string(),
            },
            QuestionRecord {
                main_question: "What is your biggest weakness?".to_string(),
                follow_up_question: "No follow-up question provided.".to_string(),
            },
        ]
    }

    #[test]
    fn test_text() {
        let out = render(&sample(), OutputFormat::Text, &RenderOptions::default()).unwrap();
        assert_eq!(
            out,
            "1. Tell me about a conflict you resolved with a teammate.\n   Follow-up: How did it end?\n\n\
             2. What is your biggest weakness?\n   Follow-up: No follow-up question provided.\n"
        );
    }

    #[test]
    fn test_markdown() {
        let records = &sample()[1..];
        let out = render(records, OutputFormat::Markdown, &RenderOptions::default()).unwrap();
        assert_eq!(
            out,
            "### Question 1\n\nWhat is your biggest weakness?\n\n**Follow-up:** No follow-up question provided.\n\n"
        );
    }

    #[test]
    fn test_json_uses_camel_case() {
        let out = render(&sample(), OutputFormat::Json, &RenderOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["followUpQuestion"], "How did it end?");
        assert_eq!(value[1]["mainQuestion"], "What is your biggest weakness?");
    }

    #[test]
    fn test_outline_truncates_and_marks_progress() {
        let options = RenderOptions {
            outline_width: 40,
            current: 2,
        };
        let out = render(&sample(), OutputFormat::Outline, &options).unwrap();
        assert_eq!(
            out,
            "[x] 1. Tell me about a conflict you resolved wi...\n\
             [>] 2. What is your biggest weakness?\n"
        );
    }

    #[test]
    fn test_empty_records() {
        for format in [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Outline] {
            assert_eq!(render(&[], format, &RenderOptions::default()).unwrap(), "");
        }
        assert_eq!(
            render(&[], OutputFormat::Json, &RenderOptions::default()).unwrap(),
            "[]\n"
        );
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo", 5), "héllo");
        assert_eq!(truncate("héllo!", 5), "héllo...");
    }
}
