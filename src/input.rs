use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read script at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Script looks like JSON but is not a question payload: {source}")]
    Json { source: serde_json::Error },
}

/// Shapes the question-generation service is known to return.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    /// Template or started interview: `{"questions": {"questions": [...]}}`.
    Wrapped { questions: QuestionList },
    /// Bare list of raw lines.
    Lines(Vec<String>),
}

#[derive(Deserialize)]
struct QuestionList {
    questions: Vec<String>,
}

/// Read a script file and split it into raw lines.
pub fn load_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    lines_from_str(&content)
}

/// Split script content into raw lines.
///
/// JSON payloads (a wrapped template or a plain array) are unpacked. Content
/// that is not valid JSON, including text whose first line happens to start
/// with a bracket, is treated as one raw line per line.
pub fn lines_from_str(content: &str) -> Result<Vec<String>, InputError> {
    let trimmed = content.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        debug!("reading script as plain text");
        return Ok(plain_lines(content));
    }

    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            debug!("script is not JSON ({e}), reading as plain text");
            return Ok(plain_lines(content));
        }
    };

    let payload: Payload =
        serde_json::from_value(value).map_err(|source| InputError::Json { source })?;
    let lines = match payload {
        Payload::Wrapped { questions } => {
            debug!("reading script from wrapped JSON payload");
            questions.questions
        }
        Payload::Lines(lines) => {
            debug!("reading script from JSON array");
            lines
        }
    };
    Ok(lines)
}

fn plain_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
