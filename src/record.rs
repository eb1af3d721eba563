use serde::{Deserialize, Serialize};

/// Follow-up text for a question that never had one.
pub const NO_FOLLOW_UP: &str = "No follow-up question provided.";

/// A finished question, as handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub main_question: String,
    pub follow_up_question: String,
}

/// The question currently being accumulated during a scan.
///
/// Both fields treat an empty string as unset, so `None` is the only
/// "missing" state that is ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub main_question: Option<String>,
    pub follow_up_question: Option<String>,
}

impl PartialRecord {
    pub fn has_main_question(&self) -> bool {
        self.main_question.is_some()
    }

    /// Set the main question unless one is already present. First write wins.
    pub fn offer_main_question(&mut self, text: String) {
        if self.main_question.is_none() && !text.is_empty() {
            self.main_question = Some(text);
        }
    }

    /// Replace the follow-up. An empty capture clears it.
    pub fn set_follow_up(&mut self, text: String) {
        self.follow_up_question = if text.is_empty() { None } else { Some(text) };
    }

    /// Turn the partial into a record, or `None` if no main question was seen.
    pub fn finalize(self, sentinel: &str) -> Option<QuestionRecord> {
        let main_question = self.main_question?;
        let follow_up_question = self
            .follow_up_question
            .unwrap_or_else(|| sentinel.to_string());
        Some(QuestionRecord {
            main_question,
            follow_up_question,
        })
    }
}
