use log::trace;

use crate::matcher::{self, LineMatch, MATCHERS, Matcher};
use crate::record::{NO_FOLLOW_UP, PartialRecord, QuestionRecord};

/// Knobs for a single parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop the first and last line (intro/outro narration) before scanning.
    pub strip_framing: bool,
    /// Follow-up text for questions that never got one.
    pub sentinel: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strip_framing: true,
            sentinel: NO_FOLLOW_UP.to_string(),
        }
    }
}

/// Scan state threaded through the lines of one script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub in_progress: PartialRecord,
    pub inside_question_body: bool,
    pub records: Vec<QuestionRecord>,
}

impl ScanState {
    /// Feed one line through the matchers and return the next state.
    pub fn step(mut self, line: &str, sentinel: &str) -> Self {
        for matcher in MATCHERS {
            match matcher.apply(line) {
                LineMatch::None => {}
                LineMatch::Skip => return self,
                LineMatch::Header => {
                    trace!("header closes question body: {line:?}");
                    self.close(sentinel);
                    self.inside_question_body = false;
                    return self;
                }
                LineMatch::QuestionStart => {
                    trace!("question start: {line:?}");
                    self.close(sentinel);
                    self.inside_question_body = true;
                }
                LineMatch::FollowUp(text) => {
                    trace!("follow-up captured: {text:?}");
                    self.in_progress.set_follow_up(text);
                }
            }

            // Main text is captured between the question-start check and the
            // follow-up check, so a follow-up on the same line lands on the
            // record that line opened.
            if matcher == Matcher::QuestionStart {
                self.capture_main_question(line);
            }
        }
        self
    }

    /// Finalize whatever is still in progress and hand back the records.
    pub fn finish(mut self, sentinel: &str) -> Vec<QuestionRecord> {
        self.close(sentinel);
        self.records
    }

    fn capture_main_question(&mut self, line: &str) {
        if self.inside_question_body || matcher::is_explicit_question_label(line) {
            self.in_progress
                .offer_main_question(matcher::clean_question_text(line));
        }
    }

    /// Push the in-progress record if it has a main question. A partial with
    /// no main question is kept, so an early follow-up survives.
    fn close(&mut self, sentinel: &str) {
        if !self.in_progress.has_main_question() {
            return;
        }
        let partial = std::mem::take(&mut self.in_progress);
        if let Some(record) = partial.finalize(sentinel) {
            trace!("finalized question {}", self.records.len() + 1);
            self.records.push(record);
        }
    }
}

/// Parse a generated interview script into question records.
pub fn parse<I, S>(lines: I) -> Vec<QuestionRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_options(lines, &ParseOptions::default())
}

pub fn parse_with_options<I, S>(lines: I, options: &ParseOptions) -> Vec<QuestionRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let body = if options.strip_framing {
        strip_framing(&lines)
    } else {
        &lines[..]
    };

    body.iter()
        .fold(ScanState::default(), |state, line| {
            state.step(line.as_ref(), &options.sentinel)
        })
        .finish(&options.sentinel)
}

/// Parse a script held as a single string, one raw line per line.
pub fn parse_text(text: &str) -> Vec<QuestionRecord> {
    parse(text.lines())
}

/// Drop the intro and outro lines. Fewer than two lines leaves nothing.
fn strip_framing<S>(lines: &[S]) -> &[S] {
    if lines.len() < 2 {
        &[]
    } else {
        &lines[1..lines.len() - 1]
    }
}
