//! Line classifiers for generated interview scripts.
//!
//! Each [`Matcher`] looks at one raw line in isolation and reports a
//! [`LineMatch`]. The parser runs them in [`MATCHERS`] order; precedence
//! between them lives in the parser, not in the patterns.

use std::sync::LazyLock;

use regex::Regex;

/// What a single matcher recognised on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    None,
    /// Blank line or a bare `-` / `---` divider.
    Skip,
    /// Section header such as `### Technical Questions`.
    Header,
    /// Start of a new main question.
    QuestionStart,
    /// Follow-up label, carrying the trimmed text after it.
    FollowUp(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Divider,
    Header,
    QuestionStart,
    FollowUp,
}

/// Matchers in the order the parser consults them.
pub const MATCHERS: [Matcher; 4] = [
    Matcher::Divider,
    Matcher::Header,
    Matcher::QuestionStart,
    Matcher::FollowUp,
];

/// Section categories the question generator emits as headers.
pub const CATEGORY_LABELS: [&str; 6] = [
    "Technical",
    "Behavioral",
    "Situational",
    "Problem-solving",
    "Competency-based",
    "Cultural Fit",
];

static CATEGORY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    let labels = CATEGORY_LABELS
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(?:{labels})(?:\s+Questions?)?:?$"))
        .expect("Invalid category header regex")
});

static QUESTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\d+\.)?\s*\*?\*?(?:Q:|Question:|Tell me about|Describe|Explain|Imagine|Suppose|Can you|What|How)",
    )
    .expect("Invalid question start regex")
});

static NUMBERED_BOLD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*\*\*.*?\*\*:").expect("Invalid bold label regex"));

/// Follow-up label patterns. Order matters: the bold form must be tried
/// before the single-asterisk form, which would otherwise match inside it.
static FOLLOW_UP_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        r"(?i)\*\*Follow-up:\*\*\s*(.*)",
        r"(?i)\*Follow-up:\*\s*(.*)",
        r"(?i)Follow-up:\s*(.*)",
        r"(?i)- \*\*Follow-up\*\*:\s*(.*)",
        r"(?i)\*\*Follow-up Question:\*\*\s*(.*)",
    ]
    .map(|pattern| Regex::new(pattern).expect("Invalid follow-up regex"))
});

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("Invalid number prefix regex"));
static Q_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Q:\*\*\s*").expect("Invalid Q label regex"));
static QUESTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Question:\*\*\s*").expect("Invalid Question label regex"));
static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+").expect("Invalid bullet regex"));

impl Matcher {
    pub fn name(self) -> &'static str {
        match self {
            Matcher::Divider => "divider",
            Matcher::Header => "header",
            Matcher::QuestionStart => "question-start",
            Matcher::FollowUp => "follow-up",
        }
    }

    pub fn apply(self, line: &str) -> LineMatch {
        match self {
            Matcher::Divider if is_divider(line) => LineMatch::Skip,
            Matcher::Header if is_header(line) => LineMatch::Header,
            Matcher::QuestionStart if QUESTION_START.is_match(line) => LineMatch::QuestionStart,
            Matcher::FollowUp => match follow_up_text(line) {
                Some(text) => LineMatch::FollowUp(text),
                None => LineMatch::None,
            },
            _ => LineMatch::None,
        }
    }
}

fn is_divider(line: &str) -> bool {
    matches!(line.trim(), "" | "-" | "---")
}

fn is_header(line: &str) -> bool {
    line.starts_with("###") || CATEGORY_HEADER.is_match(line.trim_end())
}

fn follow_up_text(line: &str) -> Option<String> {
    let text = FOLLOW_UP_PATTERNS
        .iter()
        .find_map(|pattern| label_tail(pattern, line, false))?;
    Some(strip_leading_labels(text).to_string())
}

/// Trimmed text after a follow-up label. With `anchored`, the label must
/// open the text.
fn label_tail<'a>(pattern: &Regex, text: &'a str, anchored: bool) -> Option<&'a str> {
    let caps = pattern.captures(text)?;
    if anchored && caps.get(0).is_some_and(|m| m.start() != 0) {
        return None;
    }
    Some(caps.get(1).map_or("", |m| m.as_str()).trim())
}

/// Drop repeated labels such as the second one in `Follow-up: Follow-up: why?`.
fn strip_leading_labels(mut text: &str) -> &str {
    while let Some(rest) = FOLLOW_UP_PATTERNS
        .iter()
        .find_map(|pattern| label_tail(pattern, text, true))
    {
        text = rest;
    }
    text
}

/// Whether the line names itself as a question even outside a question body:
/// an inline `**Q:**` / `**Question:**` label or a `1. **Label**:` lead-in.
pub fn is_explicit_question_label(line: &str) -> bool {
    line.contains("**Q:**") || line.contains("**Question:**") || NUMBERED_BOLD_LABEL.is_match(line)
}

/// Strip numbering, question labels, a list bullet and bold markers.
pub fn clean_question_text(line: &str) -> String {
    let text = NUMBER_PREFIX.replace(line, "");
    let text = Q_LABEL.replace(&text, "");
    let text = QUESTION_LABEL.replace(&text, "");
    let text = BULLET_PREFIX.replace(&text, "");
    text.replace("**", "").trim().to_string()
}
