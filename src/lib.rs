mod config;
mod cursor;
mod input;
mod matcher;
mod parser;
mod record;
mod render;

pub use config::{Config, ConfigError, OutputConfig, ParserConfig};
pub use cursor::{QuestionCursor, Status, Step};
pub use input::{InputError, lines_from_str, load_lines};
pub use matcher::{CATEGORY_LABELS, LineMatch, MATCHERS, Matcher};
pub use parser::{ParseOptions, ScanState, parse, parse_text, parse_with_options};
pub use record::{NO_FOLLOW_UP, PartialRecord, QuestionRecord};
pub use render::{OutputFormat, RenderError, RenderOptions, render};

/// Parse a script with config-driven options and render it in one go.
pub fn script_to_output<S: AsRef<str>>(
    lines: &[S],
    config: &Config,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let records = parse_with_options(lines, &config.parser.parse_options());
    render(&records, config.output.format, options)
}
