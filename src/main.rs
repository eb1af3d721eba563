use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use interview_questions::{Config, OutputFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "questions")]
#[command(about = "Extract interview questions and follow-ups from a generated script")]
struct Cli {
    /// Script file (plain text or JSON payload), or - for stdin
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file
    #[arg(short, long, default_value = "questions.toml")]
    config: PathBuf,

    /// Keep the first and last line instead of treating them as intro/outro
    #[arg(long)]
    keep_framing: bool,

    /// Current question (1-based) for the outline format
    #[arg(long, default_value_t = 1)]
    current: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut config = match Config::load_from_path(&cli.config)? {
        Some(config) => {
            log::debug!("Loaded config from {}", cli.config.display());
            config
        }
        None => Config::compiled_default(),
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.keep_framing {
        config.parser.strip_framing = false;
    }

    let lines = if cli.input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read script from stdin")?;
        interview_questions::lines_from_str(&content)?
    } else {
        interview_questions::load_lines(&cli.input)?
    };
    log::debug!("Read {} raw lines", lines.len());

    let options = RenderOptions {
        outline_width: config.output.outline_width,
        current: cli.current,
    };
    let rendered = interview_questions::script_to_output(&lines, &config, &options)?;

    match cli.output {
        Some(output) => {
            fs::write(&output, rendered)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Created {}", output.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
