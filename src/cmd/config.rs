use std::io::{self, BufRead, Write};

use clap::{Args, Subcommand};

use crate::config::{StoredConfig, config_file_path};
use crate::error::AppResult;
use crate::infra::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    println!("Configuring jigit.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!("The API key is stored in the local config file; GEMINI_API_KEY overrides it.");
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    apply_prompt(
        &mut input,
        &mut output,
        "Gemini API key",
        &mut cfg.gemini_api_key,
        true,
    )?;
    apply_prompt(
        &mut input,
        &mut output,
        &format!("Gemini model (default {DEFAULT_MODEL})"),
        &mut cfg.gemini_model,
        false,
    )?;
    apply_prompt(
        &mut input,
        &mut output,
        &format!("Gemini base URL (default {DEFAULT_BASE_URL})"),
        &mut cfg.gemini_base_url,
        false,
    )?;

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!(
        "Gemini API key: {}",
        shown_or_unset(cfg.gemini_api_key.as_deref().map(mask_secret))
    );
    println!(
        "Gemini model: {}",
        shown_or_unset(cfg.gemini_model.clone())
    );
    println!(
        "Gemini base URL: {}",
        shown_or_unset(cfg.gemini_base_url.clone())
    );

    Ok(())
}

/// Answer to one wizard question.
#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Keep,
    Clear,
    Set(String),
}

impl Answer {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Answer::Keep,
            "-" => Answer::Clear,
            value => Answer::Set(value.to_string()),
        }
    }

    fn apply(self, target: &mut Option<String>) {
        match self {
            Answer::Keep => {}
            Answer::Clear => *target = None,
            Answer::Set(value) => *target = Some(value),
        }
    }
}

fn apply_prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: &str,
    target: &mut Option<String>,
    secret: bool,
) -> AppResult<()> {
    ask(input, output, field, target.as_deref(), secret)?.apply(target);
    Ok(())
}

fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: &str,
    current: Option<&str>,
    secret: bool,
) -> AppResult<Answer> {
    let hint = match current {
        Some(_) if secret => " [****] (Enter to keep, '-' to clear)".to_string(),
        Some(value) => format!(" [{value}] (Enter to keep, '-' to clear)"),
        None => " (Enter to skip)".to_string(),
    };
    write!(output, "{field}{hint}: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(Answer::parse(&line))
}

fn shown_or_unset(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "<not set>".to_string())
}

/// Keeps the first and last three characters of long secrets.
fn mask_secret(secret: &str) -> String {
    let chars = secret.chars().collect::<Vec<_>>();
    match chars.len() {
        0 => String::new(),
        len if len > 6 => {
            let head = chars[..3].iter().collect::<String>();
            let tail = chars[len - 3..].iter().collect::<String>();
            format!("{head}***{tail}")
        }
        _ => "***".to_string(),
    }
}
