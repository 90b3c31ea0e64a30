use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::context::AppContext;
use crate::domain::branch::GitStrings;
use crate::domain::record::IssueRecord;
use crate::error::{AppError, AppResult};

const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Default)]
pub struct AnalyzeCommandArgs {
    pub context: Option<String>,
    pub context_file: Option<PathBuf>,
    pub details: Option<String>,
    pub details_file: Option<PathBuf>,
    pub checkout: bool,
}

#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub record: IssueRecord,
    pub git: GitStrings,
    /// Result of `--checkout`; a git failure never discards the record.
    pub checkout: Option<AppResult<()>>,
}

pub async fn run(ctx: &AppContext, args: AnalyzeCommandArgs) -> AppResult<AnalyzeOutcome> {
    if is_stdin(args.context_file.as_deref()) && is_stdin(args.details_file.as_deref()) {
        return Err(AppError::Configuration(
            "only one of --context-file and --details-file can read stdin".to_string(),
        ));
    }

    let context = read_input(args.context, args.context_file.as_deref())?;
    let details = read_input(args.details, args.details_file.as_deref())?;
    debug!(
        model = %ctx.config.gemini_model,
        context_len = context.len(),
        details_len = details.len(),
        "starting analysis"
    );

    let record = ctx.analyzer.analyze(&context, &details).await?;
    let git = GitStrings::from_record(&record);

    let checkout = if args.checkout {
        Some(ctx.version_control.checkout_branch(&git.branch_name).await)
    } else {
        None
    };

    Ok(AnalyzeOutcome {
        record,
        git,
        checkout,
    })
}

fn is_stdin(file: Option<&Path>) -> bool {
    file.is_some_and(|path| path.as_os_str() == STDIN_PATH)
}

/// Inline text wins over a file; a file path of `-` reads stdin.
fn read_input(inline: Option<String>, file: Option<&Path>) -> AppResult<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    match file {
        Some(path) if is_stdin(Some(path)) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path).map_err(|err| {
            AppError::Configuration(format!("unable to read {}: {err}", path.display()))
        }),
        None => Ok(String::new()),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    record: &'a IssueRecord,
    git: &'a GitStrings,
}

pub fn render_json(outcome: &AnalyzeOutcome) -> AppResult<String> {
    serde_json::to_string_pretty(&JsonReport {
        record: &outcome.record,
        git: &outcome.git,
    })
    .map_err(|err| AppError::Configuration(format!("failed to render JSON: {err}")))
}

pub fn render_text(outcome: &AnalyzeOutcome) -> String {
    let sections = [
        ("Branch Name", outcome.git.branch_name.as_str()),
        ("Commit Message", outcome.git.commit_message.as_str()),
        ("Merge Request Title", outcome.git.merge_request_title.as_str()),
        ("Brief Summary", outcome.record.brief_summary.as_str()),
        ("How to Test", outcome.record.how_to_test.as_str()),
    ];

    sections
        .iter()
        .map(|(label, value)| format!("{label}\n{}\n", value.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}
