use std::io;

use thiserror::Error;

/// Message shown to the user for every failed analysis, whatever the cause.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze issue. Please ensure both inputs contain valid JIRA/Technical information.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Gemini API key not configured")]
    MissingCredential,
    #[error("failed to call Gemini: {0}")]
    Transport(String),
    #[error("Gemini responded with {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Gemini returned no candidate text")]
    EmptyResponse,
    #[error("response is not valid JSON: {0}")]
    MalformedOutput(String),
    #[error("response does not match the analysis schema: {0}")]
    SchemaMismatch(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("provide ticket context or issue details before analyzing")]
    EmptyInput,
    #[error("an analysis is already in progress")]
    Busy,
    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
