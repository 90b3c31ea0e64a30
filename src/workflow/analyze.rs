use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info};

use crate::analysis::{build_request, interpret};
use crate::domain::record::IssueRecord;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

/// Runs analyses one at a time against a language model.
pub struct Analyzer {
    language_model: Arc<dyn LanguageModelService>,
    in_flight: AtomicBool,
}

impl Analyzer {
    pub fn new(language_model: Arc<dyn LanguageModelService>) -> Self {
        Self {
            language_model,
            in_flight: AtomicBool::new(false),
        }
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Blank input and overlapping calls are rejected without contacting the model.
    pub async fn analyze(&self, context: &str, details: &str) -> AppResult<IssueRecord> {
        if context.trim().is_empty() && details.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(AppError::Busy)?;

        let request = build_request(context, details);
        debug!(
            prompt_len = request.prompt.len(),
            "requesting structured analysis"
        );

        let outcome = match self.language_model.generate(&request).await {
            Ok(raw) => interpret(&raw),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(record) => {
                info!(
                    jira_id = %record.jira_id,
                    change_type = %record.change_type,
                    "analysis complete"
                );
                Ok(record)
            }
            Err(cause) => {
                error!(%cause, "analysis failed");
                Err(AppError::Analysis(cause))
            }
        }
    }
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
