use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{LanguageModelService, VersionControlService};
use crate::workflow::analyze::Analyzer;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub analyzer: Arc<Analyzer>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        language_model: Arc<dyn LanguageModelService>,
    ) -> Self {
        Self {
            config,
            version_control,
            analyzer: Arc::new(Analyzer::new(language_model)),
        }
    }
}
