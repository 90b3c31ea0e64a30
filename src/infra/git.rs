use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn checkout_branch(&self, branch: &BranchName) -> AppResult<()> {
        if branch.as_str().trim().is_empty() {
            return Err(AppError::VersionControl(
                "branch name cannot be empty".to_string(),
            ));
        }

        let output = Command::new("git")
            .arg("checkout")
            .arg("-b")
            .arg(branch.as_str())
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git checkout -b {} failed: {}",
                branch.as_str(),
                stderr.trim()
            )));
        }

        info!(branch = branch.as_str(), "checked out new branch");
        Ok(())
    }
}
