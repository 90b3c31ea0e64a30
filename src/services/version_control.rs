use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn checkout_branch(&self, branch: &BranchName) -> AppResult<()>;
}
