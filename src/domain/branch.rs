use serde::Serialize;

use crate::domain::change_type::ChangeType;
use crate::domain::record::IssueRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_parts(change_type: ChangeType, ticket_key: &str, description: &str) -> Self {
        Self(format!(
            "{}/{}/{}",
            change_type.as_str(),
            ticket_key.trim(),
            description.trim()
        ))
    }
}

/// Copy-ready git strings derived from an analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitStrings {
    pub branch_name: BranchName,
    pub commit_message: String,
    pub merge_request_title: String,
}

impl GitStrings {
    pub fn from_record(record: &IssueRecord) -> Self {
        let ticket = record.jira_id.trim();
        Self {
            branch_name: BranchName::from_parts(
                record.change_type,
                ticket,
                &record.kebab_description,
            ),
            commit_message: format!(
                "{}({}): {}",
                record.change_type,
                ticket,
                record.short_summary.trim()
            ),
            merge_request_title: format!("{}: {}", ticket, record.proper_title.trim()),
        }
    }
}
