use serde::{Deserialize, Serialize};

use crate::domain::change_type::ChangeType;

/// Structured result of one analysis, as returned by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub jira_id: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub kebab_description: String,
    pub short_summary: String,
    pub proper_title: String,
    pub brief_summary: String,
    pub how_to_test: String,
}

/// Wire names of the record fields, in schema order.
pub const RECORD_FIELDS: [&str; 7] = [
    "jiraId",
    "type",
    "kebabDescription",
    "shortSummary",
    "properTitle",
    "briefSummary",
    "howToTest",
];
