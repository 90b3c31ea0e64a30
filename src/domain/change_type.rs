use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix used for generated branch names and commit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ChangeType {
    Feature,
    Bugfix,
    Refactor,
    Chore,
    Test,
    Cicd,
}

impl ChangeType {
    pub const ALL: [ChangeType; 6] = [
        ChangeType::Feature,
        ChangeType::Bugfix,
        ChangeType::Refactor,
        ChangeType::Chore,
        ChangeType::Test,
        ChangeType::Cicd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Feature => "feature",
            ChangeType::Bugfix => "bugfix",
            ChangeType::Refactor => "refactor",
            ChangeType::Chore => "chore",
            ChangeType::Test => "test",
            ChangeType::Cicd => "cicd",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "feature" => Some(ChangeType::Feature),
            "bugfix" => Some(ChangeType::Bugfix),
            "refactor" => Some(ChangeType::Refactor),
            "chore" => Some(ChangeType::Chore),
            "test" => Some(ChangeType::Test),
            "cicd" => Some(ChangeType::Cicd),
            _ => None,
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ChangeType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).ok_or_else(|| format!("unknown change type '{value}'"))
    }
}

impl From<ChangeType> for &'static str {
    fn from(value: ChangeType) -> Self {
        value.as_str()
    }
}
