//! Prompt and output schema sent to the language model.

use serde_json::{Map, Value, json};

use crate::domain::change_type::ChangeType;
use crate::domain::record::RECORD_FIELDS;

pub const SYSTEM_INSTRUCTION: &str = r#"You are a Senior Technical Lead. You receive JIRA ticket context and technical descriptions/bug reports.

TASK 1: GENERATE GIT STRINGS
- Branch: type/JIRA-ID/kebab-description
- Commit: type(JIRA-ID): short-summary
- MR Title: JIRA-ID: Proper Title

TASK 2: ISSUE ANALYSIS
- briefSummary: Explain 'What is the problem?' or 'What is being added?' concisely.
- howToTest: Extract reproduction steps from the input and turn them into clear verification steps. If steps aren't explicit, infer them logically.

MAPPING RULES FOR 'type':
- Defect, Bug -> bugfix
- Story, Feature, Task -> feature
- Refactor -> refactor
- Chore, Maintenance -> chore
- Test -> test
- CI/CD, Pipeline -> cicd"#;

const FIELD_DESCRIPTIONS: [&str; 7] = [
    "Extract the JIRA ID (e.g., RDSTDTL-2744)",
    "Mapping: Bug/Defect -> bugfix, Story/Feature/Task -> feature, etc.",
    "Kebab-case for branch naming",
    "lowercase meaningful message for commit",
    "Title Case for MR title",
    "A professional 2-3 sentence summary of the issue/work.",
    "A clear, numbered list of steps to verify the fix or feature.",
];

/// Everything the language model needs for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub schema: Value,
}

pub fn build_request(context: &str, details: &str) -> AnalysisRequest {
    AnalysisRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt: build_prompt(context, details),
        schema: response_schema(),
    }
}

fn build_prompt(context: &str, details: &str) -> String {
    format!("JIRA CONTEXT:\n{context}\n\nISSUE/BUG DETAILS:\n{details}\n")
}

/// Seven required string properties; `type` is further limited to the change-type tags.
pub fn response_schema() -> Value {
    let mut properties = Map::new();
    for (field, description) in RECORD_FIELDS.iter().zip(FIELD_DESCRIPTIONS) {
        let mut property = json!({
            "type": "STRING",
            "description": description,
        });
        if *field == "type" {
            property["format"] = json!("enum");
            property["enum"] = ChangeType::ALL
                .iter()
                .map(|change_type| Value::from(change_type.as_str()))
                .collect();
        }
        properties.insert((*field).to_string(), property);
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": RECORD_FIELDS,
        "propertyOrdering": RECORD_FIELDS,
    })
}
