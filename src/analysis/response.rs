use serde_json::error::Category;

use crate::domain::record::IssueRecord;
use crate::error::AnalysisError;

/// Parses raw model output into a record. No partial recovery: any parse or
/// shape problem rejects the whole response.
pub fn interpret(raw: &str) -> Result<IssueRecord, AnalysisError> {
    serde_json::from_str::<IssueRecord>(raw.trim()).map_err(|err| match err.classify() {
        Category::Data => AnalysisError::SchemaMismatch(err.to_string()),
        Category::Syntax | Category::Eof | Category::Io => {
            AnalysisError::MalformedOutput(err.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::change_type::ChangeType;

    const BUGFIX_RESPONSE: &str = r#"{"jiraId":"1","type":"bugfix","kebabDescription":"button-broken","shortSummary":"fix button crash","properTitle":"Fix Button Crash","briefSummary":"Clicking X crashes the app.","howToTest":"1. Click X\n2. Verify no crash"}"#;

    #[test]
    fn returns_field_values_verbatim() {
        let record = interpret(BUGFIX_RESPONSE).unwrap();
        assert_eq!(
            record,
            IssueRecord {
                jira_id: "1".to_string(),
                change_type: ChangeType::Bugfix,
                kebab_description: "button-broken".to_string(),
                short_summary: "fix button crash".to_string(),
                proper_title: "Fix Button Crash".to_string(),
                brief_summary: "Clicking X crashes the app.".to_string(),
                how_to_test: "1. Click X\n2. Verify no crash".to_string(),
            }
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let padded = format!("\n  {BUGFIX_RESPONSE}\n");
        assert!(interpret(&padded).is_ok());
    }

    #[test]
    fn rejects_non_json_text() {
        let err = interpret("not json").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedOutput(_)), "{err:?}");

        let err = interpret("").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedOutput(_)), "{err:?}");
    }

    #[test]
    fn rejects_each_missing_field() {
        let full: serde_json::Value = serde_json::from_str(BUGFIX_RESPONSE).unwrap();
        for field in crate::domain::record::RECORD_FIELDS {
            let mut partial = full.clone();
            partial.as_object_mut().unwrap().remove(field);
            let err = interpret(&partial.to_string()).unwrap_err();
            assert!(
                matches!(err, AnalysisError::SchemaMismatch(_)),
                "{field}: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_null_and_non_string_values() {
        let null_field = BUGFIX_RESPONSE.replace(r#""jiraId":"1""#, r#""jiraId":null"#);
        assert!(matches!(
            interpret(&null_field),
            Err(AnalysisError::SchemaMismatch(_))
        ));

        let numeric_field = BUGFIX_RESPONSE.replace(r#""jiraId":"1""#, r#""jiraId":1"#);
        assert!(matches!(
            interpret(&numeric_field),
            Err(AnalysisError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn rejects_unknown_change_type() {
        let hotfix = BUGFIX_RESPONSE.replace(r#""type":"bugfix""#, r#""type":"hotfix""#);
        assert!(matches!(
            interpret(&hotfix),
            Err(AnalysisError::SchemaMismatch(_))
        ));
    }
}
