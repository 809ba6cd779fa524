//! Validates the provider's reply text into a `GenerationResult`.
//!
//! The response schema is only a hint to the provider, so every required
//! field is checked explicitly instead of trusting a successful parse.

use serde_json::{Map, Value};

use crate::llm_client::strip_json_fences;
use crate::outreach::generator::GenerationError;
use crate::outreach::models::{Analysis, GenerationResult};

pub fn parse_generation(text: Option<&str>) -> Result<GenerationResult, GenerationError> {
    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(GenerationError::EmptyResponse),
    };

    let value: Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| GenerationError::MalformedResponse(format!("reply is not valid JSON: {e}")))?;

    let root = value.as_object().ok_or_else(|| {
        GenerationError::MalformedResponse("reply is not a JSON object".to_string())
    })?;

    let script = required_string(root, "script", "script")?;
    let analysis = root
        .get("analysis")
        .ok_or_else(|| missing("analysis"))?
        .as_object()
        .ok_or_else(|| {
            GenerationError::MalformedResponse("`analysis` is not an object".to_string())
        })?;

    Ok(GenerationResult {
        script,
        analysis: Analysis {
            customer_analysis: required_string(
                analysis,
                "customerAnalysis",
                "analysis.customerAnalysis",
            )?,
            connection_point: required_string(
                analysis,
                "connectionPoint",
                "analysis.connectionPoint",
            )?,
            value_prop: required_string(analysis, "valueProp", "analysis.valueProp")?,
        },
    })
}

fn required_string(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<String, GenerationError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(missing(path)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(GenerationError::MalformedResponse(format!(
            "`{path}` is not a string"
        ))),
    }
}

fn missing(path: &str) -> GenerationError {
    GenerationError::MalformedResponse(format!("missing required field `{path}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{"script":"Hi Mr. Lee, noticed ACME's recent expansion — quick chat on cutting onboarding time?","analysis":{"customerAnalysis":"Growing firm","connectionPoint":"Industry trend","valueProp":"Faster onboarding"}}"#;

    fn assert_malformed(text: &str, needle: &str) {
        match parse_generation(Some(text)) {
            Err(GenerationError::MalformedResponse(msg)) => {
                assert!(msg.contains(needle), "{msg:?} should mention {needle:?}")
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_well_formed_reply_exactly() {
        let result = parse_generation(Some(WELL_FORMED)).unwrap();
        assert_eq!(
            result.script,
            "Hi Mr. Lee, noticed ACME's recent expansion — quick chat on cutting onboarding time?"
        );
        assert_eq!(result.analysis.customer_analysis, "Growing firm");
        assert_eq!(result.analysis.connection_point, "Industry trend");
        assert_eq!(result.analysis.value_prop, "Faster onboarding");
    }

    #[test]
    fn test_over_length_script_is_accepted_and_flagged() {
        let result = parse_generation(Some(WELL_FORMED)).unwrap();
        let length = result.script_length();
        assert_eq!(length.chars, 84);
        assert!(length.over_limit);
    }

    #[test]
    fn test_parsed_result_serializes_back_to_input() {
        let result = parse_generation(Some(WELL_FORMED)).unwrap();
        let input: Value = serde_json::from_str(WELL_FORMED).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), input);
    }

    #[test]
    fn test_unicode_and_escapes_preserved() {
        let text = r#"{"script":"李总您好，\"数字化\"方案想和您交流","analysis":{"customerAnalysis":"制造业","connectionPoint":"展会","valueProp":"降本"}}"#;
        let result = parse_generation(Some(text)).unwrap();
        assert_eq!(result.script, "李总您好，\"数字化\"方案想和您交流");
    }

    #[test]
    fn test_code_fenced_reply_is_accepted() {
        let fenced = format!("```json\n{WELL_FORMED}\n```");
        assert!(parse_generation(Some(&fenced)).is_ok());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = r#"{"script":"hi","extra":1,"analysis":{"customerAnalysis":"a","connectionPoint":"b","valueProp":"c","mood":"x"}}"#;
        assert!(parse_generation(Some(text)).is_ok());
    }

    #[test]
    fn test_absent_payload_is_empty_response() {
        assert!(matches!(
            parse_generation(None),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_blank_payload_is_empty_response() {
        assert!(matches!(
            parse_generation(Some("")),
            Err(GenerationError::EmptyResponse)
        ));
        assert!(matches!(
            parse_generation(Some("  \n ")),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert_malformed("Sure! Here is your script: hi", "not valid JSON");
        assert_malformed(r#"{"script":"hi""#, "not valid JSON");
    }

    #[test]
    fn test_non_object_is_malformed() {
        assert_malformed(r#"["hi"]"#, "not a JSON object");
    }

    #[test]
    fn test_missing_analysis_is_malformed() {
        assert_malformed(r#"{"script":"hi"}"#, "`analysis`");
    }

    #[test]
    fn test_missing_script_is_malformed() {
        assert_malformed(
            r#"{"analysis":{"customerAnalysis":"a","connectionPoint":"b","valueProp":"c"}}"#,
            "`script`",
        );
    }

    #[test]
    fn test_each_missing_analysis_field_is_malformed() {
        let fields = ["customerAnalysis", "connectionPoint", "valueProp"];
        for omitted in fields {
            let analysis: Map<String, Value> = fields
                .iter()
                .filter(|f| **f != omitted)
                .map(|f| (f.to_string(), Value::String("x".to_string())))
                .collect();
            let text = serde_json::json!({ "script": "hi", "analysis": analysis }).to_string();
            assert_malformed(&text, &format!("analysis.{omitted}"));
        }
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        assert_malformed(
            r#"{"script":null,"analysis":{"customerAnalysis":"a","connectionPoint":"b","valueProp":"c"}}"#,
            "missing required field `script`",
        );
    }

    #[test]
    fn test_wrong_types_are_malformed() {
        assert_malformed(
            r#"{"script":42,"analysis":{"customerAnalysis":"a","connectionPoint":"b","valueProp":"c"}}"#,
            "`script` is not a string",
        );
        assert_malformed(r#"{"script":"hi","analysis":"great"}"#, "not an object");
    }
}
