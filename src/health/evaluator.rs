// src/health/evaluator.rs
use super::document::{HealthDocument, HealthValue};
use super::status::Verdict;
use tracing::{debug, warn};

pub const EXPECTED_STATUS: &str = "ok";
pub const EXPECTED_BACKEND_STATE: &str = "working";

/// Failures that stop evaluation before backends can be checked.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("failed to unmarshal JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to unmarshal JSON response: expected an object, found {0}")]
    NotAnObject(&'static str),

    #[error("backends is not a map")]
    BackendsNotMap,
}

/// Decode a response body into a health document.
pub fn decode(body: &[u8]) -> Result<HealthDocument, EvaluationError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    HealthDocument::from_value(value).map_err(|other| EvaluationError::NotAnObject(other.kind()))
}

/// Collect every finding in `document`.
///
/// Returns the list of warnings (empty when healthy), or an error when the
/// `backends` field is missing or not an object.
pub fn inspect(document: &HealthDocument) -> Result<Vec<String>, EvaluationError> {
    let mut warnings = Vec::new();

    if document.get("status").and_then(HealthValue::as_str) != Some(EXPECTED_STATUS) {
        warn!(status = ?document.get("status"), "health status is not ok");
        warnings.push(format!(
            "status is not {0}, expected {0}",
            EXPECTED_STATUS
        ));
    }

    let backends = document
        .get("backends")
        .and_then(HealthValue::as_object)
        .ok_or(EvaluationError::BackendsNotMap)?;

    for (name, value) in backends {
        if value.as_str() == Some(EXPECTED_BACKEND_STATE) {
            debug!(backend = %name, "backend is working");
            continue;
        }

        warn!(backend = %name, value = %value, "backend is not working");
        warnings.push(format!(
            "key {} has a value of {}, expected {}",
            name, value, EXPECTED_BACKEND_STATE
        ));
    }

    Ok(warnings)
}

/// Reduce a raw response body to a verdict.
pub fn evaluate(body: &[u8], debug: bool) -> Verdict {
    let document = match decode(body) {
        Ok(document) => document,
        Err(e) => return Verdict::critical(e.to_string()),
    };

    if debug {
        debug!(document = %document, "parsed JSON data");
    }

    match inspect(&document) {
        Ok(warnings) if warnings.is_empty() => {
            Verdict::ok(format!("all checks are working: {}", document))
        }
        Ok(warnings) => Verdict::degraded("some checks are not working", warnings),
        Err(e) => Verdict::critical(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::CheckState;

    #[test]
    fn test_all_working() {
        let verdict = evaluate(
            br#"{"status":"ok","backends":{"db":"working","cache":"working"}}"#,
            false,
        );

        assert_eq!(verdict.state, CheckState::Ok);
        assert!(verdict.messages.is_empty());
        assert!(verdict.summary.starts_with("all checks are working: "));
        assert!(verdict.summary.contains(r#""cache":"working""#));
    }

    #[test]
    fn test_backend_down() {
        let verdict = evaluate(
            br#"{"status":"ok","backends":{"db":"working","cache":"down"}}"#,
            false,
        );

        assert_eq!(verdict.state, CheckState::Critical);
        assert_eq!(
            verdict.messages,
            vec!["key cache has a value of down, expected working".to_string()]
        );
        assert!(verdict.to_string().contains("cache"));
        assert!(verdict.to_string().contains("down"));
    }

    #[test]
    fn test_status_not_ok() {
        let verdict = evaluate(br#"{"status":"degraded","backends":{}}"#, false);

        assert_eq!(verdict.state, CheckState::Critical);
        assert!(verdict.to_string().contains("status is not ok"));
    }

    #[test]
    fn test_missing_status_is_not_ok() {
        let verdict = evaluate(br#"{"backends":{"db":"working"}}"#, false);

        assert_eq!(verdict.state, CheckState::Critical);
        assert_eq!(verdict.messages, vec!["status is not ok, expected ok".to_string()]);
    }

    #[test]
    fn test_non_string_status_is_not_ok() {
        let verdict = evaluate(br#"{"status":true,"backends":{}}"#, false);
        assert_eq!(verdict.state, CheckState::Critical);
    }

    #[test]
    fn test_all_findings_collected() {
        let verdict = evaluate(
            br#"{"status":"error","backends":{"db":"timeout","cache":"down","queue":"working"}}"#,
            false,
        );

        assert_eq!(verdict.state, CheckState::Critical);
        assert_eq!(verdict.messages.len(), 3);
        assert!(verdict.messages.contains(&"status is not ok, expected ok".to_string()));
        assert!(verdict
            .messages
            .contains(&"key db has a value of timeout, expected working".to_string()));
        assert!(verdict
            .messages
            .contains(&"key cache has a value of down, expected working".to_string()));
    }

    #[test]
    fn test_non_string_backend_values() {
        let verdict = evaluate(
            br#"{"status":"ok","backends":{"a":false,"b":0,"c":null,"d":{"x":"working"}}}"#,
            false,
        );

        assert_eq!(verdict.state, CheckState::Critical);
        assert_eq!(
            verdict.messages,
            vec![
                "key a has a value of false, expected working".to_string(),
                "key b has a value of 0, expected working".to_string(),
                "key c has a value of null, expected working".to_string(),
                r#"key d has a value of {"x":"working"}, expected working"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_json() {
        let verdict = evaluate(b"not-json", false);

        assert_eq!(verdict.state, CheckState::Critical);
        assert!(verdict.summary.starts_with("failed to unmarshal JSON response"));
        assert!(verdict.messages.is_empty());
    }

    #[test]
    fn test_top_level_not_object() {
        let verdict = evaluate(br#"["ok"]"#, false);

        assert_eq!(verdict.state, CheckState::Critical);
        assert_eq!(
            verdict.summary,
            "failed to unmarshal JSON response: expected an object, found array"
        );
    }

    #[test]
    fn test_backends_not_map() {
        let verdict = evaluate(br#"{"status":"ok","backends":"not-a-map"}"#, false);

        assert_eq!(verdict.state, CheckState::Critical);
        assert_eq!(verdict.to_string(), "backends is not a map");
    }

    #[test]
    fn test_backends_missing() {
        let verdict = evaluate(br#"{"status":"degraded"}"#, true);

        assert_eq!(verdict.state, CheckState::Critical);
        assert_eq!(verdict.to_string(), "backends is not a map");
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let body = br#"{"status":"ok","backends":{"db":"working","cache":"down"}}"#;
        assert_eq!(evaluate(body, false), evaluate(body, false));
        assert_eq!(evaluate(body, true), evaluate(body, false));
    }
}
