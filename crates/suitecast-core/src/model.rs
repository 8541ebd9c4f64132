//! Test result tree: run → suites → cases.
//!
//! Trees are built upstream by the harness and only read here. `status` is
//! authoritative and never recomputed from the counts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NotifyError, NotifyResult};

/// Serde helpers: durations arrive as numbers or numeric strings.
mod serde_secs {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_secs<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = serde_json::Value::deserialize(d)?;
        match v {
            serde_json::Value::Null => Ok(0),
            serde_json::Value::Number(num) => {
                if let Some(n) = num.as_u64() {
                    return Ok(n);
                }
                match num.as_f64() {
                    Some(f) if f >= 0.0 && f.is_finite() => Ok(f.trunc() as u64),
                    _ => Err(serde::de::Error::custom(format!(
                        "duration must be non-negative, got: {num}"
                    ))),
                }
            }
            serde_json::Value::String(s) => parse_leading_secs(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid duration: {s:?}"))),
            other => Err(serde::de::Error::custom(format!(
                "duration must be number or string, got: {other}"
            ))),
        }
    }

    /// Leading integer part of a numeric string ("5", "5.7", " 12s").
    pub(super) fn parse_leading_secs(s: &str) -> Option<u64> {
        let digits: String = s
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

/// Outcome of a run, suite or case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn is_pass(self) -> bool {
        self == Self::Pass
    }

    pub fn is_fail(self) -> bool {
        self == Self::Fail
    }
}

/// One complete test execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub name: String,

    pub status: Status,

    pub passed: u64,

    pub total: u64,

    /// Duration in whole seconds.
    #[serde(default, deserialize_with = "serde_secs::deserialize_secs")]
    pub duration: u64,

    /// Suites in execution order.
    #[serde(default)]
    pub suites: Vec<SuiteResult>,
}

/// Named grouping of cases within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub name: String,

    pub status: Status,

    pub passed: u64,

    pub total: u64,

    /// Duration in whole seconds (harnesses may send it as a string).
    #[serde(default, deserialize_with = "serde_secs::deserialize_secs")]
    pub duration: u64,

    #[serde(default)]
    pub cases: Vec<CaseResult>,
}

/// Individual test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,

    pub status: Status,

    /// Failure text, present when the case failed.
    #[serde(default)]
    pub failure: Option<String>,
}

impl RunResult {
    /// Reject trees that break `passed <= total` anywhere.
    pub fn validate(&self) -> NotifyResult<()> {
        if self.passed > self.total {
            return Err(NotifyError::malformed(format!(
                "run '{}' has passed ({}) > total ({})",
                self.name, self.passed, self.total
            )));
        }
        for suite in &self.suites {
            if suite.passed > suite.total {
                return Err(NotifyError::malformed(format!(
                    "suite '{}' has passed ({}) > total ({})",
                    suite.name, suite.passed, suite.total
                )));
            }
        }
        Ok(())
    }

    /// Suites that failed, in execution order.
    pub fn failed_suites(&self) -> impl Iterator<Item = &SuiteResult> {
        self.suites.iter().filter(|s| s.status.is_fail())
    }
}

impl CaseResult {
    pub fn failure_text(&self) -> &str {
        self.failure.as_deref().unwrap_or("")
    }
}

/// Parse results JSON: either a single run object or an array of runs.
///
/// The shape is picked from the first non-whitespace byte so serde errors
/// keep their field and position.
pub fn parse_results(raw: &str) -> NotifyResult<Vec<RunResult>> {
    let parsed = match raw.trim_start().as_bytes().first() {
        Some(b'[') => serde_json::from_str::<Vec<RunResult>>(raw),
        _ => serde_json::from_str::<RunResult>(raw).map(|run| vec![run]),
    };
    parsed.map_err(|e| NotifyError::malformed(format!("failed to parse results JSON: {}", e)))
}

/// Read and parse a results file.
pub fn load_results(path: &Path) -> NotifyResult<Vec<RunResult>> {
    let raw = std::fs::read_to_string(path).map_err(|e| NotifyError::Io {
        message: format!("failed to read results {}: {}", path.display(), e),
    })?;
    parse_results(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_duration_from_string() {
        let suite: SuiteResult = serde_json::from_str(
            r#"{"name":"A","status":"FAIL","passed":1,"total":2,"duration":"5"}"#,
        )
        .unwrap();
        assert_eq!(suite.duration, 5);
        assert!(suite.cases.is_empty());
    }

    #[test]
    fn test_duration_truncates_fraction() {
        let suite: SuiteResult = serde_json::from_str(
            r#"{"name":"A","status":"PASS","passed":1,"total":1,"duration":5.9}"#,
        )
        .unwrap();
        assert_eq!(suite.duration, 5);

        let suite: SuiteResult = serde_json::from_str(
            r#"{"name":"A","status":"PASS","passed":1,"total":1,"duration":"7.25"}"#,
        )
        .unwrap();
        assert_eq!(suite.duration, 7);
    }

    #[test]
    fn test_duration_rejects_garbage() {
        let err = serde_json::from_str::<SuiteResult>(
            r#"{"name":"A","status":"PASS","passed":1,"total":1,"duration":"soon"}"#,
        );
        assert!(err.is_err());

        let err = serde_json::from_str::<SuiteResult>(
            r#"{"name":"A","status":"PASS","passed":1,"total":1,"duration":-3}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_parse_leading_secs() {
        assert_eq!(serde_secs::parse_leading_secs("12s"), Some(12));
        assert_eq!(serde_secs::parse_leading_secs(" 3"), Some(3));
        assert_eq!(serde_secs::parse_leading_secs("x3"), None);
    }

    #[test]
    fn test_validate_passed_exceeds_total() {
        let run: RunResult = serde_json::from_str(
            r#"{"name":"r","status":"PASS","passed":4,"total":3,"duration":1}"#,
        )
        .unwrap();
        assert!(matches!(
            run.validate(),
            Err(NotifyError::MalformedResult { .. })
        ));
    }

    #[test]
    fn test_validate_suite_counts() {
        let run: RunResult = serde_json::from_str(
            r#"{"name":"r","status":"FAIL","passed":1,"total":3,"duration":1,
                "suites":[{"name":"s","status":"FAIL","passed":9,"total":1,"duration":1}]}"#,
        )
        .unwrap();
        let err = run.validate().unwrap_err();
        assert!(err.to_string().contains("suite 's'"));
    }

    #[test]
    fn test_parse_results_single_or_array() {
        let one = r#"{"name":"r","status":"PASS","passed":1,"total":1,"duration":1}"#;
        assert_eq!(parse_results(one).unwrap().len(), 1);

        let many = format!("[{one},{one}]");
        assert_eq!(parse_results(&many).unwrap().len(), 2);

        assert!(parse_results("{}").is_err());
    }

    #[test]
    fn test_parse_results_error_names_bad_value() {
        let err = parse_results(r#"{"name":"r","status":"PASSED","passed":1,"total":1}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("PASSED"), "{err}");
        assert!(err.contains("line 1 column"), "{err}");

        let err = parse_results(r#"[{"name":"r","status":"FAIL","total":1}]"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("passed"), "{err}");
    }

    #[test]
    fn test_failed_suites_in_order() {
        let run: RunResult = serde_json::from_str(
            r#"{"name":"r","status":"FAIL","passed":1,"total":3,"duration":1,"suites":[
                {"name":"a","status":"FAIL","passed":0,"total":1},
                {"name":"b","status":"PASS","passed":1,"total":1},
                {"name":"c","status":"FAIL","passed":0,"total":1}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = run.failed_suites().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_failure_text_defaults_empty() {
        let case: CaseResult = serde_json::from_str(r#"{"name":"t","status":"FAIL"}"#).unwrap();
        assert_eq!(case.failure_text(), "");
    }
}
