//! Wire shape of [`ValidationResult`].

use serde::{Deserialize, Serialize};

use crate::dns::DnsStatus;
use crate::lists::ListOutcome;

use super::{Reason, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultJson {
    pub query: Option<String>,
    pub corrections: Corrections,
    pub simple_results: SimpleResults,
    pub reasons: Vec<Reason>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub dns: DnsStatus,
    #[serde(default)]
    pub lists: Vec<ListOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corrections {
    pub normalized: Option<String>,
    pub suggestion: Option<String>,
    pub suggestion_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResults {
    pub format_valid: bool,
    pub is_sendable: bool,
    /// Derived from `warnings`; ignored when reading.
    #[serde(default)]
    pub has_warnings: bool,
}

impl From<ValidationResult> for ResultJson {
    fn from(r: ValidationResult) -> Self {
        let has_warnings = r.has_warnings();
        Self {
            query: r.query,
            corrections: Corrections {
                normalized: r.normalized,
                suggestion: r.suggestion,
                suggestion_score: r.suggestion_score,
            },
            simple_results: SimpleResults {
                format_valid: r.format_valid,
                is_sendable: r.is_sendable,
                has_warnings,
            },
            reasons: r.reasons,
            warnings: r.warnings,
            dns: DnsStatus::new(r.domain_exists, r.has_mx),
            lists: r.lists,
        }
    }
}

impl From<ResultJson> for ValidationResult {
    fn from(j: ResultJson) -> Self {
        Self {
            query: j.query,
            format_valid: j.simple_results.format_valid,
            is_sendable: j.simple_results.is_sendable,
            reasons: j.reasons,
            warnings: j.warnings,
            normalized: j.corrections.normalized,
            suggestion: j.corrections.suggestion,
            suggestion_score: j.corrections.suggestion_score,
            domain_exists: j.dns.domain_exists,
            has_mx: j.dns.has_mx,
            lists: j.lists,
        }
    }
}
