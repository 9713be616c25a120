use std::fmt;

use crate::lists::ListOutcome;

/// Why an address is invalid or not deliverable.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    Empty,
    MissingAt,
    LocalTooLong,
    DomainTooLong,
    AddressTooLong,
    DomainMalformed,
    Syntax,
    DomainNotFound,
    NoMx,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::MissingAt => "missing_at",
            Self::LocalTooLong => "local_too_long",
            Self::DomainTooLong => "domain_too_long",
            Self::AddressTooLong => "address_too_long",
            Self::DomainMalformed => "domain_malformed",
            Self::Syntax => "syntax",
            Self::DomainNotFound => "domain_not_found",
            Self::NoMx => "no_mx",
        }
    }

    /// Reasons produced by the DNS step rather than by format checks.
    pub fn is_deliverability(self) -> bool {
        matches!(self, Self::DomainNotFound | Self::NoMx)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one [`EmailValidator::validate`](super::EmailValidator::validate)
/// call. Built once by the pipeline, read-only afterwards.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "with-serde",
    serde(into = "super::json::ResultJson", from = "super::json::ResultJson")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub(crate) query: Option<String>,
    pub(crate) format_valid: bool,
    pub(crate) is_sendable: bool,
    pub(crate) reasons: Vec<Reason>,
    pub(crate) warnings: Vec<String>,
    pub(crate) normalized: Option<String>,
    pub(crate) suggestion: Option<String>,
    pub(crate) suggestion_score: Option<f64>,
    pub(crate) domain_exists: Option<bool>,
    pub(crate) has_mx: Option<bool>,
    pub(crate) lists: Vec<ListOutcome>,
}

impl ValidationResult {
    /// Terminal result for input that never reached the `@` split.
    pub(crate) fn rejected(query: &str, reason: Reason) -> Self {
        Self {
            query: Some(query.to_string()),
            format_valid: false,
            is_sendable: false,
            reasons: vec![reason],
            warnings: Vec::new(),
            normalized: None,
            suggestion: None,
            suggestion_score: None,
            domain_exists: None,
            has_mx: None,
            lists: Vec::new(),
        }
    }

    /// Trimmed input.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn format_valid(&self) -> bool {
        self.format_valid
    }

    pub fn is_sendable(&self) -> bool {
        self.is_sendable
    }

    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    pub fn has_reason(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Local part verbatim, domain lowercased and IDNA-ASCII encoded.
    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub fn suggestion_score(&self) -> Option<f64> {
        self.suggestion_score
    }

    /// `None` when DNS was not consulted or could not conclude.
    pub fn domain_exists(&self) -> Option<bool> {
        self.domain_exists
    }

    pub fn has_mx(&self) -> Option<bool> {
        self.has_mx
    }

    pub fn lists(&self) -> &[ListOutcome] {
        &self.lists
    }

    pub fn list(&self, name: &str) -> Option<&ListOutcome> {
        self.lists.iter().find(|o| o.name == name)
    }
}

/// Appends `item` unless already present.
pub(crate) fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}
