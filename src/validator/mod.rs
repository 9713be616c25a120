//! The validation pipeline.
//!
//! [`EmailValidator::validate`] runs format checks, then (when the format
//! holds) DNS and list checks, and folds everything into one
//! [`ValidationResult`]. Malformed input never errors; it is reported through
//! [`Reason`] codes.

mod domain;
#[cfg(feature = "with-serde")]
mod json;
mod syntax;
mod types;

use std::fmt;

pub(crate) use domain::ascii_lowercase_domain;
#[cfg(feature = "with-serde")]
pub use json::{Corrections, ResultJson, SimpleResults};
pub use types::{Reason, ValidationResult};

use crate::dns::{DnsChecker, UncheckedDns};
use crate::lists::{ListProvider, ListType};
use crate::suggestion::{DomainSuggestionProvider, default_suggestions};
use types::push_unique;

pub const MAX_LOCAL_LEN: usize = 64;
pub const MAX_DOMAIN_LEN: usize = 255;
pub const MAX_ADDRESS_LEN: usize = 254;

/// Warning prefix for matched deny rules.
pub const DENY_LIST_WARNING: &str = "deny_list:";

pub struct EmailValidator {
    suggestions: Box<dyn DomainSuggestionProvider>,
    lists: Option<Box<dyn ListProvider>>,
    dns: Box<dyn DnsChecker>,
}

impl EmailValidator {
    /// Default suggestion chain, no lists, and the system resolver when the
    /// `with-dns` feature is enabled.
    pub fn new() -> Self {
        Self {
            suggestions: Box::new(default_suggestions()),
            lists: None,
            dns: default_dns(),
        }
    }

    /// Like [`new`](Self::new) but never touches the network.
    pub fn offline() -> Self {
        Self {
            suggestions: Box::new(default_suggestions()),
            lists: None,
            dns: Box::new(UncheckedDns),
        }
    }

    pub fn with_suggestions(mut self, provider: impl DomainSuggestionProvider + 'static) -> Self {
        self.suggestions = Box::new(provider);
        self
    }

    pub fn with_lists(mut self, lists: impl ListProvider + 'static) -> Self {
        self.lists = Some(Box::new(lists));
        self
    }

    pub fn without_lists(mut self) -> Self {
        self.lists = None;
        self
    }

    pub fn with_dns(mut self, dns: impl DnsChecker + 'static) -> Self {
        self.dns = Box::new(dns);
        self
    }

    /// Skips network lookups; DNS fields stay unknown.
    pub fn without_dns(self) -> Self {
        self.with_dns(UncheckedDns)
    }

    pub fn has_lists(&self) -> bool {
        self.lists.is_some()
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        let query = raw.trim();
        if query.is_empty() {
            return ValidationResult::rejected(query, Reason::Empty);
        }

        // quoted local parts may contain '@'
        let Some((local, domain)) = query.rsplit_once('@') else {
            return ValidationResult::rejected(query, Reason::MissingAt);
        };

        let mut reasons = Vec::new();
        if local.len() > MAX_LOCAL_LEN {
            reasons.push(Reason::LocalTooLong);
        }
        if domain.len() > MAX_DOMAIN_LEN {
            reasons.push(Reason::DomainTooLong);
        }
        if query.len() > MAX_ADDRESS_LEN {
            reasons.push(Reason::AddressTooLong);
        }

        let ascii_domain = ascii_lowercase_domain(domain);
        let normalized = format!("{local}@{ascii_domain}");

        if domain::is_malformed(&ascii_domain) {
            reasons.push(Reason::DomainMalformed);
        }
        if !syntax::is_valid_address(&normalized) {
            reasons.push(Reason::Syntax);
        }

        let (suggestion, suggestion_score) = if ascii_domain.is_empty() {
            (None, None)
        } else {
            match self.suggestions.suggest(&ascii_domain) {
                Some(s) if s.domain != ascii_domain => {
                    (Some(format!("{local}@{}", s.domain)), Some(s.score))
                }
                _ => (None, None),
            }
        };

        let mut result = ValidationResult {
            query: Some(query.to_string()),
            format_valid: false,
            is_sendable: false,
            reasons: Vec::new(),
            warnings: Vec::new(),
            normalized: Some(normalized),
            suggestion,
            suggestion_score,
            domain_exists: None,
            has_mx: None,
            lists: Vec::new(),
        };

        if !reasons.is_empty() {
            trace_debug!("{query}: format invalid {reasons:?}");
            result.reasons = reasons;
            return result;
        }

        let dns = self.dns.check(&ascii_domain);
        if dns.domain_exists == Some(false) {
            reasons.push(Reason::DomainNotFound);
        } else if dns.has_mx == Some(false) {
            reasons.push(Reason::NoMx);
        }

        let mut warnings = Vec::new();
        if let Some(lists) = &self.lists {
            let address = format!("{local}@{ascii_domain}").to_lowercase();
            result.lists = lists.evaluate(&address, &ascii_domain);
            for outcome in &result.lists {
                if outcome.list_type == ListType::Deny && outcome.matched {
                    push_unique(&mut warnings, format!("{DENY_LIST_WARNING}{}", outcome.name));
                }
            }
        }

        result.format_valid = true;
        result.is_sendable = dns.is_sendable();
        result.domain_exists = dns.domain_exists;
        result.has_mx = dns.has_mx;
        result.reasons = reasons;
        result.warnings = warnings;

        trace_debug!(
            "{query}: sendable={} reasons={:?} warnings={:?}",
            result.is_sendable,
            result.reasons,
            result.warnings
        );
        result
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EmailValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailValidator")
            .field("lists", &self.lists.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "with-dns")]
fn default_dns() -> Box<dyn DnsChecker> {
    match crate::dns::SystemDnsChecker::new() {
        Ok(checker) => Box::new(checker),
        Err(err) => {
            trace_warn!("system resolver unavailable, DNS checks disabled: {err}");
            Box::new(UncheckedDns)
        }
    }
}

#[cfg(not(feature = "with-dns"))]
fn default_dns() -> Box<dyn DnsChecker> {
    Box::new(UncheckedDns)
}
