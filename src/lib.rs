#![forbid(unsafe_code)]
//! mailsift: e-mail address validation with format checks, DNS deliverability,
//! allow/deny lists and domain typo suggestions.
//!
//! ```no_run
//! use mailsift::EmailValidator;
//!
//! let result = EmailValidator::new().validate("joe@gmial.com");
//! assert!(result.format_valid());
//! assert_eq!(result.suggestion(), Some("joe@gmail.com"));
//! ```

#[macro_use]
mod trace;

pub mod config;
pub mod distance;
pub mod dns;
pub mod lists;
pub mod suggestion;
pub mod validator;

#[cfg(feature = "with-http")]
pub mod http;

pub use config::{ConfigError, Settings};
pub use distance::{Metric, distance, normalized_score};
pub use dns::{DnsChecker, DnsStatus, UncheckedDns};
#[cfg(feature = "with-dns")]
pub use dns::{DnsError, SystemDnsChecker};
pub use lists::{
    CheckType, ListConfig, ListConfigError, ListManager, ListOutcome, ListProvider, ListRule,
    ListType,
};
pub use suggestion::{
    DomainSuggestionProvider, ReferenceDomains, SuggestedDomain, SuggestionChain, TypoMap,
};
pub use validator::{EmailValidator, Reason, ValidationResult};
