//! Allow/deny list evaluation.
//!
//! Rules come from an INI file (see [`ListConfig`]) whose sections point to
//! flat entry files. [`ListManager`] evaluates every rule, in configuration
//! order, for each validated address.

mod config;
mod error;
mod rule;
mod types;

use std::path::Path;

pub use config::ListConfig;
pub use error::ListConfigError;
pub use rule::{ListRule, parse_entries};
pub use types::{CheckType, ListOutcome, ListType};

/// Evaluates configured lists against a normalized address.
pub trait ListProvider: Send + Sync {
    /// `normalized_address` is the lowercased address, `normalized_domain`
    /// the lowercased IDNA-ASCII domain. One outcome per rule, in order.
    fn evaluate(&self, normalized_address: &str, normalized_domain: &str) -> Vec<ListOutcome>;
}

#[derive(Debug, Clone, Default)]
pub struct ListManager {
    rules: Vec<ListRule>,
}

impl ListManager {
    pub fn new(rules: Vec<ListRule>) -> Self {
        Self { rules }
    }

    /// Loads the INI and every entry file it references.
    pub fn from_ini(path: impl AsRef<Path>) -> Result<Self, ListConfigError> {
        let configs = ListConfig::from_ini(path)?;
        Ok(Self::from_configs(&configs))
    }

    pub fn from_configs(configs: &[ListConfig]) -> Self {
        let rules: Vec<ListRule> = configs.iter().map(ListRule::load).collect();
        trace_info!("list manager ready with {} rules", rules.len());
        Self { rules }
    }

    pub fn rules(&self) -> &[ListRule] {
        &self.rules
    }
}

impl ListProvider for ListManager {
    fn evaluate(&self, normalized_address: &str, normalized_domain: &str) -> Vec<ListOutcome> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(normalized_address, normalized_domain))
            .collect()
    }
}
