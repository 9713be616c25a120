//! Domain typo suggestions.
//!
//! Every provider answers with an optional scored candidate. Providers are
//! composed with [`SuggestionChain`], which asks each one in turn and keeps the
//! first answer.

mod reference;
mod typo_map;
mod types;

pub use reference::{DEFAULT_REFERENCE_DOMAINS, ReferenceDomains};
pub use typo_map::TypoMap;
pub use types::SuggestedDomain;

/// Source of replacement domains.
///
/// `domain` is lowercased and IDNA-ASCII encoded, and may be empty.
pub trait DomainSuggestionProvider: Send + Sync {
    fn suggest(&self, domain: &str) -> Option<SuggestedDomain>;

    fn suggest_domain(&self, domain: &str) -> Option<String> {
        self.suggest(domain).map(|s| s.domain)
    }
}

impl<F> DomainSuggestionProvider for F
where
    F: Fn(&str) -> Option<SuggestedDomain> + Send + Sync,
{
    fn suggest(&self, domain: &str) -> Option<SuggestedDomain> {
        self(domain)
    }
}

/// Providers tried in order; the first `Some` wins.
#[derive(Default)]
pub struct SuggestionChain {
    providers: Vec<Box<dyn DomainSuggestionProvider>>,
}

impl SuggestionChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: impl DomainSuggestionProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl DomainSuggestionProvider for SuggestionChain {
    fn suggest(&self, domain: &str) -> Option<SuggestedDomain> {
        self.providers.iter().find_map(|p| p.suggest(domain))
    }
}

/// Built-in typo table first, then fuzzy matching against the default
/// provider list.
pub fn default_suggestions() -> SuggestionChain {
    SuggestionChain::new()
        .with_provider(TypoMap::builtin())
        .with_provider(ReferenceDomains::default())
}

#[cfg(test)]
mod tests;
