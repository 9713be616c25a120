use std::path::Path;

use crate::distance::{self, Metric};
use crate::validator::ascii_lowercase_domain;

use super::{DomainSuggestionProvider, SuggestedDomain};

/// Major public mailbox providers used when no reference list is configured.
pub const DEFAULT_REFERENCE_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "live.com",
    "icloud.com",
    "gmx.de",
    "web.de",
    "t-online.de",
    "proton.me",
];

/// Fuzzy matcher against a fixed set of known-good domains.
#[derive(Debug, Clone)]
pub struct ReferenceDomains {
    domains: Vec<String>,
    metric: Metric,
}

impl ReferenceDomains {
    /// Entries are trimmed, lowercased and IDNA-encoded; blanks, `#` lines and
    /// duplicates are dropped, first occurrence order kept.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for d in domains {
            let d = d.as_ref().trim();
            if d.is_empty() || d.starts_with('#') {
                continue;
            }
            let s = ascii_lowercase_domain(d);
            if !out.contains(&s) {
                out.push(s);
            }
        }
        Self {
            domains: out,
            metric: Metric::default(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Reads one domain per line. An unreadable file yields an empty set.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let set = Self::from_text(&text);
                trace_debug!(
                    "loaded {} reference domains from {}",
                    set.domains.len(),
                    path.display()
                );
                set
            }
            Err(err) => {
                trace_warn!(
                    "reference domain file {} unreadable: {}",
                    path.display(),
                    err
                );
                Self::new(std::iter::empty::<&str>())
            }
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl Default for ReferenceDomains {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_DOMAINS.iter().copied())
    }
}

/// Largest accepted distance for a needle of `len` bytes.
pub(crate) fn max_distance(len: usize) -> usize {
    match len.max(1) {
        0..=5 => 1,
        6..=10 => 2,
        _ => 3,
    }
}

impl DomainSuggestionProvider for ReferenceDomains {
    fn suggest(&self, domain: &str) -> Option<SuggestedDomain> {
        let needle = ascii_lowercase_domain(domain);
        if needle.is_empty() || self.domains.is_empty() {
            return None;
        }

        let mut best: Option<&str> = None;
        let mut best_dist = usize::MAX;
        for candidate in &self.domains {
            let dist = distance::distance(&needle, candidate, self.metric);
            if dist < best_dist {
                best_dist = dist;
                best = Some(candidate.as_str());
                if dist == 0 {
                    break;
                }
            }
        }

        let best = best?;
        if best_dist > max_distance(needle.len()) {
            return None;
        }

        let score = distance::normalized_score(&needle, best, self.metric);
        trace_debug!("reference match {} -> {} (distance {})", needle, best, best_dist);
        Some(SuggestedDomain::new(best, score))
    }
}
