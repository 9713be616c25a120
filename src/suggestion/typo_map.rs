use std::collections::HashMap;
use std::path::Path;

use phf::phf_map;

use crate::distance::{self, Metric};
use crate::validator::ascii_lowercase_domain;

use super::{DomainSuggestionProvider, SuggestedDomain};

const BUILTIN_TYPOS: phf::Map<&'static str, &'static str> = phf_map! {
    "gmial.com" => "gmail.com",
    "gmai.com" => "gmail.com",
    "gamil.com" => "gmail.com",
    "gnail.com" => "gmail.com",
    "gmail.co" => "gmail.com",
    "gmail.con" => "gmail.com",
    "gmail.cm" => "gmail.com",
    "gmaill.com" => "gmail.com",
    "googlemail.con" => "googlemail.com",
    "yaho.com" => "yahoo.com",
    "yahooo.com" => "yahoo.com",
    "yhoo.com" => "yahoo.com",
    "yahoo.con" => "yahoo.com",
    "hotmial.com" => "hotmail.com",
    "hotmal.com" => "hotmail.com",
    "hotmai.com" => "hotmail.com",
    "hotmail.con" => "hotmail.com",
    "outlok.com" => "outlook.com",
    "outllook.com" => "outlook.com",
    "outlook.con" => "outlook.com",
    "iclod.com" => "icloud.com",
    "icloud.con" => "icloud.com",
    "gmx.con" => "gmx.de",
    "web.dee" => "web.de",
    "t-onlne.de" => "t-online.de",
    "tonline.de" => "t-online.de",
    "protonmail.con" => "protonmail.com",
};

/// Exact `typo -> correction` lookup, no fuzzy matching.
///
/// The score is derived from the distance between typo and correction.
#[derive(Debug, Clone, Default)]
pub struct TypoMap {
    entries: HashMap<String, String>,
    metric: Metric,
}

impl TypoMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut map = Self::new();
        for (typo, correction) in BUILTIN_TYPOS.entries() {
            map.insert(typo, correction);
        }
        map
    }

    /// Parses `typo,correction` lines. `#` starts a comment; blank and
    /// malformed lines are skipped.
    pub fn from_text(text: &str) -> Self {
        let mut map = Self::new();
        for line in text.lines() {
            let line = line.split('#').next().unwrap_or_default();
            let Some((typo, correction)) = line.split_once(',') else {
                continue;
            };
            map.insert(typo, correction);
        }
        map
    }

    /// Unreadable files yield an empty map.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let map = Self::from_text(&text);
                trace_debug!("loaded {} typo corrections from {}", map.len(), path.display());
                map
            }
            Err(err) => {
                trace_warn!("typo map {} unreadable: {}", path.display(), err);
                Self::new()
            }
        }
    }

    /// Registers a correction. Both sides are stored lowercased and
    /// IDNA-encoded; self-mappings and empty sides are ignored.
    pub fn insert(&mut self, typo: &str, correction: &str) {
        let typo = ascii_lowercase_domain(typo.trim());
        let correction = ascii_lowercase_domain(correction.trim());
        if typo.is_empty() || correction.is_empty() || typo == correction {
            return;
        }
        self.entries.insert(typo, correction);
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn get(&self, typo: &str) -> Option<&str> {
        self.entries
            .get(&ascii_lowercase_domain(typo.trim()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DomainSuggestionProvider for TypoMap {
    fn suggest(&self, domain: &str) -> Option<SuggestedDomain> {
        let key = ascii_lowercase_domain(domain.trim());
        let correction = self.entries.get(&key)?;
        let score = distance::normalized_score(&key, correction, self.metric);
        Some(SuggestedDomain::new(correction.clone(), score))
    }
}
