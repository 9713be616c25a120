use std::collections::HashSet;
use std::path::Path;

use super::{CheckType, ListConfig, ListOutcome, ListType};

const UTF8_BOM: char = '\u{feff}';

/// An allow/deny rule with its entry set, loaded once.
#[derive(Debug, Clone)]
pub struct ListRule {
    list_type: ListType,
    check_type: CheckType,
    name: String,
    human_name: String,
    entries: HashSet<String>,
}

impl ListRule {
    pub fn new(
        list_type: ListType,
        check_type: CheckType,
        name: impl Into<String>,
        human_name: impl Into<String>,
    ) -> Self {
        Self {
            list_type,
            check_type,
            name: name.into(),
            human_name: human_name.into(),
            entries: HashSet::new(),
        }
    }

    /// Adds entries; they are trimmed and lowercased, blanks dropped.
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref().trim().to_lowercase();
            if !entry.is_empty() {
                self.entries.insert(entry);
            }
        }
        self
    }

    /// Builds the rule described by `config`, reading its entry file.
    /// A missing or unreadable file gives a rule with no entries.
    pub fn load(config: &ListConfig) -> Self {
        let rule = Self::new(
            config.list_type,
            config.check_type,
            config.name.clone(),
            config.human_name.clone(),
        );
        match read_entries(&config.file) {
            Some(entries) => {
                trace_debug!(
                    "list '{}' loaded {} entries from {}",
                    config.name,
                    entries.len(),
                    config.file.display()
                );
                Self { entries, ..rule }
            }
            None => rule,
        }
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn check_type(&self) -> CheckType {
        self.check_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn human_name(&self) -> &str {
        &self.human_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(&value.to_lowercase())
    }

    /// Exact, case-insensitive match of the domain or the full address,
    /// depending on the rule's check type.
    pub fn evaluate(&self, normalized_address: &str, normalized_domain: &str) -> ListOutcome {
        let candidate = match self.check_type {
            CheckType::Domain => normalized_domain,
            CheckType::Address => normalized_address,
        };
        let matched_value = (!candidate.is_empty() && self.contains(candidate))
            .then(|| candidate.to_string());

        ListOutcome {
            name: self.name.clone(),
            human_name: self.human_name.clone(),
            list_type: self.list_type,
            check_type: self.check_type,
            matched: matched_value.is_some(),
            matched_value,
        }
    }
}

/// One entry per line; text after `#` is ignored, a leading BOM stripped.
pub fn parse_entries(text: &str) -> HashSet<String> {
    text.strip_prefix(UTF8_BOM)
        .unwrap_or(text)
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .map(|line| line.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn read_entries(path: &Path) -> Option<HashSet<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(parse_entries(&String::from_utf8_lossy(&bytes))),
        Err(err) => {
            trace_warn!("list file {} unreadable, using empty list: {}", path.display(), err);
            None
        }
    }
}
