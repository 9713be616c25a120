//! Startup settings and assembly of an [`EmailValidator`].

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::distance::Metric;
use crate::lists::{ListConfigError, ListManager};
use crate::suggestion::{ReferenceDomains, SuggestionChain, TypoMap};
use crate::validator::EmailValidator;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot load allow/deny lists: {source}")]
    Lists {
        #[source]
        source: ListConfigError,
    },
}

impl ConfigError {
    pub(crate) fn lists(source: ListConfigError) -> Self {
        Self::Lists { source }
    }
}

/// Everything needed to build a validator. Only `lists` can make
/// [`build`](Settings::build) fail; the other files degrade to empty tables.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// List configuration INI.
    pub lists: Option<PathBuf>,
    /// Replaces the built-in typo table.
    pub typo_map: Option<PathBuf>,
    /// Replaces [`DEFAULT_REFERENCE_DOMAINS`](crate::suggestion::DEFAULT_REFERENCE_DOMAINS).
    pub reference_domains: Option<PathBuf>,
    /// Unknown names fall back to [`Metric::Levenshtein`].
    #[cfg_attr(feature = "with-serde", serde(deserialize_with = "lenient_metric"))]
    pub metric: Metric,
    pub dns: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lists: None,
            typo_map: None,
            reference_domains: None,
            metric: Metric::default(),
            dns: true,
        }
    }
}

#[cfg(feature = "with-serde")]
fn lenient_metric<'de, D>(deserializer: D) -> Result<Metric, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = <String as serde::Deserialize>::deserialize(deserializer)?;
    Ok(Metric::parse_or_default(&name))
}

impl Settings {
    pub fn with_lists(mut self, path: impl AsRef<Path>) -> Self {
        self.lists = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_typo_map(mut self, path: impl AsRef<Path>) -> Self {
        self.typo_map = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_reference_domains(mut self, path: impl AsRef<Path>) -> Self {
        self.reference_domains = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_dns(mut self, enabled: bool) -> Self {
        self.dns = enabled;
        self
    }

    /// Typo table first, then the reference set, both scored with `metric`.
    pub fn suggestions(&self) -> SuggestionChain {
        let typos = match &self.typo_map {
            Some(path) => TypoMap::from_file(path),
            None => TypoMap::builtin(),
        };
        let references = match &self.reference_domains {
            Some(path) => ReferenceDomains::from_file(path),
            None => ReferenceDomains::default(),
        };
        SuggestionChain::new()
            .with_provider(typos.with_metric(self.metric))
            .with_provider(references.with_metric(self.metric))
    }

    pub fn build(&self) -> Result<EmailValidator, ConfigError> {
        let base = if self.dns {
            EmailValidator::new()
        } else {
            EmailValidator::offline()
        };
        let mut validator = base.with_suggestions(self.suggestions());

        if let Some(path) = &self.lists {
            let lists = ListManager::from_ini(path).map_err(ConfigError::lists)?;
            validator = validator.with_lists(lists);
        }

        trace_info!(
            "validator ready: metric={} dns={} lists={}",
            self.metric,
            self.dns,
            validator.has_lists()
        );
        Ok(validator)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::suggestion::DomainSuggestionProvider;
    use crate::validator::Reason;

    fn offline() -> Settings {
        Settings::default().with_dns(false)
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.dns);
        assert_eq!(s.metric, Metric::Levenshtein);
        assert!(s.lists.is_none());
    }

    #[test]
    fn builds_without_files() {
        let v = offline().build().expect("validator");
        let r = v.validate("joe@gmial.com");
        assert!(r.format_valid());
        assert_eq!(r.suggestion(), Some("joe@gmail.com"));
        assert_eq!(r.domain_exists(), None);
        assert!(!v.has_lists());
    }

    #[test]
    fn missing_ini_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = offline()
            .with_lists(dir.path().join("absent.ini"))
            .build()
            .expect_err("missing ini");
        assert!(matches!(
            err,
            ConfigError::Lists {
                source: ListConfigError::NotFound { .. }
            }
        ));
    }

    #[test]
    fn lists_from_ini() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("disposable.txt"), "mailinator.com\n").expect("write");
        fs::write(
            dir.path().join("lists.ini"),
            "[disposable]\ntype = deny\ncheckType = domain\nlistFileName = disposable.txt\n",
        )
        .expect("write");

        let v = offline()
            .with_lists(dir.path().join("lists.ini"))
            .build()
            .expect("validator");
        let r = v.validate("x@mailinator.com");
        assert_eq!(r.warnings(), ["deny_list:disposable"]);
        assert!(!r.has_reason(Reason::DomainNotFound));
    }

    #[test]
    fn custom_tables_replace_builtins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let typos = dir.path().join("typos.txt");
        let refs = dir.path().join("refs.txt");
        fs::write(&typos, "# custom\nexampel.org,example.org\n").expect("write");
        fs::write(&refs, "corp.example\n").expect("write");

        let chain = offline()
            .with_typo_map(&typos)
            .with_reference_domains(&refs)
            .suggestions();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.suggest_domain("exampel.org").as_deref(), Some("example.org"));
        assert_eq!(chain.suggest_domain("crop.example").as_deref(), Some("corp.example"));
        assert_eq!(chain.suggest_domain("gmial.com"), None);
    }

    #[test]
    fn unreadable_tables_degrade() {
        let chain = offline()
            .with_typo_map("/nonexistent/typos.txt")
            .with_reference_domains("/nonexistent/refs.txt")
            .suggestions();
        assert_eq!(chain.suggest_domain("gmial.com"), None);
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn metric_names_are_lenient() {
        let parse = |json: &str| serde_json::from_str::<Settings>(json).expect("settings");
        assert_eq!(parse(r#"{"metric":"hamming"}"#).metric, Metric::Levenshtein);
        assert_eq!(parse(r#"{"metric":"Damerau"}"#).metric, Metric::Damerau);
        assert_eq!(parse(r#"{"metric":"osa"}"#).metric, Metric::Damerau);

        let s = parse(r#"{"typoMap":"typos.txt","dns":false}"#);
        assert_eq!(s.metric, Metric::Levenshtein);
        assert_eq!(s.typo_map.as_deref(), Some(Path::new("typos.txt")));
        assert!(!s.dns);
    }

    #[test]
    fn metric_changes_scoring() {
        let chain = offline().with_metric(Metric::Damerau).suggestions();
        // one adjacent swap under Damerau, two edits under Levenshtein
        let swap = chain.suggest("gmali.com").expect("suggestion");
        assert_eq!(swap.domain, "gmail.com");
        let lev = offline().suggestions().suggest("gmali.com").expect("suggestion");
        assert!(swap.score > lev.score);
    }
}
