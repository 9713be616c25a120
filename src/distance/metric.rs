use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Insertion, deletion, substitution.
    #[default]
    Levenshtein,
    /// Levenshtein plus adjacent transposition (optimal string alignment).
    Damerau,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Levenshtein => "levenshtein",
            Self::Damerau => "damerau",
        }
    }

    /// Lenient parse used by configuration: unknown names fall back to
    /// [`Metric::Levenshtein`].
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: ParseMetricError| {
            trace_warn!("{}, using levenshtein", err);
            Self::default()
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown distance metric '{0}', use: levenshtein|damerau")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "levenshtein" => Ok(Self::Levenshtein),
            "damerau" | "damerau-levenshtein" | "osa" => Ok(Self::Damerau),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}
