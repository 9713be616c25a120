/// Replacement candidate for a mistyped domain.
///
/// `score` is in `[0, 1]`; higher means the candidate is closer to the input.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedDomain {
    pub domain: String,
    pub score: f64,
}

impl SuggestedDomain {
    pub fn new(domain: impl Into<String>, score: f64) -> Self {
        Self {
            domain: domain.into(),
            score: score.clamp(0.0, 1.0),
        }
    }
}
