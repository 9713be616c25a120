#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DnsStatus {
    pub domain_exists: Option<bool>,
    pub has_mx: Option<bool>,
}

impl DnsStatus {
    pub fn new(domain_exists: Option<bool>, has_mx: Option<bool>) -> Self {
        Self {
            domain_exists,
            has_mx,
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// Both answers positive.
    pub fn is_sendable(&self) -> bool {
        self.domain_exists == Some(true) && self.has_mx == Some(true)
    }
}
