//! Deliverability lookups.
//!
//! The pipeline only needs two tri-state answers per domain: does it resolve,
//! and does it publish MX records. `None` means the lookup could not conclude.
//! [`SystemDnsChecker`] (feature `with-dns`) queries the system resolver;
//! tests and offline callers plug in any [`DnsChecker`].

#[cfg(feature = "with-dns")]
mod error;
#[cfg(feature = "with-dns")]
mod resolver;
mod types;

#[cfg(feature = "with-dns")]
pub use error::DnsError;
#[cfg(feature = "with-dns")]
pub use resolver::SystemDnsChecker;
pub use types::DnsStatus;

pub trait DnsChecker: Send + Sync {
    /// `ascii_domain` is lowercased and IDNA-ASCII encoded.
    fn check(&self, ascii_domain: &str) -> DnsStatus;
}

impl<F> DnsChecker for F
where
    F: Fn(&str) -> DnsStatus + Send + Sync,
{
    fn check(&self, ascii_domain: &str) -> DnsStatus {
        self(ascii_domain)
    }
}

/// Never looks anything up; every answer is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct UncheckedDns;

impl DnsChecker for UncheckedDns {
    fn check(&self, _ascii_domain: &str) -> DnsStatus {
        DnsStatus::unknown()
    }
}

#[cfg_attr(not(feature = "with-dns"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordKind {
    Mx,
    A,
    Aaaa,
}

#[cfg_attr(not(feature = "with-dns"), allow(dead_code))]
/// Outcome of one record query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Answer {
    Found,
    /// Name or records do not exist.
    Empty,
    /// Timeout, SERVFAIL, I/O error...
    Failed,
}

#[cfg_attr(not(feature = "with-dns"), allow(dead_code))]
pub(crate) trait LookupRecords {
    fn lookup(&self, name: &str, kind: RecordKind) -> Answer;
}

#[cfg_attr(not(feature = "with-dns"), allow(dead_code))]
/// MX first; a domain with MX records exists and accepts mail. Otherwise the
/// domain exists if it has an A or AAAA record.
pub(crate) fn check_with<R: LookupRecords>(resolver: &R, ascii_domain: &str) -> DnsStatus {
    let mx = resolver.lookup(ascii_domain, RecordKind::Mx);
    if mx == Answer::Found {
        return DnsStatus::new(Some(true), Some(true));
    }

    let a = resolver.lookup(ascii_domain, RecordKind::A);
    let aaaa = resolver.lookup(ascii_domain, RecordKind::Aaaa);

    let domain_exists = match (a, aaaa) {
        (Answer::Found, _) | (_, Answer::Found) => Some(true),
        (Answer::Empty, Answer::Empty) => Some(false),
        _ => None,
    };
    let has_mx = match mx {
        Answer::Empty => Some(false),
        _ => None,
    };

    trace_debug!(
        "dns {}: mx={:?} a={:?} aaaa={:?}",
        ascii_domain,
        mx,
        a,
        aaaa
    );
    DnsStatus::new(domain_exists, has_mx)
}

#[cfg(test)]
mod tests;
