use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
};

use super::{Answer, DnsChecker, DnsError, DnsStatus, LookupRecords, RecordKind, check_with};

/// [`DnsChecker`] backed by the system resolver configuration.
///
/// Lookups block; there is no timeout beyond the resolver's own options.
pub struct SystemDnsChecker {
    resolver: Resolver,
}

impl SystemDnsChecker {
    pub fn new() -> Result<Self, DnsError> {
        let resolver = Resolver::from_system_conf().map_err(DnsError::resolver_init)?;
        Ok(Self { resolver })
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl DnsChecker for SystemDnsChecker {
    fn check(&self, ascii_domain: &str) -> DnsStatus {
        if ascii_domain.is_empty() {
            return DnsStatus::unknown();
        }
        check_with(&self.resolver, ascii_domain)
    }
}

impl LookupRecords for Resolver {
    fn lookup(&self, name: &str, kind: RecordKind) -> Answer {
        // trailing dot: skip the search list
        let fqdn = if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{name}.")
        };

        let found = match kind {
            RecordKind::Mx => self.mx_lookup(fqdn.as_str()).map(|l| l.iter().next().is_some()),
            RecordKind::A => self.ipv4_lookup(fqdn.as_str()).map(|l| l.iter().next().is_some()),
            RecordKind::Aaaa => self.ipv6_lookup(fqdn.as_str()).map(|l| l.iter().next().is_some()),
        };

        match found {
            Ok(true) => Answer::Found,
            Ok(false) => Answer::Empty,
            Err(err) => classify(name, kind, &err),
        }
    }
}

fn classify(name: &str, kind: RecordKind, err: &ResolveError) -> Answer {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Answer::Empty,
        _ => {
            trace_debug!("{:?} lookup failed for {}: {}", kind, name, err);
            Answer::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use trust_dns_resolver::proto::{
        op::{Query, ResponseCode},
        rr::{Name, RecordType},
    };

    use super::*;

    fn no_records(code: ResponseCode) -> ResolveError {
        let name = Name::from_ascii("nowhere.example.").expect("name");
        ResolveErrorKind::NoRecordsFound {
            query: Box::new(Query::query(name, RecordType::MX)),
            soa: None,
            negative_ttl: None,
            response_code: code,
            trusted: true,
        }
        .into()
    }

    #[test]
    fn missing_records_are_a_definite_no() {
        for code in [ResponseCode::NXDomain, ResponseCode::NoError] {
            let err = no_records(code);
            assert_eq!(classify("nowhere.example", RecordKind::Mx, &err), Answer::Empty);
        }
    }

    #[test]
    fn other_failures_are_unknown() {
        let errors: [ResolveError; 2] = [
            ResolveErrorKind::Timeout.into(),
            ResolveError::from("no connections available"),
        ];
        for err in &errors {
            assert_eq!(classify("example.com", RecordKind::A, err), Answer::Failed);
        }
    }
}
