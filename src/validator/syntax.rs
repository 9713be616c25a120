//! Address syntax: dot-atom or quoted local part, hostname or IP literal
//! domain. A practical subset of RFC 5321/5322, not a full grammar.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

static LOCAL_DOT_ATOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("static regex")
});

static LOCAL_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"(?:[\x20\x21\x23-\x5B\x5D-\x7E]|\\[\x20-\x7E])*"$"#).expect("static regex")
});

static HOST_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9]+(?:-+[a-z0-9]+)*$").expect("static regex"));

/// Splits at the last `@` and checks both halves.
pub(crate) fn is_valid_address(address: &str) -> bool {
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };
    is_valid_local(local) && is_valid_domain(domain)
}

pub(crate) fn is_valid_local(local: &str) -> bool {
    if local.is_empty() || local.len() > 64 {
        return false;
    }
    LOCAL_DOT_ATOM.is_match(local) || LOCAL_QUOTED.is_match(local)
}

pub(crate) fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        return is_valid_ip_literal(literal);
    }
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if !labels
        .iter()
        .all(|label| label.len() <= 63 && HOST_LABEL.is_match(label))
    {
        return false;
    }

    // TLD starts with a letter (punycode TLDs start with "xn--")
    labels
        .last()
        .and_then(|tld| tld.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_valid_ip_literal(literal: &str) -> bool {
    if let Some(v6) = literal
        .get(..5)
        .filter(|prefix| prefix.eq_ignore_ascii_case("ipv6:"))
        .map(|_| &literal[5..])
    {
        return v6.parse::<Ipv6Addr>().is_ok();
    }
    literal.parse::<Ipv4Addr>().is_ok()
}
