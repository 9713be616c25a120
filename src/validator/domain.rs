/// Lowercases `domain` and encodes it to IDNA ASCII. When conversion fails
/// the lowercased input is returned unchanged.
pub(crate) fn ascii_lowercase_domain(domain: &str) -> String {
    let lower = domain.to_lowercase();
    match idna::domain_to_ascii(&lower) {
        Ok(ascii) => ascii,
        Err(_) => lower,
    }
}

/// Empty, `..`, or a leading/trailing `-` or `.`.
pub(crate) fn is_malformed(ascii_domain: &str) -> bool {
    ascii_domain.is_empty()
        || ascii_domain.contains("..")
        || ascii_domain.starts_with(['-', '.'])
        || ascii_domain.ends_with(['-', '.'])
}
