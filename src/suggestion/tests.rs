use super::reference::max_distance;
use super::*;
use crate::distance::Metric;

#[test]
fn threshold_scales_with_length() {
    assert_eq!(max_distance(0), 1);
    assert_eq!(max_distance(5), 1);
    assert_eq!(max_distance(6), 2);
    assert_eq!(max_distance(10), 2);
    assert_eq!(max_distance(11), 3);
}

#[test]
fn reference_finds_close_provider() {
    let refs = ReferenceDomains::default();
    let s = refs.suggest("gmal.com").expect("suggestion");
    assert_eq!(s.domain, "gmail.com");
    assert!(s.score > 0.8 && s.score < 1.0);
}

#[test]
fn reference_exact_match_scores_one() {
    let refs = ReferenceDomains::default();
    let s = refs.suggest("yahoo.com").expect("suggestion");
    assert_eq!(s.domain, "yahoo.com");
    assert_eq!(s.score, 1.0);
}

#[test]
fn reference_rejects_distant_domain() {
    let refs = ReferenceDomains::default();
    assert!(refs.suggest("example.org").is_none());
    assert!(refs.suggest("").is_none());
}

#[test]
fn reference_normalizes_entries() {
    let refs = ReferenceDomains::new([" Gmail.COM ", "# comment", "", "gmail.com", "web.de"]);
    assert_eq!(refs.domains(), ["gmail.com", "web.de"]);
}

#[test]
fn reference_uses_configured_metric() {
    // "gmial.com" is two edits from gmail.com, one transposition.
    let lev = ReferenceDomains::new(["gmail.com"]);
    let dam = ReferenceDomains::new(["gmail.com"]).with_metric(Metric::Damerau);
    let s_lev = lev.suggest("gmial.com").expect("within threshold");
    let s_dam = dam.suggest("gmial.com").expect("within threshold");
    assert!(s_dam.score > s_lev.score);
}

#[test]
fn reference_short_needle_allows_one_edit() {
    let refs = ReferenceDomains::new(["web.de"]);
    assert!(refs.suggest("wb.de").is_some());
    assert!(refs.suggest("wb.d").is_none());
}

#[test]
fn reference_encodes_idn_query() {
    let refs = ReferenceDomains::new(["xn--mnchen-3ya.de"]);
    let s = refs.suggest("MÜNCHEN.de").expect("suggestion");
    assert_eq!(s.domain, "xn--mnchen-3ya.de");
}

#[test]
fn reference_encodes_idn_entries() {
    let refs = ReferenceDomains::new(["München.de"]);
    assert_eq!(refs.domains(), ["xn--mnchen-3ya.de"]);
    let s = refs.suggest("münchen.de").expect("suggestion");
    assert_eq!(s.domain, "xn--mnchen-3ya.de");
    assert_eq!(s.score, 1.0);
}

#[test]
fn typo_map_encodes_idn_keys() {
    let map = TypoMap::from_text("gmäil.com,gmail.com\nexample.com,Bücher.de\n");
    assert_eq!(map.get("GMÄIL.com"), Some("gmail.com"));
    assert_eq!(map.suggest_domain("xn--bcher-kva.de"), None);
    let s = map.suggest("example.com").expect("suggestion");
    assert_eq!(s.domain, "xn--bcher-kva.de");
}

#[test]
fn typo_map_parses_text() {
    let map = TypoMap::from_text(
        "# typos\nYaho.com, yahoo.com\ngmx.de,gmx.de\nbroken line\n\ngmial.com,gmail.com # swap\n",
    );
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("YAHO.COM"), Some("yahoo.com"));
    assert_eq!(map.get("gmx.de"), None);
    assert_eq!(map.get("gmial.com"), Some("gmail.com"));
}

#[test]
fn typo_map_scores_are_derived() {
    let map = TypoMap::from_text("yaho.com,yahoo.com");
    let s = map.suggest("yaho.com").expect("hit");
    assert_eq!(s.domain, "yahoo.com");
    assert!((s.score - (1.0 - 1.0 / 9.0)).abs() < 1e-12);
    assert!(map.suggest("yahoo.com").is_none());
}

#[test]
fn typo_map_missing_file_is_empty() {
    let map = TypoMap::from_file("/nonexistent/typos.txt");
    assert!(map.is_empty());
}

#[test]
fn builtin_has_no_self_mappings() {
    let map = TypoMap::builtin();
    assert!(!map.is_empty());
    assert_eq!(map.get("gmial.com"), Some("gmail.com"));
}

#[test]
fn chain_tries_providers_in_order() {
    let chain = SuggestionChain::new()
        .with_provider(|d: &str| (d == "a.com").then(|| SuggestedDomain::new("first.com", 0.5)))
        .with_provider(|_: &str| Some(SuggestedDomain::new("second.com", 0.1)));
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.suggest_domain("a.com").as_deref(), Some("first.com"));
    assert_eq!(chain.suggest_domain("b.com").as_deref(), Some("second.com"));
}

#[test]
fn empty_chain_suggests_nothing() {
    let chain = SuggestionChain::new();
    assert!(chain.is_empty());
    assert!(chain.suggest("gmial.com").is_none());
}

#[test]
fn default_chain_prefers_typo_table() {
    let chain = default_suggestions();
    assert_eq!(chain.suggest_domain("gmial.com").as_deref(), Some("gmail.com"));
    assert_eq!(chain.suggest_domain("yahho.com").as_deref(), Some("yahoo.com"));
}
