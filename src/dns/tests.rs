use std::cell::RefCell;

use super::*;

struct StubResolver {
    mx: Answer,
    a: Answer,
    aaaa: Answer,
    queried: RefCell<Vec<RecordKind>>,
}

impl StubResolver {
    fn new(mx: Answer, a: Answer, aaaa: Answer) -> Self {
        Self {
            mx,
            a,
            aaaa,
            queried: RefCell::new(Vec::new()),
        }
    }
}

impl LookupRecords for StubResolver {
    fn lookup(&self, name: &str, kind: RecordKind) -> Answer {
        assert_eq!(name, "example.com");
        self.queried.borrow_mut().push(kind);
        match kind {
            RecordKind::Mx => self.mx,
            RecordKind::A => self.a,
            RecordKind::Aaaa => self.aaaa,
        }
    }
}

#[test]
fn mx_short_circuits() {
    let stub = StubResolver::new(Answer::Found, Answer::Failed, Answer::Failed);
    let status = check_with(&stub, "example.com");
    assert_eq!(status, DnsStatus::new(Some(true), Some(true)));
    assert!(status.is_sendable());
    assert_eq!(*stub.queried.borrow(), [RecordKind::Mx]);
}

#[test]
fn address_records_without_mx() {
    let stub = StubResolver::new(Answer::Empty, Answer::Empty, Answer::Found);
    let status = check_with(&stub, "example.com");
    assert_eq!(status, DnsStatus::new(Some(true), Some(false)));
    assert!(!status.is_sendable());
}

#[test]
fn nothing_resolves() {
    let stub = StubResolver::new(Answer::Empty, Answer::Empty, Answer::Empty);
    assert_eq!(
        check_with(&stub, "example.com"),
        DnsStatus::new(Some(false), Some(false))
    );
}

#[test]
fn failures_are_unknown() {
    let stub = StubResolver::new(Answer::Failed, Answer::Empty, Answer::Failed);
    assert_eq!(check_with(&stub, "example.com"), DnsStatus::unknown());

    let stub = StubResolver::new(Answer::Failed, Answer::Found, Answer::Failed);
    assert_eq!(
        check_with(&stub, "example.com"),
        DnsStatus::new(Some(true), None)
    );
}

#[test]
fn closures_are_checkers() {
    let checker = |d: &str| DnsStatus::new(Some(d == "ok.com"), Some(false));
    assert_eq!(checker.check("ok.com").domain_exists, Some(true));
    assert_eq!(UncheckedDns.check("ok.com"), DnsStatus::unknown());
}
