use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use mailsift::ValidationResult;

use crate::args::Cli;

pub fn write_reports(rows: &[ValidationResult], cli: &Cli) -> Result<()> {
    let bytes = match cli.format.as_str() {
        "human" => render_human(rows).into_bytes(),
        "json" => render_json(rows)?,
        "ndjson" => render_ndjson(rows)?,
        "csv" => render_csv(rows)?,
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    };

    match &cli.out {
        Some(path) => write_all_atomically(path, &bytes),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

pub fn any_invalid(rows: &[ValidationResult]) -> bool {
    rows.iter().any(|row| !row.format_valid())
}

fn render_human(rows: &[ValidationResult]) -> String {
    let mut out = String::new();
    for row in rows {
        for line in human_lines(row) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn human_lines(row: &ValidationResult) -> Vec<String> {
    let query = row.query().unwrap_or_default();
    let mut lines = Vec::new();
    if row.format_valid() && row.reasons().is_empty() {
        lines.push(format!("[OK]    {query}"));
    } else {
        let reasons: Vec<&str> = row.reasons().iter().map(|r| r.as_str()).collect();
        let tag = if row.format_valid() { "[UNSENDABLE]" } else { "[INVALID]" };
        lines.push(format!("{tag} {query} :: {}", reasons.join("; ")));
    }

    if let Some(suggestion) = row.suggestion() {
        let score = row.suggestion_score().unwrap_or_default();
        lines.push(format!("        did you mean: {suggestion} (score {score:.2})"));
    }
    if row.has_warnings() {
        lines.push(format!("        warnings: {}", row.warnings().join(", ")));
    }
    if row.format_valid() {
        lines.push(format!(
            "        dns: domain_exists={} has_mx={}",
            tri_state(row.domain_exists()),
            tri_state(row.has_mx())
        ));
    }
    lines
}

fn tri_state(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    }
}

#[cfg(feature = "with-serde")]
fn render_json(rows: &[ValidationResult]) -> Result<Vec<u8>> {
    let mut s = serde_json::to_string_pretty(rows)?;
    s.push('\n');
    Ok(s.into_bytes())
}

#[cfg(not(feature = "with-serde"))]
fn render_json(_: &[ValidationResult]) -> Result<Vec<u8>> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn render_ndjson(rows: &[ValidationResult]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for row in rows {
        serde_json::to_writer(&mut buf, row)?;
        buf.push(b'\n');
    }
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn render_ndjson(_: &[ValidationResult]) -> Result<Vec<u8>> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
const CSV_HEADER: [&str; 10] = [
    "query",
    "normalized",
    "formatValid",
    "isSendable",
    "reasons",
    "warnings",
    "suggestion",
    "suggestionScore",
    "domainExists",
    "hasMx",
];

#[cfg(feature = "with-csv")]
fn render_csv(rows: &[ValidationResult]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record(csv_record(row))?;
    }
    wtr.into_inner().context("flush csv")
}

#[cfg(not(feature = "with-csv"))]
fn render_csv(_: &[ValidationResult]) -> Result<Vec<u8>> {
    bail!("format=csv requires the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &ValidationResult) -> Vec<String> {
    let reasons: Vec<&str> = row.reasons().iter().map(|r| r.as_str()).collect();
    vec![
        row.query().unwrap_or_default().to_string(),
        row.normalized().unwrap_or_default().to_string(),
        row.format_valid().to_string(),
        row.is_sendable().to_string(),
        reasons.join("|"),
        row.warnings().join("|"),
        row.suggestion().unwrap_or_default().to_string(),
        row.suggestion_score()
            .map(|s| format!("{s:.4}"))
            .unwrap_or_default(),
        bool_opt_str(row.domain_exists()).to_string(),
        bool_opt_str(row.has_mx()).to_string(),
    ]
}

#[cfg(feature = "with-csv")]
fn bool_opt_str(opt: Option<bool>) -> &'static str {
    match opt {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

fn write_all_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);
    {
        let mut f = std::fs::File::create(&tmp)
            .with_context(|| format!("create {}", tmp.display()))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use mailsift::{DnsStatus, EmailValidator};

    use super::*;

    #[test]
    fn human_ok_line() {
        let v = EmailValidator::offline().with_dns(|_: &str| DnsStatus::new(Some(true), Some(true)));
        let lines = human_lines(&v.validate("a@example.com"));
        assert_eq!(lines[0], "[OK]    a@example.com");
        assert_eq!(lines[1], "        dns: domain_exists=yes has_mx=yes");
    }

    #[test]
    fn human_invalid_line_with_suggestion() {
        let lines = human_lines(&EmailValidator::offline().validate("a b@gmial.com"));
        assert_eq!(lines[0], "[INVALID] a b@gmial.com :: syntax");
        assert!(lines[1].starts_with("        did you mean: a b@gmail.com (score "));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn human_unsendable_line() {
        let v = EmailValidator::offline().with_dns(|_: &str| DnsStatus::new(Some(false), Some(false)));
        let lines = human_lines(&v.validate("a@gone.example"));
        assert_eq!(lines[0], "[UNSENDABLE] a@gone.example :: domain_not_found");
        assert!(!any_invalid(&[v.validate("a@gone.example")]));
    }

    #[cfg(feature = "with-csv")]
    #[test]
    fn csv_columns() {
        let row = EmailValidator::offline().validate("Joe@GMIAL.com");
        let record = csv_record(&row);
        assert_eq!(record.len(), CSV_HEADER.len());
        assert_eq!(record[0], "Joe@GMIAL.com");
        assert_eq!(record[1], "Joe@gmial.com");
        assert_eq!(record[2], "true");
        assert_eq!(record[6], "Joe@gmail.com");
        assert_eq!(record[8], "");
    }

    #[test]
    fn atomic_write_replaces_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "old").expect("write");
        write_all_atomically(&path, b"new").expect("atomic write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "new");
        assert!(!dir.path().join("report.txt.tmp").exists());
    }
}
