use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, Properties};

use super::{CheckType, ListConfigError, ListType};

/// One `[section]` of a list configuration file.
///
/// ```ini
/// [deny_disposable]
/// type         = deny
/// checkType    = domain
/// listName     = disposable
/// humanName    = "Disposable providers"
/// listFileName = lists/disposable_domains.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub list_type: ListType,
    pub check_type: CheckType,
    pub name: String,
    pub human_name: String,
    /// Resolved entry file path.
    pub file: PathBuf,
}

impl ListConfig {
    /// Reads and parses an INI file. A missing or unparsable file is an error;
    /// incomplete sections are skipped.
    pub fn from_ini(path: impl AsRef<Path>) -> Result<Vec<Self>, ListConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ListConfigError::read(path, e))?;
        let real = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let base_dir = real.parent().unwrap_or_else(|| Path::new("."));
        Self::from_ini_str(&text, base_dir).map_err(|e| ListConfigError::parse(path, e))
    }

    /// Parses INI text; relative list paths resolve against `base_dir`.
    pub fn from_ini_str(text: &str, base_dir: &Path) -> Result<Vec<Self>, ini::ParseError> {
        let opt = ParseOption {
            enabled_quote: true,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, opt)?;

        let mut out = Vec::new();
        for (section, props) in ini.iter() {
            let Some(section) = section else {
                continue;
            };
            match Self::from_section(section, props, base_dir) {
                Some(cfg) => out.push(cfg),
                None => trace_warn!("skipping incomplete list section [{}]", section),
            }
        }
        trace_debug!("parsed {} list sections", out.len());
        Ok(out)
    }

    fn from_section(section: &str, props: &Properties, base_dir: &Path) -> Option<Self> {
        let list_type = prop(props, "type")
            .or_else(|| prop(props, "typ"))
            .and_then(ListType::parse)?;
        let check_type = prop(props, "checkType").and_then(CheckType::parse)?;
        let file = prop(props, "listFileName").filter(|f| !f.trim().is_empty())?;

        let name = prop(props, "listName")
            .filter(|n| !n.is_empty())
            .unwrap_or(section)
            .to_string();
        let human_name = prop(props, "humanName")
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| name.clone());

        Some(Self {
            list_type,
            check_type,
            name,
            human_name,
            file: resolve_path(base_dir, file),
        })
    }
}

fn prop<'a>(props: &'a Properties, key: &str) -> Option<&'a str> {
    props
        .iter()
        .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
        .map(|(_, v)| v.trim())
}

fn is_absolute(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    raw.starts_with('/')
        || raw.starts_with('\\')
        || (bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && matches!(bytes[2], b'/' | b'\\'))
}

/// Joins `raw` onto `base_dir` unless it is absolute. A leading `config/`
/// is dropped when `base_dir` itself is named `config`.
pub(crate) fn resolve_path(base_dir: &Path, raw: &str) -> PathBuf {
    let raw = raw.trim();
    if is_absolute(raw) {
        return PathBuf::from(raw);
    }

    let normalized = raw.replace('\\', "/");
    let mut rel = normalized.as_str();

    let base_is_config = base_dir
        .file_name()
        .is_some_and(|n| n.to_string_lossy().eq_ignore_ascii_case("config"));
    if base_is_config
        && rel
            .get(..7)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("config/"))
    {
        rel = &rel[7..];
    }

    let full = base_dir.join(rel.trim_start_matches('/'));
    std::fs::canonicalize(&full).unwrap_or(full)
}
