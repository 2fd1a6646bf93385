use std::sync::LazyLock;

use regex::Regex;

static STANDARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(NASA\s?-\s?STD\s?-\s?\d+\sVolume\s\d,\s?Rev\s\w)").unwrap()
});

static REQUIREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(V\d\s*\d+)\]").unwrap());

/// Citations found on a page, in order of appearance. Duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct References {
    pub standards: Vec<String>,
    pub requirements: Vec<String>,
}

/// Scan page text for standards citations and bracketed requirement codes.
pub fn extract_references(page_text: &str) -> References {
    References {
        standards: extract_standards(page_text),
        requirements: extract_requirements(page_text),
    }
}

fn extract_standards(text: &str) -> Vec<String> {
    STANDARD_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().replace(" -", "-"))
        .collect()
}

fn extract_requirements(text: &str) -> Vec<String> {
    REQUIREMENT_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
