use std::fmt;

use serde::Serialize;

/// Metadata extracted for one published brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    #[serde(rename = "url")]
    source_url: String,
    #[serde(rename = "ochmo_id")]
    pub identifier: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "technical_requirements_docs")]
    pub referenced_standards: Vec<String>,
    #[serde(rename = "technical_requirements")]
    pub referenced_requirements: Vec<String>,
}

impl DocumentRecord {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            identifier: None,
            title: None,
            referenced_standards: Vec::new(),
            referenced_requirements: Vec::new(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Short one-line form used in log lines.
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

pub struct Summary<'a>(&'a DocumentRecord);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PdfReport(ochmo_id='{}', title='{}')",
            self.0.identifier.as_deref().unwrap_or("None"),
            self.0.title.as_deref().unwrap_or("None"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let r = DocumentRecord::new("https://x/a.pdf");
        assert_eq!(r.source_url(), "https://x/a.pdf");
        assert!(r.identifier.is_none());
        assert!(r.title.is_none());
        assert!(r.referenced_standards.is_empty());
        assert!(r.referenced_requirements.is_empty());
    }

    #[test]
    fn summary_line() {
        let mut r = DocumentRecord::new("https://x/a.pdf");
        assert_eq!(r.summary().to_string(), "PdfReport(ochmo_id='None', title='None')");
        r.identifier = Some("OCHMO-TB-1".into());
        r.title = Some("Noise".into());
        assert_eq!(r.summary().to_string(), "PdfReport(ochmo_id='OCHMO-TB-1', title='Noise')");
    }

    #[test]
    fn serializes_with_export_keys() {
        let mut r = DocumentRecord::new("https://x/a.pdf");
        r.identifier = Some("OCHMO-TB-1".into());
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["url"], "https://x/a.pdf");
        assert_eq!(v["ochmo_id"], "OCHMO-TB-1");
        assert!(v["title"].is_null());
        assert_eq!(v["technical_requirements_docs"], serde_json::json!([]));
        assert_eq!(v["technical_requirements"], serde_json::json!([]));
    }
}
