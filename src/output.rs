use crate::record::DocumentRecord;

/// Multi-line, human-readable block for one record.
pub fn render_text(record: &DocumentRecord) -> String {
    format!(
        "URL: {}\nOCHMO ID: {}\nTitle: {}\nTechnical Requirements Docs:\n\t{}\nTechnical Requirements:\n\t{}",
        record.source_url(),
        record.identifier.as_deref().unwrap_or("None"),
        record.title.as_deref().unwrap_or("None"),
        record.referenced_standards.join("\n\t"),
        record.referenced_requirements.join("\n\t"),
    )
}

pub fn render_json(records: &[DocumentRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
