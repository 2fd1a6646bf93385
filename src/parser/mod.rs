pub mod identifier;
pub mod references;

use tracing::warn;

use crate::pdf::PageText;
use crate::record::DocumentRecord;

pub use identifier::{derive_identifier, derive_title};
pub use references::{extract_references, References};

/// URL rules → page-1 text → reference scans.
///
/// `content` is the already-fetched document, or `None` when retrieval
/// failed. URL-derived fields are filled either way; the reference lists stay
/// empty when there is no usable page text.
pub fn parse<P: PageText + ?Sized>(
    url: &str,
    content: Option<&[u8]>,
    pdf: &P,
) -> DocumentRecord {
    let mut record = DocumentRecord::new(url);
    record.identifier = derive_identifier(url);
    record.title = derive_title(url, record.identifier.as_deref());

    let Some(bytes) = content else {
        return record;
    };

    match pdf.first_page_text(bytes) {
        Ok(text) => apply_page_text(&mut record, &text),
        Err(e) => warn!("Error parsing PDF from {}: {}", url, e),
    }
    record
}

fn apply_page_text(record: &mut DocumentRecord, text: &str) {
    let refs = extract_references(text);
    record.referenced_standards = refs.standards;
    record.referenced_requirements = refs.requirements;
}
