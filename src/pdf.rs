use lopdf::Document;

use crate::error::DocumentParseError;

/// Source of first-page text for a fetched document.
pub trait PageText: Send + Sync {
    fn first_page_text(&self, bytes: &[u8]) -> Result<String, DocumentParseError>;
}

/// Pure Rust extraction through `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfText;

impl PageText for LopdfText {
    fn first_page_text(&self, bytes: &[u8]) -> Result<String, DocumentParseError> {
        extract_first_page_text(bytes)
    }
}

/// Text of page 1 only. Later pages are never decoded.
pub fn extract_first_page_text(bytes: &[u8]) -> Result<String, DocumentParseError> {
    if bytes.is_empty() {
        return Err(DocumentParseError::Empty);
    }

    let doc = Document::load_mem(bytes).map_err(|e| DocumentParseError::Load(e.to_string()))?;

    // get_pages is keyed by 1-based page number
    let first = *doc
        .get_pages()
        .keys()
        .next()
        .ok_or(DocumentParseError::NoPages)?;

    doc.extract_text(&[first])
        .map_err(|e| DocumentParseError::Text(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build an in-memory PDF with one text line per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn first_page_only() {
        let bytes = build_pdf(&["Relevant Technical Requirements", "Appendix page"]);
        let text = extract_first_page_text(&bytes).unwrap();
        assert!(text.contains("Relevant Technical Requirements"));
        assert!(!text.contains("Appendix"));
    }

    #[test]
    fn empty_bytes() {
        assert!(matches!(extract_first_page_text(&[]), Err(DocumentParseError::Empty)));
    }

    #[test]
    fn not_a_pdf() {
        let err = LopdfText.first_page_text(b"<html>404 Not Found</html>").unwrap_err();
        assert!(matches!(err, DocumentParseError::Load(_)));
    }
}
