// Plain-text PDF extraction - pure Rust via lopdf content stream parsing
use std::path::{Path, PathBuf};

use anyhow::Result;
use lopdf::{Document, Object};

use crate::batch::DocumentSource;
use crate::types::ExtractError;

/// A PDF on disk, presented to the batch driver as a document source.
pub struct PdfFile {
    path: PathBuf,
    name: String,
}

impl PdfFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for PdfFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract_text(&self) -> Result<String, ExtractError> {
        extract_text(&self.path).map_err(|e| ExtractError(e.to_string()))
    }
}

/// Extract the plain text of every page, in page order.
pub fn extract_text(path: &Path) -> Result<String> {
    let document = Document::load(path)?;
    let mut text = String::new();

    for (_page_number, page_id) in document.get_pages() {
        let page = document.get_object(page_id)?.as_dict()?;
        let contents = match page.get(b"Contents") {
            Ok(contents) => contents,
            // Pages with no content stream contribute nothing
            Err(_) => continue,
        };

        let data = content_data(&document, contents)?;
        let page_text = text_from_content(&data);
        if !page_text.trim().is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(page_text.trim_end());
        }
    }

    Ok(text)
}

// Resolve a Contents entry down to raw bytes (reference, stream or array)
fn content_data(document: &Document, contents: &Object) -> Result<Vec<u8>> {
    match contents {
        Object::Reference(id) => {
            let obj = document.get_object(*id)?;
            content_data(document, obj)
        }
        Object::Stream(stream) => Ok(stream.decompressed_content()?),
        Object::Array(arr) => {
            let mut data = Vec::new();
            for item in arr {
                data.extend_from_slice(&content_data(document, item)?);
            }
            Ok(data)
        }
        _ => Ok(Vec::new()),
    }
}

// Walk the content stream line by line and collect show-text operators.
// Text runs within one line are joined directly; positioning operators
// (Td/TD/T*) and end-of-text blocks break lines.
fn text_from_content(data: &[u8]) -> String {
    let content = String::from_utf8_lossy(data);
    let mut text = String::new();

    for line in content.lines() {
        let line = line.trim();

        if line.ends_with("Tj") || line.ends_with("'") || line.ends_with("\"") {
            if let Some(run) = text_from_tj(line) {
                push_run(&mut text, &run);
            }
        } else if line.ends_with("TJ") {
            if let Some(run) = text_from_tj_array(line) {
                push_run(&mut text, &run);
            }
        } else if line.ends_with("Td") || line.ends_with("TD") || line == "T*" || line == "ET" {
            if !text.ends_with('\n') && !text.is_empty() {
                text.push('\n');
            }
        }
    }

    text
}

fn push_run(text: &mut String, run: &str) {
    if !text.is_empty() && !text.ends_with(char::is_whitespace) {
        text.push(' ');
    }
    text.push_str(run);
}

// Text between parentheses of a Tj operator
fn text_from_tj(line: &str) -> Option<String> {
    let start = line.find('(')?;
    let end = line.rfind(')')?;
    if end > start {
        Some(decode_pdf_string(&line[start + 1..end]))
    } else {
        None
    }
}

// Strings inside a TJ array, glyph offsets dropped
fn text_from_tj_array(line: &str) -> Option<String> {
    let start = line.find('[')?;
    let end = line.rfind(']')?;
    if end <= start {
        return None;
    }

    let mut result = String::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut current = String::new();

    for ch in line[start + 1..end].chars() {
        if in_string {
            if escaped {
                current.push(ch);
                escaped = false;
            } else if ch == '\\' {
                current.push(ch);
                escaped = true;
            } else if ch == ')' {
                in_string = false;
                result.push_str(&decode_pdf_string(&current));
            } else {
                current.push(ch);
            }
        } else if ch == '(' {
            in_string = true;
            current.clear();
        }
    }

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

// Basic PDF literal string decoder: escape sequences only
fn decode_pdf_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('(') => result.push('('),
                Some(')') => result.push(')'),
                Some(other) => result.push(other),
                None => {}
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tj_operator() {
        assert_eq!(text_from_tj("(transparência) Tj"), Some("transparência".to_string()));
        assert_eq!(text_from_tj("BT"), None);
    }

    #[test]
    fn test_tj_array_joins_strings() {
        let line = "[(acesso) -250 (à) -250 (informação)] TJ";
        assert_eq!(text_from_tj_array(line), Some("acessoàinformação".to_string()));
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_pdf_string("a\\(b\\)c"), "a(b)c");
        assert_eq!(decode_pdf_string("linha\\nquebrada"), "linha\nquebrada");
        assert_eq!(decode_pdf_string("sem escapes"), "sem escapes");
    }

    #[test]
    fn test_content_stream_text() {
        let data = b"BT\n/F1 12 Tf\n72 700 Td\n(A lei exige) Tj\n(transpar\\352ncia.) Tj\nET\n";
        let text = text_from_content(data);
        assert!(text.contains("A lei exige"));
        assert!(text.contains("transpar"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let pdf = PdfFile::new(PathBuf::from("/nonexistent/arquivo.pdf"));
        assert_eq!(pdf.name(), "arquivo.pdf");
        assert!(pdf.extract_text().is_err());
    }
}
