use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

/// Decodes `.txt` payloads as UTF-8, dropping undecodable byte sequences.
/// Extraction of plain text never fails on malformed input.
pub struct PlainTextAdapter;

/// Skips over invalid byte sequences while keeping every decodable
/// character intact, including any U+FFFD already present in the input.
fn decode_utf8_dropping_invalid(data: &[u8]) -> String {
    let mut text = String::with_capacity(data.len());
    let mut rest = data;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    text.push_str(s);
                }
                match e.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at the end of the payload.
                    None => break,
                }
            }
        }
    }

    text
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format() != Some(DocumentFormat::PlainText) {
            return Err(FileLoaderError::UnsupportedFormat(document.filename.clone()));
        }

        Ok(decode_utf8_dropping_invalid(data))
    }
}
