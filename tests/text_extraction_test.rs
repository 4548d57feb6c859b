use qonun::application::ports::{FileLoader, FileLoaderError};
use qonun::domain::{Document, DocumentFormat};
use qonun::infrastructure::text_processing::{
    CompositeFileLoader, DocxAdapter, PdfAdapter, PlainTextAdapter,
};

fn document(filename: &str, size: usize) -> Document {
    Document::new(filename.to_string(), size as u64)
}

#[test]
fn given_known_suffixes_when_detecting_format_then_each_maps_to_its_adapter() {
    assert_eq!(
        DocumentFormat::from_filename("contract.txt"),
        Some(DocumentFormat::PlainText)
    );
    assert_eq!(
        DocumentFormat::from_filename("contract.docx"),
        Some(DocumentFormat::Docx)
    );
    assert_eq!(
        DocumentFormat::from_filename("contract.pdf"),
        Some(DocumentFormat::Pdf)
    );
}

#[test]
fn given_unknown_or_uppercase_suffix_when_detecting_format_then_none() {
    assert_eq!(DocumentFormat::from_filename("contract.exe"), None);
    assert_eq!(DocumentFormat::from_filename("contract"), None);
    // Suffix matching is case-sensitive by contract.
    assert_eq!(DocumentFormat::from_filename("CONTRACT.TXT"), None);
}

#[tokio::test]
async fn given_unsupported_suffix_when_extracting_then_returns_unsupported_format() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = b"whatever";

    let result = loader
        .extract_text(data, &document("report.xlsx", data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn given_valid_utf8_txt_when_extracting_then_returns_text() {
    let adapter = PlainTextAdapter;
    let data = "Lease agreement.\nArticle 1.".as_bytes();

    let result = adapter
        .extract_text(data, &document("lease.txt", data.len()))
        .await;

    assert_eq!(result.unwrap(), "Lease agreement.\nArticle 1.");
}

#[tokio::test]
async fn given_invalid_utf8_txt_when_extracting_then_invalid_sequences_are_dropped() {
    let adapter = PlainTextAdapter;
    let data: &[u8] = b"Hello \xFF\xFEworld";

    let result = adapter
        .extract_text(data, &document("broken.txt", data.len()))
        .await;

    assert_eq!(result.unwrap(), "Hello world");
}

#[tokio::test]
async fn given_txt_containing_replacement_character_when_extracting_then_it_is_preserved() {
    let adapter = PlainTextAdapter;
    // A genuine U+FFFD in the source text is valid UTF-8 and must survive.
    let data = "clause a\u{FFFD}b".as_bytes();

    let result = adapter
        .extract_text(data, &document("odd.txt", data.len()))
        .await;

    assert_eq!(result.unwrap(), "clause a\u{FFFD}b");
}

#[tokio::test]
async fn given_replacement_character_next_to_invalid_bytes_when_extracting_then_only_invalid_drop()
{
    let adapter = PlainTextAdapter;
    let mut data = Vec::new();
    data.extend_from_slice("a\u{FFFD}".as_bytes());
    data.extend_from_slice(&[0xFF, 0xFE]);
    data.extend_from_slice("b".as_bytes());

    let result = adapter
        .extract_text(&data, &document("odd.txt", data.len()))
        .await;

    assert_eq!(result.unwrap(), "a\u{FFFD}b");
}

#[tokio::test]
async fn given_txt_ending_in_truncated_sequence_when_extracting_then_prefix_is_kept() {
    let adapter = PlainTextAdapter;
    // 0xE2 0x82 is the start of a three-byte sequence cut short.
    let data: &[u8] = b"total: 100\xE2\x82";

    let result = adapter
        .extract_text(data, &document("cut.txt", data.len()))
        .await;

    assert_eq!(result.unwrap(), "total: 100");
}

#[tokio::test]
async fn given_only_invalid_bytes_when_extracting_txt_then_returns_empty_string() {
    let adapter = PlainTextAdapter;
    let data: &[u8] = &[0xFF, 0xFE, 0xFD];

    let result = adapter
        .extract_text(data, &document("broken.txt", data.len()))
        .await;

    assert_eq!(result.unwrap(), "");
}

#[tokio::test]
async fn given_mismatched_filename_when_extracting_txt_then_returns_unsupported_format() {
    let adapter = PlainTextAdapter;
    let data = b"plain bytes";

    let result = adapter
        .extract_text(data, &document("lease.pdf", data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn given_corrupt_docx_payload_when_extracting_then_returns_extraction_failed() {
    let adapter = DocxAdapter::new();
    let data = b"this is not a zip archive";

    let result = adapter
        .extract_text(data, &document("corrupt.docx", data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_corrupt_pdf_payload_when_extracting_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let data = b"%PDF-not-really";

    let result = adapter
        .extract_text(data, &document("corrupt.pdf", data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_docx_with_paragraphs_when_extracting_then_paragraphs_join_with_newlines() {
    let adapter = DocxAdapter::new();
    let data = include_bytes!("fixtures/lease.docx");

    let result = adapter
        .extract_text(data, &document("lease.docx", data.len()))
        .await;

    assert_eq!(
        result.unwrap(),
        "The lessee shall pay rent monthly.\nThe lessor shall maintain the premises."
    );
}

#[tokio::test]
async fn given_pdf_with_pages_when_extracting_then_page_texts_join_in_order() {
    let adapter = PdfAdapter::new();
    let data = include_bytes!("fixtures/lease.pdf");

    let result = adapter
        .extract_text(data, &document("lease.pdf", data.len()))
        .await;

    let text = result.unwrap();
    let first = text
        .find("The lessee shall pay rent monthly.")
        .expect("page one text missing");
    let second = text
        .find("The lessor shall maintain the premises.")
        .expect("page two text missing");
    assert!(first < second);
}

#[tokio::test]
async fn given_txt_upload_when_dispatching_through_composite_then_plain_text_adapter_runs() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = "Dispatch check.".as_bytes();

    let result = loader
        .extract_text(data, &document("note.txt", data.len()))
        .await;

    assert_eq!(result.unwrap(), "Dispatch check.");
}
