use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Dispatches to the format-specific adapter by filename suffix.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// The three adapters the analysis endpoint supports.
    pub fn with_default_adapters() -> Self {
        Self::new(vec![
            (DocumentFormat::PlainText, Arc::new(PlainTextAdapter) as _),
            (DocumentFormat::Docx, Arc::new(DocxAdapter) as _),
            (DocumentFormat::Pdf, Arc::new(PdfAdapter) as _),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let format = document
            .format()
            .ok_or_else(|| FileLoaderError::UnsupportedFormat(document.filename.clone()))?;

        let adapter = self
            .adapters
            .get(&format)
            .ok_or_else(|| FileLoaderError::UnsupportedFormat(document.filename.clone()))?;

        adapter.extract_text(data, document).await
    }
}
