use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// An uploaded document awaiting text extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Dispatch is strictly by filename suffix; anything else is unsupported.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".txt") {
            Some(Self::PlainText)
        } else if filename.ends_with(".docx") {
            Some(Self::Docx)
        } else if filename.ends_with(".pdf") {
            Some(Self::Pdf)
        } else {
            None
        }
    }
}

impl Document {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            size_bytes,
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_filename(&self.filename)
    }
}
