mod analyze;
mod chat;
mod health;
mod register;

pub use analyze::analyze_document_handler;
pub use chat::chat_handler;
pub use health::health_handler;
pub use register::register_handler;

use serde::Serialize;

/// Error body shared by all API routes: `{"detail": <message>}`.
#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
