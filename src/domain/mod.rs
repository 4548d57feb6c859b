mod analysis;
mod document;
mod user;

pub use analysis::AnalysisResult;
pub use document::{Document, DocumentFormat, DocumentId};
pub use user::NewUser;
