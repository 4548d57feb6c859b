mod file_loader;
mod llm_client;
mod user_repository;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use user_repository::{RepositoryError, UserRepository};
