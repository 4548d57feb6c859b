use async_trait::async_trait;

use crate::domain::NewUser;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns true when a user with the given email or phone already exists.
    async fn exists_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<bool, RepositoryError>;

    async fn insert(&self, user: &NewUser) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
