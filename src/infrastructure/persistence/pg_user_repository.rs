use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::NewUser;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the users table and its unique indexes if they do not exist.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                full_name TEXT NOT NULL,
                phone TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                hashed_password TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, email, phone))]
    async fn exists_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<bool, RepositoryError> {
        let row: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = $1 OR phone = $2 LIMIT 1")
                .bind(email)
                .bind(phone)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(row.is_some())
    }

    #[instrument(skip(self, user))]
    async fn insert(&self, user: &NewUser) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, full_name, phone, email, hashed_password)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.full_name)
        .bind(&user.phone)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::ConstraintViolation(db.message().to_string())
            }
            _ => RepositoryError::QueryFailed(e.to_string()),
        })?;

        Ok(())
    }
}
