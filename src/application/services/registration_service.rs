use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::NewUser;

/// Minimal user registration: uniqueness check, Argon2 hash, insert.
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
}

pub struct RegistrationRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl RegistrationService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegistrationRequest) -> Result<(), RegistrationError> {
        if self
            .users
            .exists_by_email_or_phone(&request.email, &request.phone)
            .await?
        {
            tracing::info!("Registration rejected: duplicate email or phone");
            return Err(RegistrationError::DuplicateUser);
        }

        // Argon2 is deliberately slow; keep it off the async workers.
        let password = request.password;
        let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| RegistrationError::Hashing(e.to_string()))??;

        let user = NewUser {
            full_name: request.full_name,
            phone: request.phone,
            email: request.email,
            hashed_password,
        };

        match self.users.insert(&user).await {
            Ok(()) => {
                tracing::info!("User registered");
                Ok(())
            }
            // A row created between the pre-check and the insert trips the
            // unique constraint instead.
            Err(RepositoryError::ConstraintViolation(_)) => Err(RegistrationError::DuplicateUser),
            Err(e) => Err(RegistrationError::Repository(e)),
        }
    }
}

fn hash_password(password: &str) -> Result<String, RegistrationError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| RegistrationError::Hashing(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("user with this email or phone number already exists")]
    DuplicateUser,
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("{0}")]
    Repository(#[from] RepositoryError),
}
