//! Registration and login backed by the user repository.

use crate::domain::users::{LoginRequest, RegisterRequest, UserRecord};
use crate::error::StoreError;
use crate::ports::repository::UserRepository;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

pub const MIN_SECRET_LEN: usize = 32;
const TOKEN_LIFETIME_HOURS: i64 = 24;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Server misconfiguration: {0}")]
    Misconfigured(String),

    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Could not generate token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

pub struct AccountService {
    users: Arc<dyn UserRepository>,
    /// JWT signing secret; login is refused while unset or too short
    secret: Option<String>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>, secret: Option<String>) -> Self {
        Self { users, secret }
    }

    fn signing_secret(&self) -> Result<&[u8], AccountError> {
        match &self.secret {
            Some(secret) if secret.len() >= MIN_SECRET_LEN => Ok(secret.as_bytes()),
            _ => Err(AccountError::Misconfigured(format!(
                "TOKEN is missing or too short (must be >= {MIN_SECRET_LEN} characters)"
            ))),
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser, AccountError> {
        request.validate().map_err(AccountError::Validation)?;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(request.password.as_bytes(), &salt)
            .map_err(|e| AccountError::Hash(e.to_string()))?
            .to_string();

        let user = UserRecord {
            id: Uuid::new_v4().to_string(),
            username: request.username,
            email: request.email.trim().to_string(),
            password_hash,
            first_name: request.first_name,
            last_name: request.last_name,
            created_at: Utc::now(),
        };

        if !self.users.create_user(&user).await? {
            return Err(AccountError::AlreadyRegistered);
        }

        info!(user_id = %user.id, "user registered");
        Ok(RegisteredUser {
            id: user.id,
            message: "User sign up successfully",
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AccountError> {
        let user = self
            .users
            .find_user(&request.email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&user.password_hash).map_err(|e| {
            warn!(user_id = %user.id, error = %e, "stored password hash is unreadable");
            AccountError::InvalidCredentials
        })?;
        Argon2::default()
            .verify_password(request.password.as_bytes(), &parsed)
            .map_err(|_| AccountError::InvalidCredentials)?;

        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.signing_secret()?),
        )?;

        Ok(LoginResponse {
            token,
            user: LoginUser { id: user.id },
        })
    }
}
