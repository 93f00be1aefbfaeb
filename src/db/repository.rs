//! User directory repository backed by SQLite.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::auth::password_digest;
use crate::db::{NewUser, User};
use crate::{DepotError, Result};

/// Repository for user directory operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new account.
    ///
    /// The password is digested before storage; the plaintext is never
    /// persisted. Fails with `Validation` when either field is empty and
    /// with `Conflict` when the email is already registered.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        if email.is_empty() {
            return Err(DepotError::Validation("Missing email".to_string()));
        }
        if password.is_empty() {
            return Err(DepotError::Validation("Missing password".to_string()));
        }

        if self.get_by_email(email).await?.is_some() {
            return Err(DepotError::Conflict("Already exist".to_string()));
        }

        let new_user = NewUser::new(email, password_digest(password));

        // The UNIQUE constraint on email backstops the check above when two
        // registrations race.
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(&new_user.email)
            .bind(&new_user.password)
            .execute(&self.pool)
            .await;

        let insert = match result {
            Ok(insert) => insert,
            Err(e) if e.to_string().contains("UNIQUE") => {
                return Err(DepotError::Conflict("Already exist".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let id = insert.last_insert_rowid();
        info!("Registered user {} ({})", id, email);

        let user = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DepotError::Database("inserted user vanished".to_string()))?;

        Ok(user)
    }

    /// Look up a user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Look up a user by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verify an email/password pair.
    ///
    /// Returns `Unauthenticated` on an unknown email or a digest mismatch;
    /// the two cases are deliberately indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .get_by_email(email)
            .await?
            .ok_or(DepotError::Unauthenticated)?;

        if user.password != password_digest(password) {
            debug!("Password mismatch for {}", email);
            return Err(DepotError::Unauthenticated);
        }

        Ok(user)
    }
}
