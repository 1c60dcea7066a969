//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;

/// Unique constraint on `users.email` (see the users migration)
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn find_one_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                username,
                password_hash,
                email,
                created_at,
                updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let result = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                username,
                password_hash,
                email,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                username,
                password_hash,
                email,
                created_at,
                updated_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.email)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.into_user()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(duplicate_user_error(&user, db_err.constraint()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Which unique column was hit decides the message
fn duplicate_user_error(user: &User, constraint: Option<&str>) -> AppError {
    if constraint == Some(EMAIL_UNIQUE_CONSTRAINT) {
        AppError::database(format!(
            "user with email {} is already registered",
            user.email
        ))
    } else {
        AppError::database(format!(
            "user with username {} is already registered",
            user.username
        ))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    password_hash: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            username: self.username,
            password: self.password_hash,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
