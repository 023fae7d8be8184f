use async_trait::async_trait;
use uuid::Uuid;
use std::borrow::Cow;

use crate::{
    entities::identity::{Identity, IdentityInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxIdentityRepo,
};

#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn create_identity(&self, identity: &IdentityInsert) -> Result<Identity, AppError>;
    async fn get_identity_by_email(&self, email: &str) -> Result<Option<Identity>, AppError>;
    async fn get_identity_by_id(&self, id: &Uuid) -> Result<Option<Identity>, AppError>;
}

impl SqlxIdentityRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxIdentityRepo { pool }
    }
}

#[async_trait]
impl IdentityRepository for SqlxIdentityRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn create_identity(&self, identity: &IdentityInsert) -> Result<Identity, AppError> {
        sqlx::query_as::<_, Identity>(
            r#"INSERT INTO identities (email, password_hash, created_at, updated_at)
               VALUES ($1, $2, $3, $4)
               RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(identity.created_at)
        .bind(identity.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("An account with this email already exists".to_string())
            }
            _ => AppError::from(e),
        })
    }

    async fn get_identity_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        sqlx::query_as::<_, Identity>(
            "SELECT id, email, password_hash, created_at, updated_at FROM identities WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_identity_by_id(&self, id: &Uuid) -> Result<Option<Identity>, AppError> {
        sqlx::query_as::<_, Identity>(
            "SELECT id, email, password_hash, created_at, updated_at FROM identities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
