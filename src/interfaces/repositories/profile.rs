use async_trait::async_trait;
use uuid::Uuid;
use std::borrow::Cow;

use crate::{
    entities::profile::{Profile, ProfileInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create_profile(&self, profile: &ProfileInsert) -> Result<Uuid, AppError>;
    async fn upsert_profile(&self, profile: &ProfileInsert) -> Result<Profile, AppError>;
    async fn get_by_identity(&self, identity_id: &Uuid) -> Result<Option<Profile>, AppError>;
    async fn delete_profile(&self, id: Uuid) -> Result<(), AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

const PROFILE_COLUMNS: &str =
    "id, identity_id, user_type, email, phone, location, created_at, updated_at";

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn create_profile(&self, profile: &ProfileInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO profiles (
                identity_id,
                user_type,
                email,
                phone,
                location,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id
            "#,
        )
        .bind(profile.identity_id)
        .bind(profile.user_type)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.location)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("A profile already exists for this account".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(id)
    }

    async fn upsert_profile(&self, profile: &ProfileInsert) -> Result<Profile, AppError> {
        // Keyed on identity_id; the role tag is written on first insert
        // and intentionally never updated afterwards.
        sqlx::query_as::<_, Profile>(&format!(
            r#"INSERT INTO profiles (
                identity_id,
                user_type,
                email,
                phone,
                location,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (identity_id) DO UPDATE
            SET email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                updated_at = EXCLUDED.updated_at
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.identity_id)
        .bind(profile.user_type)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.location)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_by_identity(&self, identity_id: &Uuid) -> Result<Option<Profile>, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE identity_id = $1"
        ))
        .bind(identity_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        Ok(())
    }
}
