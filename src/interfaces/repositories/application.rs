use async_trait::async_trait;
use std::borrow::Cow;

use crate::{
    entities::application::{ApplicationInsert, JobApplication},
    errors::AppError,
    repositories::sqlx_repo::SqlxApplicationRepo,
};

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn create(&self, application: &ApplicationInsert) -> Result<JobApplication, AppError>;
}

impl SqlxApplicationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxApplicationRepo { pool }
    }
}

#[async_trait]
impl ApplicationRepository for SqlxApplicationRepo {
    async fn create(&self, application: &ApplicationInsert) -> Result<JobApplication, AppError> {
        sqlx::query_as::<_, JobApplication>(
            r#"INSERT INTO job_applications (
                job_id,
                job_seeker_profile_id,
                status,
                cover_letter,
                applied_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, job_id, job_seeker_profile_id, status, cover_letter, applied_at, updated_at
            "#,
        )
        .bind(application.job_id)
        .bind(application.job_seeker_profile_id)
        .bind(&application.status)
        .bind(&application.cover_letter)
        .bind(application.applied_at)
        .bind(application.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("You have already applied to this job".to_string())
            }
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23503")) => {
                AppError::NotFound("Job not found".to_string())
            }
            _ => AppError::from(e),
        })
    }
}
