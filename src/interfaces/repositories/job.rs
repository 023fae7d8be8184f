use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::job::{Job, JobInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxJobRepo,
};

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create_job(&self, job: &JobInsert) -> Result<Job, AppError>;
    async fn get_job(&self, id: &Uuid) -> Result<Option<Job>, AppError>;
    async fn list_active(&self) -> Result<Vec<Job>, AppError>;
    async fn increment_views(&self, id: &Uuid) -> Result<(), AppError>;
    async fn increment_applications(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxJobRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxJobRepo { pool }
    }
}

const JOB_COLUMNS: &str = "id, employer_profile_id, title, description, country, \
     min_salary, max_salary, hide_salary, min_experience, max_experience, openings, \
     gender, status, expires_at, views_count, applications_count, created_at, updated_at";

#[async_trait]
impl JobRepository for SqlxJobRepo {
    async fn create_job(&self, job: &JobInsert) -> Result<Job, AppError> {
        sqlx::query_as::<_, Job>(&format!(
            r#"INSERT INTO jobs (
                employer_profile_id,
                title,
                description,
                country,
                min_salary,
                max_salary,
                hide_salary,
                min_experience,
                max_experience,
                openings,
                gender,
                status,
                expires_at,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job.employer_profile_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.country)
        .bind(job.min_salary)
        .bind(job.max_salary)
        .bind(job.hide_salary)
        .bind(job.min_experience)
        .bind(job.max_experience)
        .bind(job.openings)
        .bind(&job.gender)
        .bind(&job.status)
        .bind(job.expires_at)
        .bind(job.created_at)
        .bind(job.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_job(&self, id: &Uuid) -> Result<Option<Job>, AppError> {
        sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_active(&self) -> Result<Vec<Job>, AppError> {
        sqlx::query_as::<_, Job>(&format!(
            r#"SELECT {JOB_COLUMNS} FROM jobs
            WHERE status = 'active' AND (expires_at IS NULL OR expires_at > NOW())
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn increment_views(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE jobs SET views_count = views_count + 1, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn increment_applications(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE jobs SET applications_count = applications_count + 1, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(AppError::from)
    }
}
