use async_trait::async_trait;
use uuid::Uuid;
use std::borrow::Cow;

use crate::{
    entities::job_seeker::{CandidateSummary, JobSeekerInsert, JobSeekerProfile},
    errors::AppError,
    repositories::sqlx_repo::SqlxJobSeekerRepo,
};

#[async_trait]
pub trait JobSeekerRepository: Send + Sync {
    async fn create(&self, seeker: &JobSeekerInsert) -> Result<Uuid, AppError>;
    async fn upsert(&self, seeker: &JobSeekerInsert) -> Result<JobSeekerProfile, AppError>;
    async fn get_by_profile(&self, profile_id: &Uuid) -> Result<Option<JobSeekerProfile>, AppError>;
    async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, AppError>;
}

impl SqlxJobSeekerRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxJobSeekerRepo { pool }
    }
}

const SEEKER_COLUMNS: &str = "id, profile_id, first_name, last_name, designation, \
     experience_level, education, skills, resume_url, created_at, updated_at";

#[async_trait]
impl JobSeekerRepository for SqlxJobSeekerRepo {
    async fn create(&self, seeker: &JobSeekerInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO job_seeker_profiles (
                profile_id,
                first_name,
                last_name,
                designation,
                experience_level,
                education,
                skills,
                resume_url,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id
            "#,
        )
        .bind(seeker.profile_id)
        .bind(&seeker.first_name)
        .bind(&seeker.last_name)
        .bind(&seeker.designation)
        .bind(seeker.experience_level)
        .bind(&seeker.education)
        .bind(&seeker.skills)
        .bind(&seeker.resume_url)
        .bind(seeker.created_at)
        .bind(seeker.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("A job seeker profile already exists".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(id)
    }

    async fn upsert(&self, seeker: &JobSeekerInsert) -> Result<JobSeekerProfile, AppError> {
        sqlx::query_as::<_, JobSeekerProfile>(&format!(
            r#"INSERT INTO job_seeker_profiles (
                profile_id,
                first_name,
                last_name,
                designation,
                experience_level,
                education,
                skills,
                resume_url,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (profile_id) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                designation = EXCLUDED.designation,
                experience_level = EXCLUDED.experience_level,
                education = EXCLUDED.education,
                skills = EXCLUDED.skills,
                resume_url = EXCLUDED.resume_url,
                updated_at = EXCLUDED.updated_at
            RETURNING {SEEKER_COLUMNS}
            "#
        ))
        .bind(seeker.profile_id)
        .bind(&seeker.first_name)
        .bind(&seeker.last_name)
        .bind(&seeker.designation)
        .bind(seeker.experience_level)
        .bind(&seeker.education)
        .bind(&seeker.skills)
        .bind(&seeker.resume_url)
        .bind(seeker.created_at)
        .bind(seeker.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_by_profile(
        &self,
        profile_id: &Uuid,
    ) -> Result<Option<JobSeekerProfile>, AppError> {
        sqlx::query_as::<_, JobSeekerProfile>(&format!(
            "SELECT {SEEKER_COLUMNS} FROM job_seeker_profiles WHERE profile_id = $1"
        ))
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, AppError> {
        sqlx::query_as::<_, CandidateSummary>(
            r#"SELECT
                js.id,
                js.first_name,
                js.last_name,
                js.designation,
                js.experience_level,
                js.education,
                js.skills,
                js.resume_url,
                p.email,
                p.location,
                p.phone,
                js.created_at
            FROM job_seeker_profiles js
            JOIN profiles p ON p.id = js.profile_id
            ORDER BY js.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
