use async_trait::async_trait;
use uuid::Uuid;
use std::borrow::Cow;

use crate::{
    entities::employer::{EmployerInsert, EmployerProfile},
    errors::AppError,
    repositories::sqlx_repo::SqlxEmployerRepo,
};

#[async_trait]
pub trait EmployerRepository: Send + Sync {
    async fn create(&self, employer: &EmployerInsert) -> Result<Uuid, AppError>;
    async fn upsert(&self, employer: &EmployerInsert) -> Result<EmployerProfile, AppError>;
    async fn get_by_profile(&self, profile_id: &Uuid) -> Result<Option<EmployerProfile>, AppError>;
}

impl SqlxEmployerRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEmployerRepo { pool }
    }
}

const EMPLOYER_COLUMNS: &str = "id, profile_id, company_name, contact_person, designation, \
     company_size, company_description, website, created_at, updated_at";

#[async_trait]
impl EmployerRepository for SqlxEmployerRepo {
    async fn create(&self, employer: &EmployerInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO employer_profiles (
                profile_id,
                company_name,
                contact_person,
                designation,
                company_size,
                company_description,
                website,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id
            "#,
        )
        .bind(employer.profile_id)
        .bind(&employer.company_name)
        .bind(&employer.contact_person)
        .bind(&employer.designation)
        .bind(employer.company_size)
        .bind(&employer.company_description)
        .bind(&employer.website)
        .bind(employer.created_at)
        .bind(employer.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("An employer profile already exists".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(id)
    }

    async fn upsert(&self, employer: &EmployerInsert) -> Result<EmployerProfile, AppError> {
        sqlx::query_as::<_, EmployerProfile>(&format!(
            r#"INSERT INTO employer_profiles (
                profile_id,
                company_name,
                contact_person,
                designation,
                company_size,
                company_description,
                website,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (profile_id) DO UPDATE
            SET company_name = EXCLUDED.company_name,
                contact_person = EXCLUDED.contact_person,
                designation = EXCLUDED.designation,
                company_size = EXCLUDED.company_size,
                company_description = EXCLUDED.company_description,
                website = EXCLUDED.website,
                updated_at = EXCLUDED.updated_at
            RETURNING {EMPLOYER_COLUMNS}
            "#
        ))
        .bind(employer.profile_id)
        .bind(&employer.company_name)
        .bind(&employer.contact_person)
        .bind(&employer.designation)
        .bind(employer.company_size)
        .bind(&employer.company_description)
        .bind(&employer.website)
        .bind(employer.created_at)
        .bind(employer.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_by_profile(
        &self,
        profile_id: &Uuid,
    ) -> Result<Option<EmployerProfile>, AppError> {
        sqlx::query_as::<_, EmployerProfile>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employer_profiles WHERE profile_id = $1"
        ))
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
