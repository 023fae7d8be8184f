use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const JOB_STATUS_ACTIVE: &str = "active";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub employer_profile_id: Uuid,
    pub title: String,
    pub description: String,
    pub country: Option<String>,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,
    pub hide_salary: bool,
    pub min_experience: Option<f64>,
    pub max_experience: Option<f64>,
    pub openings: Option<i32>,
    pub gender: Option<String>,
    pub status: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub views_count: i32,
    pub applications_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == JOB_STATUS_ACTIVE
            && self.expires_at.map(|t| t > Utc::now()).unwrap_or(true)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewJob {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub country: Option<String>,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,

    #[serde(default)]
    pub hide_salary: bool,

    pub min_experience: Option<f64>,
    pub max_experience: Option<f64>,
    pub openings: Option<i32>,
    pub gender: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewJob {
    pub fn prepare_for_insert(&self, employer_profile_id: Uuid) -> JobInsert {
        let now = Utc::now();
        JobInsert {
            employer_profile_id,
            title: self.title.clone(),
            description: self.description.clone(),
            country: self.country.clone(),
            min_salary: self.min_salary,
            max_salary: self.max_salary,
            hide_salary: self.hide_salary,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            openings: self.openings,
            gender: self.gender.clone(),
            status: JOB_STATUS_ACTIVE.to_string(),
            expires_at: self.expires_at,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobInsert {
    pub employer_profile_id: Uuid,
    pub title: String,
    pub description: String,
    pub country: Option<String>,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,
    pub hide_salary: bool,
    pub min_experience: Option<f64>,
    pub max_experience: Option<f64>,
    pub openings: Option<i32>,
    pub gender: Option<String>,
    pub status: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing shape returned to clients. Salary bounds are withheld when the
/// poster asked for them to stay hidden.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub country: Option<String>,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,
    pub hide_salary: bool,
    pub min_experience: Option<f64>,
    pub max_experience: Option<f64>,
    pub openings: Option<i32>,
    pub status: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub views_count: i32,
    pub applications_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        let (min_salary, max_salary) = if job.hide_salary {
            (None, None)
        } else {
            (job.min_salary, job.max_salary)
        };

        JobResponse {
            id: job.id,
            title: job.title,
            description: job.description,
            country: job.country,
            min_salary,
            max_salary,
            hide_salary: job.hide_salary,
            min_experience: job.min_experience,
            max_experience: job.max_experience,
            openings: job.openings,
            status: job.status,
            expires_at: job.expires_at,
            views_count: job.views_count,
            applications_count: job.applications_count,
            created_at: job.created_at,
        }
    }
}
