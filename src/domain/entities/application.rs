use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const APPLICATION_STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_seeker_profile_id: Uuid,
    pub status: String,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewApplication {
    #[validate(length(max = 4000, message = "Cover letter is too long"))]
    pub cover_letter: Option<String>,
}

impl NewApplication {
    pub fn prepare_for_insert(&self, job_id: Uuid, job_seeker_profile_id: Uuid) -> ApplicationInsert {
        let now = Utc::now();
        ApplicationInsert {
            job_id,
            job_seeker_profile_id,
            status: APPLICATION_STATUS_PENDING.to_string(),
            cover_letter: self.cover_letter.clone(),
            applied_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationInsert {
    pub job_id: Uuid,
    pub job_seeker_profile_id: Uuid,
    pub status: String,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
