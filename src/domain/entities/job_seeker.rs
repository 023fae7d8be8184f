use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::profile::{ProfileInsert, UserType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "experience_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Fresher,
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JobSeekerProfile {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub designation: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub education: Option<String>,
    pub skills: Option<Vec<String>>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct JobSeekerInsert {
    pub profile_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub designation: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role payload collected on the registration form.
#[derive(Debug, Deserialize, Validate)]
pub struct JobSeekerDetails {
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    pub designation: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub education: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[validate(url(message = "Invalid resume URL"))]
    pub resume_url: Option<String>,
}

impl JobSeekerDetails {
    pub fn prepare_for_insert(&self, profile_id: Uuid) -> JobSeekerInsert {
        let now = Utc::now();
        JobSeekerInsert {
            profile_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            designation: self.designation.clone(),
            experience_level: self.experience_level,
            education: self.education.clone(),
            skills: self.skills.clone(),
            resume_url: self.resume_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Profile-edit form. Submitting again for the same identity updates the
/// existing rows via unique-key upserts.
#[derive(Debug, Deserialize, Validate)]
pub struct JobSeekerProfileForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    pub designation: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub education: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[validate(url(message = "Invalid resume URL"))]
    pub resume_url: Option<String>,

    pub phone: Option<String>,
    pub location: Option<String>,
}

impl JobSeekerProfileForm {
    pub fn profile_upsert(&self, identity_id: Uuid, email: &str) -> ProfileInsert {
        let now = Utc::now();
        ProfileInsert {
            identity_id,
            user_type: UserType::Jobseeker,
            email: email.to_string(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn prepare_for_upsert(&self, profile_id: Uuid) -> JobSeekerInsert {
        let now = Utc::now();
        JobSeekerInsert {
            profile_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            designation: self.designation.clone(),
            experience_level: self.experience_level,
            education: self.education.clone(),
            skills: self.skills.clone(),
            resume_url: self.resume_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Candidate listing row: seeker fields joined with base-profile contact
/// info, the shape the browse page renders.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CandidateSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub designation: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub education: Option<String>,
    pub skills: Option<Vec<String>>,
    pub resume_url: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
