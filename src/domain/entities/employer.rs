use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::profile::{ProfileInsert, UserType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "company_size", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployerProfile {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub company_name: String,
    pub contact_person: String,
    pub designation: Option<String>,
    pub company_size: Option<CompanySize>,
    pub company_description: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct EmployerInsert {
    pub profile_id: Uuid,
    pub company_name: String,
    pub contact_person: String,
    pub designation: Option<String>,
    pub company_size: Option<CompanySize>,
    pub company_description: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role payload collected on the registration form.
#[derive(Debug, Deserialize, Validate)]
pub struct EmployerDetails {
    #[serde(default)]
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,

    pub designation: Option<String>,
    pub company_size: Option<CompanySize>,
    pub company_description: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,
}

impl EmployerDetails {
    pub fn prepare_for_insert(&self, profile_id: Uuid) -> EmployerInsert {
        let now = Utc::now();
        EmployerInsert {
            profile_id,
            company_name: self.company_name.clone(),
            contact_person: self.contact_person.clone(),
            designation: self.designation.clone(),
            company_size: self.company_size,
            company_description: self.company_description.clone(),
            website: self.website.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Profile-edit form, upserted by unique key like the job-seeker one.
#[derive(Debug, Deserialize, Validate)]
pub struct EmployerProfileForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,

    pub designation: Option<String>,
    pub company_size: Option<CompanySize>,
    pub company_description: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,

    pub phone: Option<String>,
    pub location: Option<String>,
}

impl EmployerProfileForm {
    pub fn profile_upsert(&self, identity_id: Uuid, email: &str) -> ProfileInsert {
        let now = Utc::now();
        ProfileInsert {
            identity_id,
            user_type: UserType::Employer,
            email: email.to_string(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn prepare_for_upsert(&self, profile_id: Uuid) -> EmployerInsert {
        let now = Utc::now();
        EmployerInsert {
            profile_id,
            company_name: self.company_name.clone(),
            contact_person: self.contact_person.clone(),
            designation: self.designation.clone(),
            company_size: self.company_size,
            company_description: self.company_description.clone(),
            website: self.website.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
