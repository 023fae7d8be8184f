use chrono::Utc;
use mockall::mock;
use mockall::predicate::*;
use uuid::Uuid;

use pravah_backend::entities::employer::{EmployerDetails, EmployerInsert, EmployerProfile};
use pravah_backend::entities::identity::Identity;
use pravah_backend::entities::job_seeker::{
    CandidateSummary, ExperienceLevel, JobSeekerInsert, JobSeekerProfile, JobSeekerProfileForm,
};
use pravah_backend::entities::profile::{
    Profile, ProfileInsert, RegistrationRequest, RoleData, UserType,
};
use pravah_backend::errors::{AppError, ProvisioningError};
use pravah_backend::repositories::employer::EmployerRepository;
use pravah_backend::repositories::job_seeker::JobSeekerRepository;
use pravah_backend::repositories::profile::ProfileRepository;
use pravah_backend::use_cases::provisioning::ProvisioningWorkflow;

mock! {
    pub Profiles {}

    #[async_trait::async_trait]
    impl ProfileRepository for Profiles {
        async fn create_profile(&self, profile: &ProfileInsert) -> Result<Uuid, AppError>;
        async fn upsert_profile(&self, profile: &ProfileInsert) -> Result<Profile, AppError>;
        async fn get_by_identity(&self, identity_id: &Uuid) -> Result<Option<Profile>, AppError>;
        async fn delete_profile(&self, id: Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub Seekers {}

    #[async_trait::async_trait]
    impl JobSeekerRepository for Seekers {
        async fn create(&self, seeker: &JobSeekerInsert) -> Result<Uuid, AppError>;
        async fn upsert(&self, seeker: &JobSeekerInsert) -> Result<JobSeekerProfile, AppError>;
        async fn get_by_profile(&self, profile_id: &Uuid) -> Result<Option<JobSeekerProfile>, AppError>;
        async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, AppError>;
    }
}

mock! {
    pub Employers {}

    #[async_trait::async_trait]
    impl EmployerRepository for Employers {
        async fn create(&self, employer: &EmployerInsert) -> Result<Uuid, AppError>;
        async fn upsert(&self, employer: &EmployerInsert) -> Result<EmployerProfile, AppError>;
        async fn get_by_profile(&self, profile_id: &Uuid) -> Result<Option<EmployerProfile>, AppError>;
    }
}

fn identity(email: &str) -> Identity {
    let now = Utc::now();
    Identity {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: "$argon2id$not-a-real-hash".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn job_seeker_registration() -> RegistrationRequest {
    RegistrationRequest {
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        phone: None,
        location: None,
        role: RoleData::Jobseeker(pravah_backend::entities::job_seeker::JobSeekerDetails {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            designation: None,
            experience_level: Some(ExperienceLevel::Junior),
            education: None,
            skills: vec![],
            resume_url: None,
        }),
    }
}

fn employer_registration() -> RegistrationRequest {
    RegistrationRequest {
        email: "hr@acme.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        phone: Some("+91 98765 43210".to_string()),
        location: Some("Pune".to_string()),
        role: RoleData::Employer(EmployerDetails {
            company_name: "Acme".to_string(),
            contact_person: "R. Coyote".to_string(),
            designation: Some("HR Manager".to_string()),
            company_size: None,
            company_description: None,
            website: None,
        }),
    }
}

fn sample_profile(identity_id: Uuid, user_type: UserType) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        identity_id,
        user_type,
        email: "a@b.com".to_string(),
        phone: None,
        location: None,
        created_at: now,
        updated_at: now,
    }
}

fn sample_seeker_row(profile_id: Uuid) -> JobSeekerProfile {
    let now = Utc::now();
    JobSeekerProfile {
        id: Uuid::new_v4(),
        profile_id,
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        designation: None,
        experience_level: Some(ExperienceLevel::Junior),
        education: None,
        skills: Some(vec![]),
        resume_url: None,
        created_at: now,
        updated_at: now,
    }
}

#[actix_rt::test]
async fn job_seeker_provisioning_links_role_row_to_profile() {
    let registrant = identity("a@b.com");
    let identity_id = registrant.id;
    let profile_id = Uuid::new_v4();
    let role_row_id = Uuid::new_v4();

    let mut profiles = MockProfiles::new();
    profiles
        .expect_create_profile()
        .withf(move |p: &ProfileInsert| {
            p.identity_id == identity_id
                && p.user_type == UserType::Jobseeker
                && p.email == "a@b.com"
        })
        .times(1)
        .returning(move |_| Ok(profile_id));
    profiles.expect_delete_profile().times(0);

    let mut seekers = MockSeekers::new();
    seekers
        .expect_create()
        .withf(move |s: &JobSeekerInsert| {
            s.profile_id == profile_id
                && s.first_name == "A"
                && s.last_name == "B"
                && s.experience_level == Some(ExperienceLevel::Junior)
        })
        .times(1)
        .returning(move |_| Ok(role_row_id));

    let mut employers = MockEmployers::new();
    employers.expect_create().times(0);

    let workflow = ProvisioningWorkflow::new(profiles, seekers, employers);
    let account = workflow
        .provision(&registrant, &job_seeker_registration())
        .await
        .expect("provisioning should succeed");

    assert_eq!(account.identity_id, identity_id);
    assert_eq!(account.profile_id, profile_id);
    assert_eq!(account.role_profile_id, role_row_id);
    assert_eq!(account.user_type, UserType::Jobseeker);
}

#[actix_rt::test]
async fn employer_provisioning_links_role_row_to_profile() {
    let registrant = identity("hr@acme.com");
    let profile_id = Uuid::new_v4();
    let role_row_id = Uuid::new_v4();

    let mut profiles = MockProfiles::new();
    profiles
        .expect_create_profile()
        .withf(|p: &ProfileInsert| p.user_type == UserType::Employer && p.email == "hr@acme.com")
        .times(1)
        .returning(move |_| Ok(profile_id));
    profiles.expect_delete_profile().times(0);

    let mut employers = MockEmployers::new();
    employers
        .expect_create()
        .withf(move |e: &EmployerInsert| {
            e.profile_id == profile_id && e.company_name == "Acme" && e.contact_person == "R. Coyote"
        })
        .times(1)
        .returning(move |_| Ok(role_row_id));

    let mut seekers = MockSeekers::new();
    seekers.expect_create().times(0);

    let workflow = ProvisioningWorkflow::new(profiles, seekers, employers);
    let account = workflow
        .provision(&registrant, &employer_registration())
        .await
        .expect("provisioning should succeed");

    assert_eq!(account.user_type, UserType::Employer);
    assert_eq!(account.role_profile_id, role_row_id);
}

#[actix_rt::test]
async fn failed_profile_insert_never_attempts_role_row() {
    let registrant = identity("a@b.com");

    let mut profiles = MockProfiles::new();
    profiles
        .expect_create_profile()
        .times(1)
        .returning(|_| Err(AppError::Conflict("A profile already exists for this account".into())));
    profiles.expect_delete_profile().times(0);

    let mut seekers = MockSeekers::new();
    seekers.expect_create().times(0);

    let mut employers = MockEmployers::new();
    employers.expect_create().times(0);

    let workflow = ProvisioningWorkflow::new(profiles, seekers, employers);
    let result = workflow.provision(&registrant, &job_seeker_registration()).await;

    assert!(matches!(result, Err(ProvisioningError::Profile(_))));
}

#[actix_rt::test]
async fn failed_role_row_compensates_base_profile() {
    let registrant = identity("a@b.com");
    let profile_id = Uuid::new_v4();

    let mut profiles = MockProfiles::new();
    profiles
        .expect_create_profile()
        .times(1)
        .returning(move |_| Ok(profile_id));
    profiles
        .expect_delete_profile()
        .with(eq(profile_id))
        .times(1)
        .returning(|_| Ok(()));

    let mut seekers = MockSeekers::new();
    seekers
        .expect_create()
        .times(1)
        .returning(|_| Err(AppError::InternalError("Database error: connection reset".into())));

    let mut employers = MockEmployers::new();
    employers.expect_create().times(0);

    let workflow = ProvisioningWorkflow::new(profiles, seekers, employers);
    let result = workflow.provision(&registrant, &job_seeker_registration()).await;

    assert!(matches!(result, Err(ProvisioningError::RoleProfile(_))));
}

#[actix_rt::test]
async fn profile_edit_upserts_instead_of_creating() {
    let identity_id = Uuid::new_v4();
    let profile = sample_profile(identity_id, UserType::Jobseeker);
    let profile_id = profile.id;

    let mut profiles = MockProfiles::new();
    profiles.expect_create_profile().times(0);
    profiles
        .expect_upsert_profile()
        .withf(move |p: &ProfileInsert| p.identity_id == identity_id)
        .times(1)
        .returning(move |_| Ok(sample_profile(identity_id, UserType::Jobseeker)));

    let mut seekers = MockSeekers::new();
    seekers.expect_create().times(0);
    seekers
        .expect_upsert()
        .withf(|s: &JobSeekerInsert| s.first_name == "A")
        .times(1)
        .returning(move |_| Ok(sample_seeker_row(profile_id)));

    let mut employers = MockEmployers::new();
    employers.expect_create().times(0);

    let workflow = ProvisioningWorkflow::new(profiles, seekers, employers);
    let form = JobSeekerProfileForm {
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        designation: Some("Backend Engineer".to_string()),
        experience_level: Some(ExperienceLevel::Junior),
        education: None,
        skills: vec!["rust".to_string()],
        resume_url: None,
        phone: None,
        location: Some("Pune".to_string()),
    };

    let saved = workflow
        .save_job_seeker_profile(identity_id, "a@b.com", form)
        .await
        .expect("edit should upsert");

    assert_eq!(saved.first_name, "A");
}

#[actix_rt::test]
async fn invalid_edit_form_touches_no_repository() {
    let mut profiles = MockProfiles::new();
    profiles.expect_upsert_profile().times(0);

    let mut seekers = MockSeekers::new();
    seekers.expect_upsert().times(0);

    let employers = MockEmployers::new();

    let workflow = ProvisioningWorkflow::new(profiles, seekers, employers);
    let form = JobSeekerProfileForm {
        first_name: "".to_string(),
        last_name: "B".to_string(),
        designation: None,
        experience_level: None,
        education: None,
        skills: vec![],
        resume_url: None,
        phone: None,
        location: None,
    };

    let result = workflow
        .save_job_seeker_profile(Uuid::new_v4(), "a@b.com", form)
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
