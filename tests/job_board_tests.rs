use chrono::{Duration, Utc};
use mockall::mock;
use mockall::predicate::*;
use uuid::Uuid;

use pravah_backend::entities::application::{ApplicationInsert, JobApplication, NewApplication};
use pravah_backend::entities::employer::{EmployerInsert, EmployerProfile};
use pravah_backend::entities::job::{Job, JobInsert, NewJob};
use pravah_backend::entities::job_seeker::{CandidateSummary, JobSeekerInsert, JobSeekerProfile};
use pravah_backend::entities::profile::{Profile, ProfileInsert, UserType};
use pravah_backend::errors::AppError;
use pravah_backend::repositories::application::ApplicationRepository;
use pravah_backend::repositories::employer::EmployerRepository;
use pravah_backend::repositories::job::JobRepository;
use pravah_backend::repositories::job_seeker::JobSeekerRepository;
use pravah_backend::repositories::profile::ProfileRepository;
use pravah_backend::use_cases::jobs::JobBoard;

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

mock! {
    pub Jobs {}

    #[async_trait::async_trait]
    impl JobRepository for Jobs {
        async fn create_job(&self, job: &JobInsert) -> Result<Job, AppError>;
        async fn get_job(&self, id: &Uuid) -> Result<Option<Job>, AppError>;
        async fn list_active(&self) -> Result<Vec<Job>, AppError>;
        async fn increment_views(&self, id: &Uuid) -> Result<(), AppError>;
        async fn increment_applications(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub Applications {}

    #[async_trait::async_trait]
    impl ApplicationRepository for Applications {
        async fn create(&self, application: &ApplicationInsert) -> Result<JobApplication, AppError>;
    }
}

fn profile(identity_id: Uuid, user_type: UserType) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        identity_id,
        user_type,
        email: "user@example.com".to_string(),
        phone: None,
        location: None,
        created_at: now,
        updated_at: now,
    }
}

fn employer_row(profile_id: Uuid) -> EmployerProfile {
    let now = Utc::now();
    EmployerProfile {
        id: Uuid::new_v4(),
        profile_id,
        company_name: "Acme".to_string(),
        contact_person: "R. Coyote".to_string(),
        designation: None,
        company_size: None,
        company_description: None,
        website: None,
        created_at: now,
        updated_at: now,
    }
}

fn seeker_row(profile_id: Uuid) -> JobSeekerProfile {
    let now = Utc::now();
    JobSeekerProfile {
        id: Uuid::new_v4(),
        profile_id,
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        designation: None,
        experience_level: None,
        education: None,
        skills: None,
        resume_url: None,
        created_at: now,
        updated_at: now,
    }
}

fn job_row(insert: &JobInsert) -> Job {
    Job {
        id: Uuid::new_v4(),
        employer_profile_id: insert.employer_profile_id,
        title: insert.title.clone(),
        description: insert.description.clone(),
        country: insert.country.clone(),
        min_salary: insert.min_salary,
        max_salary: insert.max_salary,
        hide_salary: insert.hide_salary,
        min_experience: insert.min_experience,
        max_experience: insert.max_experience,
        openings: insert.openings,
        gender: insert.gender.clone(),
        status: insert.status.clone(),
        expires_at: insert.expires_at,
        views_count: 0,
        applications_count: 0,
        created_at: insert.created_at,
        updated_at: insert.updated_at,
    }
}

fn active_job(job_id: Uuid) -> Job {
    let now = Utc::now();
    Job {
        id: job_id,
        employer_profile_id: Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        description: "Rust services".to_string(),
        country: Some("India".to_string()),
        min_salary: None,
        max_salary: None,
        hide_salary: false,
        min_experience: None,
        max_experience: None,
        openings: Some(2),
        gender: None,
        status: "active".to_string(),
        expires_at: Some(now + Duration::days(30)),
        views_count: 0,
        applications_count: 0,
        created_at: now,
        updated_at: now,
    }
}

fn new_job() -> NewJob {
    NewJob {
        title: "Backend Engineer".to_string(),
        description: "Rust services".to_string(),
        country: Some("India".to_string()),
        min_salary: Some(1_200_000),
        max_salary: Some(2_400_000),
        hide_salary: false,
        min_experience: Some(2.0),
        max_experience: Some(5.0),
        openings: Some(2),
        gender: None,
        expires_at: None,
    }
}

#[actix_rt::test]
async fn post_job_inserts_for_resolved_employer() {
    let identity_id = Uuid::new_v4();
    let caller = profile(identity_id, UserType::Employer);
    let employer = employer_row(caller.id);
    let employer_id = employer.id;
    let caller_clone = caller.clone();

    let mut profiles = MockProfiles::new();
    profiles
        .expect_get_by_identity()
        .with(eq(identity_id))
        .times(1)
        .returning(move |_| Ok(Some(caller_clone.clone())));

    let mut employers = MockEmployers::new();
    employers
        .expect_get_by_profile()
        .with(eq(caller.id))
        .times(1)
        .returning(move |_| Ok(Some(employer.clone())));

    let mut jobs = MockJobs::new();
    jobs.expect_create_job()
        .withf(move |j: &JobInsert| {
            j.employer_profile_id == employer_id && j.status == "active" && j.title == "Backend Engineer"
        })
        .times(1)
        .returning(|insert| Ok(job_row(insert)));

    let board = JobBoard::new(
        profiles,
        MockSeekers::new(),
        employers,
        jobs,
        MockApplications::new(),
    );

    let job = board.post_job(identity_id, new_job()).await.expect("post should succeed");
    assert_eq!(job.employer_profile_id, employer_id);
    assert_eq!(job.status, "active");
}

#[actix_rt::test]
async fn post_job_without_employer_profile_inserts_nothing() {
    let identity_id = Uuid::new_v4();
    let caller = profile(identity_id, UserType::Jobseeker);

    let mut profiles = MockProfiles::new();
    profiles
        .expect_get_by_identity()
        .times(1)
        .returning(move |_| Ok(Some(caller.clone())));

    let mut employers = MockEmployers::new();
    employers
        .expect_get_by_profile()
        .times(1)
        .returning(|_| Ok(None));

    let mut jobs = MockJobs::new();
    jobs.expect_create_job().times(0);

    let board = JobBoard::new(
        profiles,
        MockSeekers::new(),
        employers,
        jobs,
        MockApplications::new(),
    );

    let result = board.post_job(identity_id, new_job()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn inverted_salary_bounds_touch_no_repository() {
    let mut profiles = MockProfiles::new();
    profiles.expect_get_by_identity().times(0);

    let mut jobs = MockJobs::new();
    jobs.expect_create_job().times(0);

    let board = JobBoard::new(
        profiles,
        MockSeekers::new(),
        MockEmployers::new(),
        jobs,
        MockApplications::new(),
    );

    let mut request = new_job();
    request.min_salary = Some(2_400_000);
    request.max_salary = Some(1_200_000);

    let result = board.post_job(Uuid::new_v4(), request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn apply_creates_application_and_bumps_counter() {
    let identity_id = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let caller = profile(identity_id, UserType::Jobseeker);
    let seeker = seeker_row(caller.id);
    let seeker_id = seeker.id;
    let caller_id = caller.id;

    let mut jobs = MockJobs::new();
    jobs.expect_get_job()
        .with(eq(job_id))
        .times(1)
        .returning(move |id| Ok(Some(active_job(*id))));
    jobs.expect_increment_applications()
        .with(eq(job_id))
        .times(1)
        .returning(|_| Ok(()));

    let mut profiles = MockProfiles::new();
    profiles
        .expect_get_by_identity()
        .times(1)
        .returning(move |_| Ok(Some(caller.clone())));

    let mut seekers = MockSeekers::new();
    seekers
        .expect_get_by_profile()
        .with(eq(caller_id))
        .times(1)
        .returning(move |_| Ok(Some(seeker.clone())));

    let mut applications = MockApplications::new();
    applications
        .expect_create()
        .withf(move |a: &ApplicationInsert| {
            a.job_id == job_id && a.job_seeker_profile_id == seeker_id && a.status == "pending"
        })
        .times(1)
        .returning(|insert| {
            Ok(JobApplication {
                id: Uuid::new_v4(),
                job_id: insert.job_id,
                job_seeker_profile_id: insert.job_seeker_profile_id,
                status: insert.status.clone(),
                cover_letter: insert.cover_letter.clone(),
                applied_at: insert.applied_at,
                updated_at: insert.updated_at,
            })
        });

    let board = JobBoard::new(profiles, seekers, MockEmployers::new(), jobs, applications);

    let application = board
        .apply_to_job(
            identity_id,
            job_id,
            NewApplication {
                cover_letter: Some("I would like to apply.".to_string()),
            },
        )
        .await
        .expect("application should succeed");

    assert_eq!(application.status, "pending");
    assert_eq!(application.job_seeker_profile_id, seeker_id);
}

#[actix_rt::test]
async fn apply_to_expired_job_is_rejected() {
    let job_id = Uuid::new_v4();

    let mut jobs = MockJobs::new();
    jobs.expect_get_job().times(1).returning(move |id| {
        let mut job = active_job(*id);
        job.expires_at = Some(Utc::now() - Duration::days(1));
        Ok(Some(job))
    });
    jobs.expect_increment_applications().times(0);

    let mut profiles = MockProfiles::new();
    profiles.expect_get_by_identity().times(0);

    let mut applications = MockApplications::new();
    applications.expect_create().times(0);

    let board = JobBoard::new(
        profiles,
        MockSeekers::new(),
        MockEmployers::new(),
        jobs,
        applications,
    );

    let result = board
        .apply_to_job(Uuid::new_v4(), job_id, NewApplication { cover_letter: None })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}
