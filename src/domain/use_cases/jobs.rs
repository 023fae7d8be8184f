use uuid::Uuid;
use validator::Validate;

use crate::entities::application::{JobApplication, NewApplication};
use crate::entities::job::{Job, NewJob};
use crate::entities::job_seeker::CandidateSummary;
use crate::entities::profile::Profile;
use crate::errors::AppError;
use crate::repositories::application::ApplicationRepository;
use crate::repositories::employer::EmployerRepository;
use crate::repositories::job::JobRepository;
use crate::repositories::job_seeker::JobSeekerRepository;
use crate::repositories::profile::ProfileRepository;

/// Job postings and applications. Every operation resolves the caller's
/// profile chain first; nothing is written when a lookup comes back empty.
pub struct JobBoard<P, S, E, J, A>
where
    P: ProfileRepository,
    S: JobSeekerRepository,
    E: EmployerRepository,
    J: JobRepository,
    A: ApplicationRepository,
{
    pub profiles: P,
    pub seekers: S,
    pub employers: E,
    pub jobs: J,
    pub applications: A,
}

impl<P, S, E, J, A> JobBoard<P, S, E, J, A>
where
    P: ProfileRepository,
    S: JobSeekerRepository,
    E: EmployerRepository,
    J: JobRepository,
    A: ApplicationRepository,
{
    pub fn new(profiles: P, seekers: S, employers: E, jobs: J, applications: A) -> Self {
        JobBoard {
            profiles,
            seekers,
            employers,
            jobs,
            applications,
        }
    }

    async fn profile_for(&self, identity_id: &Uuid) -> Result<Profile, AppError> {
        self.profiles
            .get_by_identity(identity_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    pub async fn post_job(&self, identity_id: Uuid, request: NewJob) -> Result<Job, AppError> {
        request.validate()?;
        validate_bounds(&request)?;

        let profile = self.profile_for(&identity_id).await?;
        let employer = self
            .employers
            .get_by_profile(&profile.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employer profile not found".to_string()))?;

        self.jobs
            .create_job(&request.prepare_for_insert(employer.id))
            .await
    }

    pub async fn list_active_jobs(&self) -> Result<Vec<Job>, AppError> {
        self.jobs.list_active().await
    }

    /// Fetches a posting and bumps its view counter. A failed bump is
    /// logged, not surfaced; the read already succeeded.
    pub async fn view_job(&self, job_id: &Uuid) -> Result<Job, AppError> {
        let job = self
            .jobs
            .get_job(job_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        if let Err(e) = self.jobs.increment_views(job_id).await {
            tracing::warn!(%job_id, error = %e, "failed to bump view counter");
        }

        Ok(job)
    }

    pub async fn apply_to_job(
        &self,
        identity_id: Uuid,
        job_id: Uuid,
        request: NewApplication,
    ) -> Result<JobApplication, AppError> {
        request.validate()?;

        let job = self
            .jobs
            .get_job(&job_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        if !job.is_open() {
            return Err(AppError::Conflict(
                "Job is no longer accepting applications".to_string(),
            ));
        }

        let profile = self.profile_for(&identity_id).await?;
        let seeker = self
            .seekers
            .get_by_profile(&profile.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job seeker profile not found".to_string()))?;

        let application = self
            .applications
            .create(&request.prepare_for_insert(job_id, seeker.id))
            .await?;

        if let Err(e) = self.jobs.increment_applications(&job_id).await {
            tracing::warn!(%job_id, error = %e, "failed to bump application counter");
        }

        Ok(application)
    }

    pub async fn browse_candidates(&self) -> Result<Vec<CandidateSummary>, AppError> {
        self.seekers.list_candidates().await
    }
}

fn validate_bounds(request: &NewJob) -> Result<(), AppError> {
    if let (Some(min), Some(max)) = (request.min_salary, request.max_salary) {
        if min > max {
            return Err(AppError::field_error(
                "max_salary",
                "Must not be lower than min salary",
            ));
        }
    }
    if let (Some(min), Some(max)) = (request.min_experience, request.max_experience) {
        if min > max {
            return Err(AppError::field_error(
                "max_experience",
                "Must not be lower than min experience",
            ));
        }
    }
    Ok(())
}
