use uuid::Uuid;
use validator::Validate;

use crate::entities::employer::{EmployerProfile, EmployerProfileForm};
use crate::entities::identity::Identity;
use crate::entities::job_seeker::{JobSeekerProfile, JobSeekerProfileForm};
use crate::entities::profile::{RegisteredAccount, RegistrationRequest, RoleData};
use crate::errors::{AppError, ProvisioningError};
use crate::repositories::employer::EmployerRepository;
use crate::repositories::job_seeker::JobSeekerRepository;
use crate::repositories::profile::ProfileRepository;

/// Creates the normalized two-tier profile for a confirmed identity:
/// a base `profiles` row, then exactly one role-specific child row
/// referencing it.
pub struct ProvisioningWorkflow<P, S, E>
where
    P: ProfileRepository,
    S: JobSeekerRepository,
    E: EmployerRepository,
{
    pub profiles: P,
    pub seekers: S,
    pub employers: E,
}

impl<P, S, E> ProvisioningWorkflow<P, S, E>
where
    P: ProfileRepository,
    S: JobSeekerRepository,
    E: EmployerRepository,
{
    pub fn new(profiles: P, seekers: S, employers: E) -> Self {
        ProvisioningWorkflow {
            profiles,
            seekers,
            employers,
        }
    }

    /// The base insert must land before the role row is attempted. On a
    /// role-row failure the base row is deleted again so it cannot be
    /// left orphaned; the identity itself stays in the auth provider and
    /// is only logged (cleaning it up needs provider-side admin access).
    pub async fn provision(
        &self,
        identity: &Identity,
        request: &RegistrationRequest,
    ) -> Result<RegisteredAccount, ProvisioningError> {
        let profile_insert = request.profile_insert(identity.id);

        let profile_id = self
            .profiles
            .create_profile(&profile_insert)
            .await
            .map_err(|e| {
                tracing::error!(
                    identity_id = %identity.id,
                    error = %e,
                    "profile insert failed; identity exists without a profile"
                );
                ProvisioningError::Profile(e)
            })?;

        let role_result = match &request.role {
            RoleData::Jobseeker(details) => {
                self.seekers
                    .create(&details.prepare_for_insert(profile_id))
                    .await
            }
            RoleData::Employer(details) => {
                self.employers
                    .create(&details.prepare_for_insert(profile_id))
                    .await
            }
        };

        match role_result {
            Ok(role_profile_id) => Ok(RegisteredAccount {
                identity_id: identity.id,
                profile_id,
                role_profile_id,
                user_type: request.role.user_type(),
            }),
            Err(cause) => {
                if let Err(cleanup) = self.profiles.delete_profile(profile_id).await {
                    tracing::error!(
                        %profile_id,
                        error = %cleanup,
                        "failed to remove base profile after role row insert error; row is orphaned"
                    );
                }
                Err(ProvisioningError::RoleProfile(cause))
            }
        }
    }

    /// Edit-form path: both tiers are upserted by their unique keys, so a
    /// repeated submission updates in place instead of duplicating.
    pub async fn save_job_seeker_profile(
        &self,
        identity_id: Uuid,
        email: &str,
        form: JobSeekerProfileForm,
    ) -> Result<JobSeekerProfile, AppError> {
        form.validate()?;

        let profile = self
            .profiles
            .upsert_profile(&form.profile_upsert(identity_id, email))
            .await?;

        self.seekers.upsert(&form.prepare_for_upsert(profile.id)).await
    }

    pub async fn save_employer_profile(
        &self,
        identity_id: Uuid,
        email: &str,
        form: EmployerProfileForm,
    ) -> Result<EmployerProfile, AppError> {
        form.validate()?;

        let profile = self
            .profiles
            .upsert_profile(&form.profile_upsert(identity_id, email))
            .await?;

        self.employers.upsert(&form.prepare_for_upsert(profile.id)).await
    }
}
