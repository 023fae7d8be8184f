pub mod application;
pub mod auth_provider;
pub mod employer;
pub mod identity;
pub mod job;
pub mod job_seeker;
pub mod profile;
pub mod sqlx_repo;
