pub mod application;
pub mod employer;
pub mod identity;
pub mod job;
pub mod job_seeker;
pub mod profile;
pub mod resume;
pub mod token;
