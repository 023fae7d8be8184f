use actix_web::web;

use crate::handlers::{profiles, resumes};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(profiles::save_job_seeker_profile)
        .service(profiles::save_employer_profile)
        .service(profiles::browse_candidates)
        .service(resumes::upload_resume);
}
