use actix_web::web;

use crate::handlers::jobs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(jobs::list_jobs)
        .service(jobs::post_job)
        .service(jobs::get_job)
        .service(jobs::apply_to_job);
}
