use actix_web::web;

use crate::handlers::home::home;
use crate::handlers::system::health_check;

mod auth;
mod jobs;
mod profiles;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(auth::config_routes)
            .configure(jobs::config_routes)
            .configure(profiles::config_routes)
    );
}
