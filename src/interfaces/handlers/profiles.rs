use actix_web::{get, put, web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;

use crate::entities::employer::EmployerProfileForm;
use crate::entities::job_seeker::JobSeekerProfileForm;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[put("/profiles/job-seeker")]
pub async fn save_job_seeker_profile(
    state: web::Data<AppState>,
    claims: AuthClaims,
    form: web::Json<JobSeekerProfileForm>,
) -> impl Responder {
    let identity_id = match Uuid::parse_str(&claims.0.sub) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().json("Invalid user ID in claims"),
    };

    match state
        .session_manager
        .provisioning
        .save_job_seeker_profile(identity_id, &claims.0.email, form.into_inner())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.error_response(),
    }
}

#[put("/profiles/employer")]
pub async fn save_employer_profile(
    state: web::Data<AppState>,
    claims: AuthClaims,
    form: web::Json<EmployerProfileForm>,
) -> impl Responder {
    let identity_id = match Uuid::parse_str(&claims.0.sub) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().json("Invalid user ID in claims"),
    };

    match state
        .session_manager
        .provisioning
        .save_employer_profile(identity_id, &claims.0.email, form.into_inner())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.error_response(),
    }
}

#[get("/candidates")]
pub async fn browse_candidates(state: web::Data<AppState>, _claims: AuthClaims) -> impl Responder {
    match state.job_board.browse_candidates().await {
        Ok(candidates) => HttpResponse::Ok().json(candidates),
        Err(e) => e.error_response(),
    }
}
