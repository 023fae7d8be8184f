use actix_web::{get, post, web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;

use crate::entities::application::NewApplication;
use crate::entities::job::{JobResponse, NewJob};
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[post("/jobs")]
pub async fn post_job(
    state: web::Data<AppState>,
    claims: AuthClaims,
    request: web::Json<NewJob>,
) -> impl Responder {
    let identity_id = match Uuid::parse_str(&claims.0.sub) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().json("Invalid user ID in claims"),
    };

    match state.job_board.post_job(identity_id, request.into_inner()).await {
        Ok(job) => HttpResponse::Created().json(JobResponse::from(job)),
        Err(e) => e.error_response(),
    }
}

#[get("/jobs")]
pub async fn list_jobs(state: web::Data<AppState>) -> impl Responder {
    match state.job_board.list_active_jobs().await {
        Ok(jobs) => HttpResponse::Ok().json(
            jobs.into_iter().map(JobResponse::from).collect::<Vec<_>>(),
        ),
        Err(e) => e.error_response(),
    }
}

#[get("/jobs/{job_id}")]
pub async fn get_job(state: web::Data<AppState>, job_id: web::Path<Uuid>) -> impl Responder {
    match state.job_board.view_job(&job_id.into_inner()).await {
        Ok(job) => HttpResponse::Ok().json(JobResponse::from(job)),
        Err(e) => e.error_response(),
    }
}

#[post("/jobs/{job_id}/applications")]
pub async fn apply_to_job(
    state: web::Data<AppState>,
    claims: AuthClaims,
    job_id: web::Path<Uuid>,
    request: web::Json<NewApplication>,
) -> impl Responder {
    let identity_id = match Uuid::parse_str(&claims.0.sub) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().json("Invalid user ID in claims"),
    };

    match state
        .job_board
        .apply_to_job(identity_id, job_id.into_inner(), request.into_inner())
        .await
    {
        Ok(application) => HttpResponse::Created().json(application),
        Err(e) => e.error_response(),
    }
}
