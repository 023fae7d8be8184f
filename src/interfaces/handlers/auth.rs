use actix_web::{post, web, HttpResponse, Responder, ResponseError};

use crate::entities::identity::LoginRequest;
use crate::entities::profile::RegistrationRequest;
use crate::entities::token::RefreshTokenRequest;
use crate::AppState;

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegistrationRequest>,
) -> impl Responder {
    match state.session_manager.sign_up(request.into_inner()).await {
        Ok(account) => HttpResponse::Created().json(account),
        Err(e) => e.error_response(),
    }
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> impl Responder {
    match state.session_manager.sign_in(request.into_inner()).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => e.error_response(),
    }
}

#[post("/refresh-token")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> impl Responder {
    match state.session_manager.refresh(&request.refresh_token).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => e.error_response(),
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    match state.session_manager.sign_out().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"message": "Signed out successfully"})),
        Err(e) => e.error_response(),
    }
}
