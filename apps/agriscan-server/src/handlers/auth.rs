//! Authentication and account handlers.

use actix_web::{HttpResponse, web};

use agriscan_core::domain::PublicUser;
use agriscan_shared::dto::{
    AuthResponse, LoginRequest, SignupRequest, UpdateProfileRequest, UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn issue_token(state: &AppState, user: PublicUser) -> AppResult<AuthResponse> {
    let token = state
        .tokens
        .generate_token(&user.id, &user.email, &user.name)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
        user: user.into(),
    })
}

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .register(&req.name, &req.email, &req.password)
        .await?
        .ok_or_else(|| AppError::Conflict("Email already registered".to_string()))?;

    Ok(HttpResponse::Created().json(issue_token(&state, user)?))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .authenticate(&req.email, &req.password)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    Ok(HttpResponse::Ok().json(issue_token(&state, user)?))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = identity.user(&state.users).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// PUT /api/account
///
/// The token carries name and email, so a fresh one is issued.
pub async fn update_account(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .update_profile(&identity.user_id, &req.name, &req.email)
        .await?;

    Ok(HttpResponse::Ok().json(issue_token(&state, user)?))
}
