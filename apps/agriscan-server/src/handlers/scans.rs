//! Leaf scan and scan history handlers.

use actix_web::{HttpResponse, web};

use agriscan_shared::dto::ScanRequest;

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/scans
///
/// Anyone may scan; a signed-in caller's result is kept for saving or posting.
pub async fn scan(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<ScanRequest>,
) -> AppResult<HttpResponse> {
    let scope = identity.0.as_ref().map(|i| i.user_id.as_str());
    let report = state.scans.scan(scope, &body.image).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /api/scans/latest
pub async fn latest(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let result = state
        .drafts
        .scan_result(&identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No recent scan".to_string()))?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/history
pub async fn history(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let entries = state.content.scan_history(&identity.user_id).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// POST /api/history
pub async fn save_to_history(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let result = state
        .drafts
        .scan_result(&identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No recent scan to save".to_string()))?;

    let entry = state.content.record_scan(&identity.user_id, &result).await?;
    Ok(HttpResponse::Created().json(entry))
}
