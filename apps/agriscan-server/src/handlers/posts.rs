//! Community feed handlers.

use actix_web::{HttpResponse, web};

use agriscan_shared::dto::{CommentRequest, CreatePostRequest, VoteRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.content.blog_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let author = identity.user(&state.users).await?;

    let post = state.content.create_post(&author, req.post).await?;

    if let Some(scan_id) = req.scan_id {
        if state
            .content
            .mark_scan_posted(&author.id, &scan_id)
            .await?
            .is_none()
        {
            tracing::warn!(scan_id = %scan_id, "Published post references unknown scan");
        }
    }

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/draft
///
/// Hands out the pending draft once. 204 when there is none.
pub async fn take_draft(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    match state.drafts.take_post_draft(&identity.user_id).await? {
        Some(draft) => Ok(HttpResponse::Ok().json(draft)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}

/// POST /api/posts/draft
pub async fn create_draft(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let draft = state.scans.draft_post(&identity.user_id).await?;
    Ok(HttpResponse::Created().json(draft))
}

/// POST /api/posts/{id}/vote
pub async fn vote(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<VoteRequest>,
) -> AppResult<HttpResponse> {
    identity.user(&state.users).await?;
    let post = state.content.cast_vote(&path, body.vote).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let author = identity.user(&state.users).await?;
    let comment = state
        .content
        .add_comment(&path, &author, &body.content)
        .await?;
    Ok(HttpResponse::Created().json(comment))
}
