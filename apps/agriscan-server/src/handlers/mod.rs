//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod scans;

use actix_web::error::JsonPayloadError;
use actix_web::web;

use crate::middleware::error::AppError;

/// JSON extractor settings: `limit` caps the body size, and rejected bodies
/// render as problem details like every other error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                AppError::PayloadTooLarge(err.to_string()).into()
            }
            _ => AppError::BadRequest(err.to_string()).into(),
        })
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            .route("/account", web::put().to(auth::update_account))
            // Community feed
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/draft", web::get().to(posts::take_draft))
                    .route("/draft", web::post().to(posts::create_draft))
                    .route("/{id}/vote", web::post().to(posts::vote))
                    .route("/{id}/comments", web::post().to(posts::add_comment)),
            )
            // Scanning
            .route("/scans", web::post().to(scans::scan))
            .route("/scans/latest", web::get().to(scans::latest))
            .route("/history", web::get().to(scans::history))
            .route("/history", web::post().to(scans::save_to_history)),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use agriscan_infra::InMemoryStore;

    use super::*;
    use crate::config::AppConfig;
    use crate::state::AppState;

    fn config() -> AppConfig {
        AppConfig {
            scan_delay: Duration::ZERO,
            ..AppConfig::default()
        }
    }

    async fn state(config: &AppConfig) -> AppState {
        AppState::with_store(Arc::new(InMemoryStore::new()), config)
            .await
            .unwrap()
    }

    macro_rules! app {
        () => {
            app!(config())
        };
        ($config:expr) => {{
            let config = $config;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state(&config).await))
                    .app_data(json_config(config.max_body_bytes))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    macro_rules! login {
        ($app:expr, $email:expr, $password:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "email": $email, "password": $password }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&$app, req).await;
            format!("Bearer {}", body["access_token"].as_str().unwrap())
        }};
    }

    #[actix_web::test]
    async fn test_health_reports_storage() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_guarded_routes_require_sign_in() {
        let app = app!();

        let requests = [
            test::TestRequest::get().uri("/api/auth/me"),
            test::TestRequest::get().uri("/api/history"),
            test::TestRequest::post().uri("/api/history"),
            test::TestRequest::get().uri("/api/scans/latest"),
            test::TestRequest::post()
                .uri("/api/posts/1/vote")
                .set_json(json!({ "vote": "up" })),
            test::TestRequest::post()
                .uri("/api/posts/1/comments")
                .set_json(json!({ "content": "hi" })),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["title"], "Authentication Required");
        }

        // nothing changed
        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Value = test::call_and_read_body_json(&app, req).await;
        let first = posts.as_array().unwrap().iter().find(|p| p["id"] == "1").unwrap();
        assert_eq!(first["upvotes"], 24);
    }

    #[actix_web::test]
    async fn test_signup_me_and_duplicate_email() {
        let app = app!();
        let signup = json!({ "name": "Ana", "email": "ana@farm.io", "password": "s3cret" });

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&signup)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["user"]["name"], "Ana");
        let token = format!("Bearer {}", body["access_token"].as_str().unwrap());

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["email"], "ana@farm.io");
        assert!(me.get("passwordHash").is_none());

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&signup)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_login_rejects_wrong_password() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "demo@agriscan.com", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }

    #[actix_web::test]
    async fn test_vote_toggles() {
        let app = app!();
        let token = login!(app, "demo@agriscan.com", "demo123");

        let vote = |v: &str| {
            test::TestRequest::post()
                .uri("/api/posts/1/vote")
                .insert_header((header::AUTHORIZATION, token.clone()))
                .set_json(json!({ "vote": v }))
                .to_request()
        };

        let post: Value = test::call_and_read_body_json(&app, vote("up")).await;
        assert_eq!(post["upvotes"], 25);
        assert_eq!(post["userVote"], "up");

        let post: Value = test::call_and_read_body_json(&app, vote("up")).await;
        assert_eq!(post["upvotes"], 24);
        assert!(post.get("userVote").is_none());

        let post: Value = test::call_and_read_body_json(&app, vote("up")).await;
        let downvotes = post["downvotes"].as_u64().unwrap();
        let post: Value = test::call_and_read_body_json(&app, vote("down")).await;
        assert_eq!(post["upvotes"], 24);
        assert_eq!(post["downvotes"].as_u64().unwrap(), downvotes + 1);
        assert_eq!(post["userVote"], "down");

        let req = test::TestRequest::post()
            .uri("/api/posts/missing/vote")
            .insert_header((header::AUTHORIZATION, token.clone()))
            .set_json(json!({ "vote": "up" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_anonymous_scan_is_not_kept() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/scans")
            .set_json(json!({ "image": "leaf.jpg" }))
            .to_request();
        let report: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(report["image"], "leaf.jpg");
        assert!(!report["remedies"].as_array().unwrap().is_empty());

        let token = login!(app, "demo@agriscan.com", "demo123");
        let req = test::TestRequest::get()
            .uri("/api/scans/latest")
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_scan_save_draft_and_publish() {
        let app = app!();
        let token = login!(app, "demo@agriscan.com", "demo123");
        let auth = || (header::AUTHORIZATION, token.clone());

        let req = test::TestRequest::post()
            .uri("/api/scans")
            .insert_header(auth())
            .set_json(json!({ "image": "data:image/png;base64,AAAA" }))
            .to_request();
        let report: Value = test::call_and_read_body_json(&app, req).await;
        let confidence = report["confidence"].as_u64().unwrap();
        assert!((92..=98).contains(&confidence));

        let req = test::TestRequest::post()
            .uri("/api/history")
            .insert_header(auth())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let entry: Value = test::read_body_json(resp).await;
        assert_eq!(entry["plantName"], report["plantName"]);
        assert_eq!(entry["postedAsBlog"], false);

        let req = test::TestRequest::post()
            .uri("/api/posts/draft")
            .insert_header(auth())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/posts/draft")
            .insert_header(auth())
            .to_request();
        let draft: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(draft["diagnosis"], report["diagnosis"]);

        let req = test::TestRequest::get()
            .uri("/api/posts/draft")
            .insert_header(auth())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(auth())
            .set_json(json!({
                "plantName": draft["plantName"],
                "diagnosis": draft["diagnosis"],
                "image": draft["image"],
                "remedies": draft["remedies"],
                "content": "Found this on the lower leaves.",
                "scanId": entry["id"],
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let post: Value = test::read_body_json(resp).await;
        assert_eq!(post["author"]["name"], "Demo User");
        assert_eq!(post["upvotes"], 0);

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", post["id"].as_str().unwrap()))
            .insert_header(auth())
            .set_json(json!({ "content": "Day 3: new growth looks healthy" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let feed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(feed[0]["id"], post["id"]);
        assert_eq!(feed[0]["comments"].as_array().unwrap().len(), 1);
        assert_eq!(feed.as_array().unwrap().len(), 4);

        let req = test::TestRequest::get()
            .uri("/api/history")
            .insert_header(auth())
            .to_request();
        let history: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history[0]["postedAsBlog"], true);
    }

    #[actix_web::test]
    async fn test_photo_sized_data_uri_is_accepted() {
        let app = app!();
        let image = format!("data:image/jpeg;base64,{}", "A".repeat(3 * 1024 * 1024));

        let req = test::TestRequest::post()
            .uri("/api/scans")
            .set_json(json!({ "image": image }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let report: Value = test::read_body_json(resp).await;
        assert_eq!(report["image"].as_str().unwrap().len(), image.len());
    }

    #[actix_web::test]
    async fn test_body_over_limit_is_payload_too_large() {
        let app = app!(AppConfig {
            max_body_bytes: 1024,
            ..config()
        });
        let image = format!("data:image/jpeg;base64,{}", "A".repeat(4096));

        let req = test::TestRequest::post()
            .uri("/api/scans")
            .set_json(json!({ "image": image }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 413);
        assert_eq!(body["title"], "Payload Too Large");
    }

    #[actix_web::test]
    async fn test_vote_from_deleted_account_is_signed_out() {
        let app = app!();
        let state = state(&config()).await;
        let token = state.tokens.generate_token("gone", "gone@farm.io", "Gone").unwrap();

        let req = test::TestRequest::post()
            .uri("/api/posts/1/vote")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .set_json(json!({ "vote": "up" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Value = test::call_and_read_body_json(&app, req).await;
        let first = posts.as_array().unwrap().iter().find(|p| p["id"] == "1").unwrap();
        assert_eq!(first["upvotes"], 24);
    }
}
