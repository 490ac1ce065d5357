use crate::config::AppConfig;
use crate::database::{PostStore, ProfileStore};
use crate::middleware::auth::TokenVerifier;
use crate::middleware::error_handler::json_config;
use crate::middleware::not_found::not_found;
use crate::post::post_index::post_routes;
use crate::post::post_service::PostService;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

/// Shared, read-only state handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<AppConfig>,
    pub verifier: web::Data<TokenVerifier>,
    pub post_service: web::Data<PostService>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        posts: Arc<dyn PostStore>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        let verifier = TokenVerifier::new(&config.jwt_secret);
        AppState {
            config: web::Data::new(config),
            verifier: web::Data::new(verifier),
            post_service: web::Data::new(PostService::new(posts, profiles)),
        }
    }
}

async fn index(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Social posts service is running",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": config.service_name,
    }))
}

pub fn routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(state.config.clone())
        .app_data(state.verifier.clone())
        .app_data(state.post_service.clone())
        .app_data(json_config())
        .route("/", web::get().to(index))
        .configure(post_routes)
        .default_service(web::to(not_found));
}
