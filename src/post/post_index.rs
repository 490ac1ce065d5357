use super::post_controller::{
    create_comment, create_post, delete_comment, delete_post, get_post, get_posts, like_post,
    unlike_post,
};
use crate::middleware::auth::verify_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .wrap(HttpAuthentication::with_fn(verify_token))
            .route("", web::post().to(create_post))
            .route("", web::get().to(get_posts))
            .route("/like/{id}", web::put().to(like_post))
            .route("/unlike/{id}", web::put().to(unlike_post))
            .route("/comment/{id}", web::post().to(create_comment))
            .route("/comment/{id}/{comment_id}", web::delete().to(delete_comment))
            .route("/{id}", web::get().to(get_post))
            .route("/{id}", web::delete().to(delete_post)),
    );
}
