use crate::middleware::auth::AuthUser;
use crate::post::post_model::{CreateCommentRequest, CreatePostRequest};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use serde_json::json;
use validator::Validate;

/// POST /posts
pub async fn create_post(
    user: AuthUser,
    post_service: web::Data<PostService>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    body.validate()?;

    let post = post_service
        .create_post(&user.id, body.into_inner().text)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts
pub async fn get_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.get_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    post_service.delete_post(&user.id, &post_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "msg": "post removed" })))
}

/// PUT /posts/like/{id}
pub async fn like_post(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let likes = post_service.like_post(&user.id, &post_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// PUT /posts/unlike/{id}
pub async fn unlike_post(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let likes = post_service.unlike_post(&user.id, &post_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// POST /posts/comment/{id}
pub async fn create_comment(
    user: AuthUser,
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, CustomError> {
    body.validate()?;

    let comments = post_service
        .add_comment(&user.id, &post_id, body.into_inner().text)
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// DELETE /posts/comment/{id}/{comment_id}
pub async fn delete_comment(
    user: AuthUser,
    path: web::Path<(String, String)>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let (post_id, comment_id) = path.into_inner();
    let comments = post_service
        .delete_comment(&user.id, &post_id, &comment_id)
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}
