use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::error;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// One entry of the `{errors: [...]}` body returned for rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
    pub location: String,
}

impl FieldError {
    pub fn body(param: &str, msg: impl Into<String>) -> Self {
        FieldError {
            msg: msg.into(),
            param: param.to_string(),
            location: "body".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CustomError {
    /// Missing or invalid credential.
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated, but not the owner of the resource.
    #[error("{0}")]
    Unauthorized(String),

    #[error("validation failed")]
    ValidationFailed(Vec<FieldError>),

    /// Absent resource, or an id that could never name one.
    #[error("{0}")]
    NotFound(String),

    #[error("post already liked")]
    AlreadyLiked,

    #[error("post has not yet been liked")]
    NotLiked,

    /// The detail is logged, never sent to the caller.
    #[error("Server Error: {0}")]
    ServerError(String),
}

impl From<ValidationErrors> for CustomError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(param, errs)| {
                let param = param.to_string();
                errs.iter()
                    .map(|e| {
                        let msg = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        FieldError::body(&param, msg)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        fields.sort_by(|a, b| a.param.cmp(&b.param));

        CustomError::ValidationFailed(fields)
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::Unauthenticated(..) => StatusCode::UNAUTHORIZED,
            CustomError::Unauthorized(..) => StatusCode::UNAUTHORIZED,
            CustomError::ValidationFailed(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFound(..) => StatusCode::NOT_FOUND,
            CustomError::AlreadyLiked => StatusCode::BAD_REQUEST,
            CustomError::NotLiked => StatusCode::BAD_REQUEST,
            CustomError::ServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            CustomError::ValidationFailed(errors) => {
                HttpResponse::build(self.status_code()).json(json!({ "errors": errors }))
            }
            CustomError::ServerError(detail) => {
                error!("{}", detail);
                HttpResponse::build(self.status_code())
                    .content_type("text/plain; charset=utf-8")
                    .body("Server Error")
            }
            _ => HttpResponse::build(self.status_code()).json(json!({ "msg": self.to_string() })),
        }
    }
}
