use crate::utils::error::{CustomError, FieldError};
use actix_web::error::JsonPayloadError;
use actix_web::{Error, HttpRequest, web};
use log::debug;

/// Routes body parse failures through the same `{errors: [...]}` shape the
/// validators produce.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("rejected body on {}: {}", req.path(), err);

    let msg = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Payload too large".to_string()
        }
        _ => "Invalid JSON body".to_string(),
    };

    CustomError::ValidationFailed(vec![FieldError::body("body", msg)]).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
