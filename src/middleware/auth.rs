use crate::utils::error::CustomError;
use actix_web::dev::{Payload, ServiceRequest};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{DecodingKey, Validation, decode};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

pub const NO_TOKEN: &str = "no token, authorization denied";
pub const INVALID_TOKEN: &str = "token is not valid";

/// The authenticated identity attached to a request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user: AuthUser,
    pub exp: usize,
}

/// Checks HS256 tokens against the secret it was built with.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        TokenVerifier {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    pub fn verify(&self, token: Option<&str>) -> Result<AuthUser, CustomError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CustomError::Unauthenticated(NO_TOKEN.to_string()))?;

        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims.user)
            .map_err(|e| {
                debug!("rejected token: {}", e);
                CustomError::Unauthenticated(INVALID_TOKEN.to_string())
            })
    }
}

/// Validator for `HttpAuthentication::with_fn`. A missing or unparseable
/// `Authorization` header arrives here as `None`.
pub async fn verify_token(
    req: ServiceRequest,
    credentials: Option<BearerAuth>,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let verifier = match req.app_data::<web::Data<TokenVerifier>>().cloned() {
        Some(verifier) => verifier,
        None => {
            error!("TokenVerifier missing from app data");
            return Err((
                CustomError::ServerError("token verifier not configured".into()).into(),
                req,
            ));
        }
    };

    match verifier.verify(credentials.as_ref().map(|c| c.token())) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

impl FromRequest for AuthUser {
    type Error = CustomError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or_else(|| CustomError::Unauthenticated(NO_TOKEN.to_string())),
        )
    }
}
