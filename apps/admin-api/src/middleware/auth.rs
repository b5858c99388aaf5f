//! Authentication middleware and extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};
use std::sync::Arc;

use blog_core::ports::{AuthError, TokenClaims, TokenService};

use super::error::problem_response;

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::InsufficientPermissions => actix_web::http::StatusCode::FORBIDDEN,
            AuthError::TokenExpired | AuthError::InvalidToken(_) | AuthError::MissingAuth => {
                actix_web::http::StatusCode::UNAUTHORIZED
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use blog_shared::ErrorResponse;

        let error = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                .with_detail("Your authentication token has expired. Please login again."),
            AuthError::InvalidToken(msg) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
            }
            AuthError::MissingAuth => ErrorResponse::unauthorized()
                .with_detail("Please provide a valid Bearer token in the Authorization header."),
            AuthError::InsufficientPermissions => ErrorResponse::forbidden()
                .with_detail("You do not have permission to perform this action."),
        };

        problem_response(self.status_code(), error)
    }
}

fn authenticate(req: &HttpRequest) -> Result<TokenClaims, AuthenticationError> {
    let Some(token_service) = req.app_data::<actix_web::web::Data<Arc<dyn TokenService>>>() else {
        tracing::error!("TokenService not found in app data");
        return Err(AuthenticationError(AuthError::InvalidToken(
            "Server configuration error".to_string(),
        )));
    };

    // Extract Bearer token from Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthenticationError(AuthError::MissingAuth))?;

    let auth_str = auth_header.to_str().map_err(|_| {
        AuthenticationError(AuthError::InvalidToken(
            "Invalid authorization header".to_string(),
        ))
    })?;

    let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        AuthenticationError(AuthError::InvalidToken(
            "Expected Bearer token".to_string(),
        ))
    })?;

    token_service
        .validate_token(token)
        .map_err(AuthenticationError)
}

/// Authenticated caller holding the superuser role.
///
/// Authenticated callers without the role are rejected with 403 before the
/// handler body runs.
#[derive(Debug, Clone)]
pub struct SuperUser {
    user_id: uuid::Uuid,
}

impl SuperUser {
    pub fn user_id(&self) -> uuid::Uuid {
        self.user_id
    }
}

impl FromRequest for SuperUser {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|claims| {
            if claims.is_superuser() {
                Ok(SuperUser {
                    user_id: claims.user_id,
                })
            } else {
                tracing::warn!(user_id = %claims.user_id, "Superuser role required");
                Err(AuthenticationError(AuthError::InsufficientPermissions))
            }
        });
        ready(result)
    }
}
