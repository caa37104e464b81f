use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::form::FormError;
use crate::models::project::FieldErrors;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(FieldErrors),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
    Config(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct ValidationResponse<'a> {
    error: &'static str,
    fields: &'a FieldErrors,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Validation(fields) => write!(f, "Validation failed on {} field(s)", fields.len()),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Invalid(fields) => AppError::Validation(fields),
            FormError::AlreadySubmitting => AppError::Conflict(err.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() }),
            AppError::Validation(fields) => HttpResponse::BadRequest().json(ValidationResponse {
                error: "Validation failed",
                fields,
            }),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse { error: msg.clone() }),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(ErrorResponse { error: msg.clone() }),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(ErrorResponse { error: msg.clone() }),
            AppError::Config(msg) => HttpResponse::InternalServerError().json(ErrorResponse { error: msg.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Field;
    use actix_web::http::StatusCode;

    #[test]
    fn form_errors_map_to_status_codes() {
        let mut fields = FieldErrors::new();
        fields.insert(Field::ProjectName, "Project name is required".to_string());

        let invalid = AppError::from(FormError::Invalid(fields));
        assert_eq!(invalid.error_response().status(), StatusCode::BAD_REQUEST);

        let busy = AppError::from(FormError::AlreadySubmitting);
        assert_eq!(busy.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn display_prefixes_kind() {
        let err = AppError::NotFound("Project not found".to_string());
        assert_eq!(err.to_string(), "Not Found: Project not found");
    }
}
