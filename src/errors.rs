// src/errors.rs
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResponseError for DesignError {
    fn error_response(&self) -> HttpResponse {
        match self {
            DesignError::InvalidColor(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Invalid color",
                "message": self.to_string()
            })),
            DesignError::Validation(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Validation error",
                "message": self.to_string()
            })),
            DesignError::Config(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Configuration error",
                    "message": self.to_string()
                }))
            }
        }
    }
}
