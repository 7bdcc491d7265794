//! HTTP handlers for CV generation.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::generator::CvGenerator;
use super::models::CvRequest;
use super::traits::Generator;
use super::validation::{ValidationError, ValidationErrors};
use super::{GeneratorError, DOCX_CONTENT_TYPE};
use crate::ErrorResponse;

/// Service banner returned by `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub usage: String,
}

/// Body of a 422 response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Vec<ValidationError>,
    pub timestamp: String,
}

impl ValidationErrorResponse {
    pub fn from_errors(errors: &ValidationErrors) -> Self {
        Self {
            error: "ValidationError".to_string(),
            message: format!("{} validation error(s) in CV data", errors.len()),
            details: errors.errors().to_vec(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "CV Generator",
    responses(
        (status = 200, description = "Service name and usage hint", body = ServiceInfo)
    )
)]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "CV Generator API".to_string(),
        usage: "POST your CV data to /generate-cv endpoint to get a Word document".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/generate-cv",
    tag = "CV Generator",
    request_body = CvRequest,
    responses(
        (status = 200, description = "Word document attachment", body = Vec<u8>,
            content_type = "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        (status = 422, description = "Invalid CV data", body = ValidationErrorResponse),
        (status = 500, description = "Document rendering failed", body = ErrorResponse)
    )
)]
pub async fn generate_cv(body: web::Json<CvRequest>) -> impl Responder {
    let request = body.into_inner();
    log::info!("Received CV generation request for '{}'", request.full_name);

    let result = web::block(move || CvGenerator::new().generate(request)).await;

    match result {
        Ok(Ok(document)) => HttpResponse::Ok()
            .content_type(DOCX_CONTENT_TYPE)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", document.filename),
            ))
            .body(document.bytes),
        Ok(Err(GeneratorError::Validation(errors))) => {
            log::warn!("Rejected CV data: {}", errors);
            HttpResponse::UnprocessableEntity().json(ValidationErrorResponse::from_errors(&errors))
        }
        Ok(Err(e)) => {
            log::error!("Error generating CV: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&format!(
                "Error generating CV: {}",
                e
            )))
        }
        Err(e) => {
            log::error!("CV generation task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&format!(
                "Error generating CV: {}",
                e
            )))
        }
    }
}

/// Map JSON extraction failures: shape errors are 422 with detail, the rest
/// are plain transport errors.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::Deserialize(e) if e.is_data() => {
            let errors = ValidationErrors::from(ValidationError::new("body", e.to_string()));
            HttpResponse::UnprocessableEntity().json(ValidationErrorResponse::from_errors(&errors))
        }
        JsonPayloadError::ContentType => HttpResponse::UnsupportedMediaType()
            .json(ErrorResponse::new("UnsupportedMediaType", &err.to_string())),
        _ => HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string())),
    };
    log::warn!("Rejected request body: {}", err);
    InternalError::from_response(err, response).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Configure CV routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/").route(web::get().to(root)))
        .service(web::resource("/generate-cv").route(web::post().to(generate_cv)));
}
