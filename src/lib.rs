use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod cv;

pub use crate::config::ServerConfig;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV Generator API",
        description = "API to generate CV Word documents from JSON data"
    ),
    paths(crate::cv::handlers::root, crate::cv::handlers::generate_cv),
    components(schemas(
        cv::models::CvRequest,
        cv::models::WorkExperience,
        cv::models::Education,
        cv::models::LanguageProficiency,
        cv::models::Residency,
        cv::models::Employment,
        cv::models::HaveChildren,
        cv::handlers::ServiceInfo,
        cv::handlers::ValidationErrorResponse,
        cv::validation::ValidationError,
        ErrorResponse,
    )),
    tags(
        (name = "CV Generator", description = "Render a resume record into a Word document.")
    )
)]
pub struct ApiDoc;

fn build_cors(config: &ServerConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600);

    if config.cors_allowed_origins.is_empty() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors_allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}

pub async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let prometheus = PrometheusMetricsBuilder::new("cv_generator_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {e}"))?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(build_cors(&config))
            .wrap(Logger::default())
            .configure(cv::handlers::config)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind_addr)
    .context("failed to bind HTTP listener")?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
