// src/handlers.rs
use crate::{AppState, errors::DesignError, models::*};
use actix_web::{HttpResponse, web};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSuggestionsRequest {
    pub widgets: Option<Vec<Widget>>,
    pub canvas_size: Option<Canvas>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_type: ProjectType,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemesRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_type: ProjectType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub existing_colors: ExistingColors,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_type: ProjectType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_fonts: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct ContrastRequest {
    pub foreground: Color,
    pub background: Color,
}

#[derive(Debug, Serialize)]
struct Envelope<T> {
    success: bool,
    data: T,
}

fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope {
        success: true,
        data,
    })
}

pub async fn layout_suggestions(
    data: web::Data<AppState>,
    body: web::Json<LayoutSuggestionsRequest>,
) -> Result<HttpResponse, DesignError> {
    let request = body.into_inner();
    let (widgets, canvas) = match (request.widgets, request.canvas_size) {
        (Some(widgets), Some(canvas)) => (widgets, canvas),
        _ => {
            return Err(DesignError::Validation(
                "Widgets and canvas size are required".to_string(),
            ));
        }
    };

    let suggestions = data
        .advisor
        .layout_suggestions(&widgets, &canvas, request.project_type);

    Ok(ok(suggestions))
}

pub async fn color_schemes(
    data: web::Data<AppState>,
    body: web::Json<ColorSchemesRequest>,
) -> Result<HttpResponse, DesignError> {
    let request = body.into_inner();
    let schemes = data
        .advisor
        .color_scheme_suggestions(request.project_type, &request.existing_colors);

    Ok(ok(schemes))
}

pub async fn typography(
    data: web::Data<AppState>,
    body: web::Json<TypographyRequest>,
) -> Result<HttpResponse, DesignError> {
    let request = body.into_inner();
    let typography = data
        .advisor
        .typography_suggestions(request.project_type, &request.current_fonts);

    Ok(ok(typography))
}

pub async fn contrast(
    data: web::Data<AppState>,
    body: web::Json<ContrastRequest>,
) -> Result<HttpResponse, DesignError> {
    let request = body.into_inner();
    Ok(ok(data.advisor.contrast(request.foreground, request.background)))
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Route table shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        DesignError::Validation(err.to_string()).into()
    });

    cfg.app_data(json_config)
        .service(
            web::scope("/api/ui-design")
                .route("/layout-suggestions", web::post().to(layout_suggestions))
                .route("/color-schemes", web::post().to(color_schemes))
                .route("/typography", web::post().to(typography))
                .route("/contrast", web::post().to(contrast)),
        )
        .route("/health", web::get().to(health_check));
}
