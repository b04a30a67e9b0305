// src/presentation/http/openapi.rs
use crate::domain::article::ArticleCategory;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    RefOr, Schema,
    schema::{ObjectBuilder, Type},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::list_article_stats,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleStatsDto
        )
    ),
    tags(
        (name = "Articles", description = "Category-filtered article listings"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&CategoryEnumCustomizer),
    info(
        title = "Article Filters API",
        description = "Article listings filtered by fixed categories",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Publishes the recognised category tokens as a named schema.
struct CategoryEnumCustomizer;

impl Modify for CategoryEnumCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let tokens: Vec<&str> = ArticleCategory::ALL.iter().map(|c| c.as_token()).collect();
        let schema = ObjectBuilder::new()
            .schema_type(Type::String)
            .enum_values(Some(tokens))
            .description(Some(
                "Recognised category tokens. Any other value lists every article.",
            ))
            .build();

        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components
            .schemas
            .insert("ArticleCategory".into(), RefOr::T(Schema::Object(schema)));
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
