// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleDto, ArticleStatsDto},
    queries::articles::{ListArticleStatsQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// One of `category_1` .. `category_5`. Anything else lists every article.
    #[serde(default)]
    #[param(example = "category_1")]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles in the requested category.", body = [ArticleDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            category: params.category,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/stats",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles in the requested category with activity statistics.", body = [ArticleStatsDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_article_stats(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleStatsDto>>> {
    state
        .services
        .article_queries
        .list_article_stats(ListArticleStatsQuery {
            category: params.category,
        })
        .await
        .into_http()
        .map(Json)
}
