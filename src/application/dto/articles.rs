use crate::domain::article::{Article, ArticleWithStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub publish_date: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            author_id: article.author_id.into(),
            publish_date: article.publish_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleStatsDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub comment_count: i64,
    pub rating_count: i64,
    pub average_rating: Option<f64>,
    pub mobile_comment_count: i64,
    pub author_age: Option<i32>,
    pub author_age_at_publish: Option<i32>,
    pub activity_count: i64,
}

impl From<ArticleWithStats> for ArticleStatsDto {
    fn from(row: ArticleWithStats) -> Self {
        let ArticleWithStats { article, stats } = row;
        Self {
            article: article.into(),
            comment_count: stats.comment_count,
            rating_count: stats.rating_count,
            average_rating: stats.average_rating,
            mobile_comment_count: stats.mobile_comment_count,
            author_age: stats.author_age,
            author_age_at_publish: stats.author_age_at_publish,
            activity_count: stats.activity_count,
        }
    }
}
