// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, AuthorId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author_id: AuthorId,
    pub publish_date: DateTime<Utc>,
}

/// Per-article aggregates of the statistics listing.
///
/// `author_age` and `author_age_at_publish` are `None` when the author has no
/// recorded date of birth; `average_rating` is `None` when no rating carries a
/// rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleStats {
    pub comment_count: i64,
    pub rating_count: i64,
    pub average_rating: Option<f64>,
    pub mobile_comment_count: i64,
    pub author_age: Option<i32>,
    pub author_age_at_publish: Option<i32>,
    pub activity_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleWithStats {
    pub article: Article,
    pub stats: ArticleStats,
}
