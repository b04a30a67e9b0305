// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::value_objects::{SOURCE_MOBILE, SOURCE_WEB, TAG_DEV};
use crate::domain::article::{
    Article, ArticleId, ArticlePredicate, ArticleQuery, ArticleReadRepository, ArticleStats,
    ArticleTitle, ArticleWithStats, AuthorId, MobileCommentMatch,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Casts pin the decoded types, so int4 ids and `date` publish dates load too.
const ARTICLE_COLUMNS: &str = "a.id::int8 AS id, a.title::text AS title, \
     a.author_id::int8 AS author_id, a.publish_date::timestamptz AS publish_date";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    author_id: i64,
    publish_date: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title),
            author_id: AuthorId::new(row.author_id)?,
            publish_date: row.publish_date,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleStatsRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    #[sqlx(rename = "stats_comment_count")]
    comment_count: i64,
    #[sqlx(rename = "stats_rating_count")]
    rating_count: i64,
    #[sqlx(rename = "stats_average_rating")]
    average_rating: Option<f64>,
    #[sqlx(rename = "stats_mobile_comment_count")]
    mobile_comment_count: i64,
    #[sqlx(rename = "stats_author_age")]
    author_age: Option<i32>,
    #[sqlx(rename = "stats_author_age_at_publish")]
    author_age_at_publish: Option<i32>,
    #[sqlx(rename = "stats_activity_count")]
    activity_count: i64,
}

impl TryFrom<ArticleStatsRow> for ArticleWithStats {
    type Error = DomainError;

    fn try_from(row: ArticleStatsRow) -> Result<Self, Self::Error> {
        Ok(ArticleWithStats {
            article: Article::try_from(row.article)?,
            stats: ArticleStats {
                comment_count: row.comment_count,
                rating_count: row.rating_count,
                average_rating: row.average_rating,
                mobile_comment_count: row.mobile_comment_count,
                author_age: row.author_age,
                author_age_at_publish: row.author_age_at_publish,
                activity_count: row.activity_count,
            },
        })
    }
}

impl PostgresArticleReadRepository {
    fn build_list(query: &ArticleQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles a");
        Self::apply_filters(&mut builder, query);
        builder.push(" ORDER BY a.id");
        builder
    }

    /// Stats aggregates come from per-article lateral subqueries so the
    /// comment and rating counts never multiply each other.
    fn build_list_with_stats(
        query: &ArticleQuery,
        reference_year: i32,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(
            ", stats_comments.total AS stats_comment_count\
             , stats_ratings.total AS stats_rating_count\
             , stats_ratings.average AS stats_average_rating\
             , stats_comments.mobile AS stats_mobile_comment_count\
             , (",
        );
        builder.push_bind(reference_year);
        builder.push(
            "::int4 - EXTRACT(YEAR FROM stats_author.dob)::int4) AS stats_author_age\
             , (EXTRACT(YEAR FROM a.publish_date)::int4 - EXTRACT(YEAR FROM stats_author.dob)::int4) AS stats_author_age_at_publish\
             , stats_comments.total + stats_ratings.total AS stats_activity_count \
             FROM articles a \
             LEFT JOIN authors stats_author ON stats_author.id = a.author_id \
             CROSS JOIN LATERAL (\
             SELECT COUNT(*) AS total, COUNT(*) FILTER (WHERE s.code = ",
        );
        builder.push_bind(SOURCE_MOBILE);
        builder.push(
            ") AS mobile \
             FROM comments c LEFT JOIN sources s ON s.id = c.source_id \
             WHERE c.article_id = a.id) AS stats_comments \
             CROSS JOIN LATERAL (\
             SELECT COUNT(*) AS total, AVG(r.rate)::float8 AS average \
             FROM ratings r WHERE r.article_id = a.id) AS stats_ratings",
        );
        Self::apply_filters(&mut builder, query);
        builder.push(" ORDER BY a.id");
        builder
    }

    /// Count-based stages join their own lateral aggregates, aliased under a
    /// per-stage `f{n}_` prefix; existence stages render as EXISTS
    /// subqueries, which never fan out the article row.
    fn apply_filters(builder: &mut QueryBuilder<'static, Postgres>, query: &ArticleQuery) {
        for (index, predicate) in query.filters().iter().enumerate() {
            Self::push_stage_joins(builder, &stage_alias(index), predicate);
        }

        for (index, predicate) in query.filters().iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            Self::push_stage_condition(builder, &stage_alias(index), predicate);
        }
    }

    fn push_stage_joins(
        builder: &mut QueryBuilder<'static, Postgres>,
        ns: &str,
        predicate: &ArticlePredicate,
    ) {
        match predicate {
            ArticlePredicate::WebCommentedAndRated => {
                builder.push(
                    " CROSS JOIN LATERAL (SELECT COUNT(*) AS total FROM comments fc \
                     JOIN sources fs ON fs.id = fc.source_id \
                     WHERE fc.article_id = a.id AND fs.code = ",
                );
                builder.push_bind(SOURCE_WEB);
                builder.push(format_args!(") AS {ns}_web_comments"));
                builder.push(
                    " CROSS JOIN LATERAL (SELECT COUNT(*) AS total FROM ratings fr \
                     JOIN sources fs ON fs.id = fr.source_id \
                     WHERE fr.article_id = a.id AND fs.code = ",
                );
                builder.push_bind(SOURCE_WEB);
                builder.push(format_args!(") AS {ns}_web_ratings"));
            }
            ArticlePredicate::ProlificAuthor => {
                builder.push(format_args!(
                    " CROSS JOIN LATERAL (SELECT COUNT(*) AS total FROM articles fa \
                     WHERE fa.author_id = a.author_id) AS {ns}_author_articles"
                ));
            }
            _ => {}
        }
    }

    fn push_stage_condition(
        builder: &mut QueryBuilder<'static, Postgres>,
        ns: &str,
        predicate: &ArticlePredicate,
    ) {
        match predicate {
            ArticlePredicate::Identity => {
                builder.push("TRUE");
            }
            ArticlePredicate::AuthorWithoutPhone => {
                builder.push(
                    "NOT EXISTS (SELECT 1 FROM authors fau \
                     JOIN author_infos fi ON fi.id = fau.info_id \
                     WHERE fau.id = a.author_id AND fi.phone IS NOT NULL)",
                );
            }
            ArticlePredicate::CommentedAndRated => {
                builder.push(
                    "EXISTS (SELECT 1 FROM comments fc \
                     WHERE fc.article_id = a.id AND fc.message IS NOT NULL) \
                     AND EXISTS (SELECT 1 FROM ratings fr \
                     WHERE fr.article_id = a.id AND fr.rate IS NOT NULL)",
                );
            }
            ArticlePredicate::DevWithMobileComments(mode) => {
                builder.push(
                    "EXISTS (SELECT 1 FROM article_tags fat \
                     JOIN tags ft ON ft.id = fat.tag_id \
                     WHERE fat.article_id = a.id AND ft.code = ",
                );
                builder.push_bind(TAG_DEV);
                builder.push(")");
                match mode {
                    MobileCommentMatch::Any => {
                        builder.push(
                            " AND EXISTS (SELECT 1 FROM comments fc \
                             JOIN sources fs ON fs.id = fc.source_id \
                             WHERE fc.article_id = a.id AND fs.code = ",
                        );
                        builder.push_bind(SOURCE_MOBILE);
                        builder.push(")");
                    }
                    MobileCommentMatch::All => {
                        builder.push(
                            " AND EXISTS (SELECT 1 FROM comments fc WHERE fc.article_id = a.id) \
                             AND NOT EXISTS (SELECT 1 FROM comments fc \
                             LEFT JOIN sources fs ON fs.id = fc.source_id \
                             WHERE fc.article_id = a.id AND fs.code IS DISTINCT FROM ",
                        );
                        builder.push_bind(SOURCE_MOBILE);
                        builder.push(")");
                    }
                }
            }
            ArticlePredicate::WebCommentedAndRated => {
                builder.push(format_args!(
                    "{ns}_web_comments.total >= 1 AND {ns}_web_ratings.total >= 1"
                ));
            }
            ArticlePredicate::ProlificAuthor => {
                builder.push(format_args!("{ns}_author_articles.total > "));
                builder.push_bind(ArticlePredicate::PROLIFIC_AUTHOR_THRESHOLD);
            }
        }
    }
}

fn stage_alias(index: usize) -> String {
    format!("f{index}")
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        let mut builder = Self::build_list(query);
        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::debug!(rows = rows.len(), stages = query.filters().len(), "listed articles");

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_with_stats(
        &self,
        query: &ArticleQuery,
        reference_year: i32,
    ) -> DomainResult<Vec<ArticleWithStats>> {
        let mut builder = Self::build_list_with_stats(query, reference_year);
        let rows = builder
            .build_query_as::<ArticleStatsRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::debug!(
            rows = rows.len(),
            stages = query.filters().len(),
            reference_year,
            "listed article stats"
        );

        rows.into_iter().map(ArticleWithStats::try_from).collect()
    }
}
