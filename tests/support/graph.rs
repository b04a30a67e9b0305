// tests/support/graph.rs
use article_filters::domain::article::value_objects::{SOURCE_MOBILE, SOURCE_WEB, TAG_DEV};
use article_filters::domain::article::{
    Article, ArticlePredicate, ArticleStats, MobileCommentMatch,
};
use chrono::{Datelike, NaiveDate};

/// An article together with every related row the predicates look at.
#[derive(Debug, Clone)]
pub struct ArticleGraph {
    pub article: Article,
    pub author: AuthorSnapshot,
    pub tags: Vec<String>,
    pub comments: Vec<CommentSnapshot>,
    pub ratings: Vec<RatingSnapshot>,
}

#[derive(Debug, Clone)]
pub struct AuthorSnapshot {
    /// Whether the author row points at an info record at all.
    pub has_info: bool,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Number of articles written by this author, this one included.
    pub article_count: i64,
}

#[derive(Debug, Clone)]
pub struct CommentSnapshot {
    pub message: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RatingSnapshot {
    pub rate: Option<i32>,
    pub source: Option<String>,
}

fn has_source(source: Option<&str>, code: &str) -> bool {
    source == Some(code)
}

/// Whether `graph` passes `predicate`, evaluated in memory.
pub fn satisfies(predicate: &ArticlePredicate, graph: &ArticleGraph) -> bool {
    match predicate {
        ArticlePredicate::Identity => true,
        ArticlePredicate::AuthorWithoutPhone => graph.author.phone.is_none(),
        ArticlePredicate::CommentedAndRated => {
            graph.comments.iter().any(|c| c.message.is_some())
                && graph.ratings.iter().any(|r| r.rate.is_some())
        }
        ArticlePredicate::DevWithMobileComments(mode) => {
            let tagged = graph.tags.iter().any(|t| t == TAG_DEV);
            let mobile = |c: &CommentSnapshot| has_source(c.source.as_deref(), SOURCE_MOBILE);
            let comments_match = match mode {
                MobileCommentMatch::Any => graph.comments.iter().any(mobile),
                MobileCommentMatch::All => {
                    !graph.comments.is_empty() && graph.comments.iter().all(mobile)
                }
            };
            tagged && comments_match
        }
        ArticlePredicate::WebCommentedAndRated => {
            graph.comments.iter().any(|c| has_source(c.source.as_deref(), SOURCE_WEB))
                && graph.ratings.iter().any(|r| has_source(r.source.as_deref(), SOURCE_WEB))
        }
        ArticlePredicate::ProlificAuthor => {
            graph.author.article_count > ArticlePredicate::PROLIFIC_AUTHOR_THRESHOLD
        }
    }
}

pub fn stats_of(graph: &ArticleGraph, current_year: i32) -> ArticleStats {
    let comment_count = graph.comments.len() as i64;
    let rating_count = graph.ratings.len() as i64;

    let rates: Vec<f64> = graph
        .ratings
        .iter()
        .filter_map(|r| r.rate.map(f64::from))
        .collect();
    let average_rating = if rates.is_empty() {
        None
    } else {
        Some(rates.iter().sum::<f64>() / rates.len() as f64)
    };

    let mobile_comment_count = graph
        .comments
        .iter()
        .filter(|c| has_source(c.source.as_deref(), SOURCE_MOBILE))
        .count() as i64;

    let birth_year = graph.author.birth_date.map(|d| d.year());

    ArticleStats {
        comment_count,
        rating_count,
        average_rating,
        mobile_comment_count,
        author_age: birth_year.map(|year| current_year - year),
        author_age_at_publish: birth_year.map(|year| graph.article.publish_date.year() - year),
        activity_count: comment_count + rating_count,
    }
}
