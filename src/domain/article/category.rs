// src/domain/article/category.rs
use crate::domain::article::query::ArticleQuery;
use crate::domain::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of listing categories callers may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleCategory {
    /// `category_1`: the author's info record carries no phone number.
    AuthorWithoutPhone,
    /// `category_2`: some comment has a message and some rating has a rate.
    CommentedAndRated,
    /// `category_3`: tagged `dev` with mobile-sourced comments.
    DevWithMobileComments,
    /// `category_4`: at least one web comment and at least one web rating.
    WebCommentedAndRated,
    /// `category_5`: the author wrote more than two articles.
    ProlificAuthor,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 5] = [
        ArticleCategory::AuthorWithoutPhone,
        ArticleCategory::CommentedAndRated,
        ArticleCategory::DevWithMobileComments,
        ArticleCategory::WebCommentedAndRated,
        ArticleCategory::ProlificAuthor,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "category_1" => Some(Self::AuthorWithoutPhone),
            "category_2" => Some(Self::CommentedAndRated),
            "category_3" => Some(Self::DevWithMobileComments),
            "category_4" => Some(Self::WebCommentedAndRated),
            "category_5" => Some(Self::ProlificAuthor),
            _ => None,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::AuthorWithoutPhone => "category_1",
            Self::CommentedAndRated => "category_2",
            Self::DevWithMobileComments => "category_3",
            Self::WebCommentedAndRated => "category_4",
            Self::ProlificAuthor => "category_5",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// How `category_3` quantifies over an article's comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileCommentMatch {
    /// At least one comment is mobile-sourced.
    #[default]
    Any,
    /// The article has comments and every one of them is mobile-sourced.
    All,
}

impl FromStr for MobileCommentMatch {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "all" => Ok(Self::All),
            other => Err(DomainError::Validation(format!(
                "unknown mobile comment match mode: {other}"
            ))),
        }
    }
}

/// A single narrowing stage over the article collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticlePredicate {
    Identity,
    AuthorWithoutPhone,
    CommentedAndRated,
    DevWithMobileComments(MobileCommentMatch),
    WebCommentedAndRated,
    ProlificAuthor,
}

impl ArticlePredicate {
    /// Article count an author must exceed for `ProlificAuthor`.
    pub const PROLIFIC_AUTHOR_THRESHOLD: i64 = 2;

    /// Returns `query` narrowed by this predicate. `Identity` returns it as is.
    pub fn apply(self, query: ArticleQuery) -> ArticleQuery {
        match self {
            Self::Identity => query,
            other => query.filter(other),
        }
    }
}

/// Maps request tokens to predicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryResolver {
    mobile_match: MobileCommentMatch,
}

impl CategoryResolver {
    pub fn new(mobile_match: MobileCommentMatch) -> Self {
        Self { mobile_match }
    }

    pub fn mobile_match(&self) -> MobileCommentMatch {
        self.mobile_match
    }

    /// Unknown, blank and absent tokens resolve to [`ArticlePredicate::Identity`].
    pub fn resolve(&self, token: Option<&str>) -> ArticlePredicate {
        match token.and_then(|t| ArticleCategory::from_token(t.trim())) {
            Some(category) => self.predicate_for(category),
            None => ArticlePredicate::Identity,
        }
    }

    pub fn predicate_for(&self, category: ArticleCategory) -> ArticlePredicate {
        match category {
            ArticleCategory::AuthorWithoutPhone => ArticlePredicate::AuthorWithoutPhone,
            ArticleCategory::CommentedAndRated => ArticlePredicate::CommentedAndRated,
            ArticleCategory::DevWithMobileComments => {
                ArticlePredicate::DevWithMobileComments(self.mobile_match)
            }
            ArticleCategory::WebCommentedAndRated => ArticlePredicate::WebCommentedAndRated,
            ArticleCategory::ProlificAuthor => ArticlePredicate::ProlificAuthor,
        }
    }
}
