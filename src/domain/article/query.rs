// src/domain/article/query.rs
use crate::domain::article::category::ArticlePredicate;

/// Immutable description of an article listing.
///
/// Starts as "all articles" and gains one filter stage per applied
/// predicate. Stages are conjunctive and kept in application order; the
/// repository renders and executes the whole description once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    filters: Vec<ArticlePredicate>,
}

impl ArticleQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn filter(mut self, predicate: ArticlePredicate) -> Self {
        if predicate != ArticlePredicate::Identity {
            self.filters.push(predicate);
        }
        self
    }

    pub fn filters(&self) -> &[ArticlePredicate] {
        &self.filters
    }

    pub fn is_unfiltered(&self) -> bool {
        self.filters.is_empty()
    }
}
