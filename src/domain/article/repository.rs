// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleWithStats};
use crate::domain::article::query::ArticleQuery;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Materialises `query`, ordered by article id.
    async fn list(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>>;

    /// Like [`list`](Self::list), with each row carrying its statistics.
    /// Ages are computed against `reference_year`.
    async fn list_with_stats(
        &self,
        query: &ArticleQuery,
        reference_year: i32,
    ) -> DomainResult<Vec<ArticleWithStats>>;
}
