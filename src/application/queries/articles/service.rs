use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::article::{ArticleQuery, ArticleReadRepository, CategoryResolver},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) resolver: CategoryResolver,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        resolver: CategoryResolver,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            resolver,
            clock,
        }
    }

    /// Builds the query for `category`, falling back to every article when the
    /// token is absent or unrecognised.
    pub(super) fn build_query(&self, category: Option<&str>) -> ArticleQuery {
        let predicate = self.resolver.resolve(category);
        tracing::debug!(
            category = category.unwrap_or_default(),
            ?predicate,
            "resolved article category"
        );
        predicate.apply(ArticleQuery::all())
    }
}
