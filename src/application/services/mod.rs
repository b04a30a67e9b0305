// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, queries::articles::ArticleQueryService},
    domain::article::{ArticleReadRepository, CategoryResolver},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        resolver: CategoryResolver,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            resolver,
            Arc::clone(&clock),
        ));

        Self { article_queries }
    }
}
