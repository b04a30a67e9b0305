use super::ArticleQueryService;
use crate::application::{dto::ArticleStatsDto, error::ApplicationResult};

#[derive(Debug, Default)]
pub struct ListArticleStatsQuery {
    pub category: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_article_stats(
        &self,
        query: ListArticleStatsQuery,
    ) -> ApplicationResult<Vec<ArticleStatsDto>> {
        let article_query = self.build_query(query.category.as_deref());
        let reference_year = self.clock.current_year();
        let records = self
            .read_repo
            .list_with_stats(&article_query, reference_year)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
