use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub category: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let article_query = self.build_query(query.category.as_deref());
        let records = self.read_repo.list(&article_query).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
