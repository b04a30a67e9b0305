mod list;
mod service;
mod stats;

pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
pub use stats::ListArticleStatsQuery;
