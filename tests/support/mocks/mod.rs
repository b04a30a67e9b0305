
pub use article_repos::{FailingArticleRead, InMemoryArticleRead};
pub use time::FixedClock;
