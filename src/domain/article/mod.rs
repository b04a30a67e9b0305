pub mod category;
pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use category::{ArticleCategory, ArticlePredicate, CategoryResolver, MobileCommentMatch};
pub use entity::{Article, ArticleStats, ArticleWithStats};
pub use query::ArticleQuery;
pub use repository::ArticleReadRepository;
pub use value_objects::{ArticleId, ArticleTitle, AuthorId};
