// tests/support/builders.rs
use super::graph::{ArticleGraph, AuthorSnapshot, CommentSnapshot, RatingSnapshot};
use article_filters::domain::article::{Article, ArticleId, ArticleTitle, AuthorId};
use chrono::{NaiveDate, TimeZone, Utc};

pub struct AuthorFixture {
    has_info: bool,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
}

pub struct ArticleFixture {
    id: i64,
    author: usize,
    publish_year: i32,
    tags: Vec<String>,
    comments: Vec<CommentSnapshot>,
    ratings: Vec<RatingSnapshot>,
}

impl ArticleFixture {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn published_in(&mut self, year: i32) -> &mut Self {
        self.publish_year = year;
        self
    }

    pub fn tag(&mut self, code: &str) -> &mut Self {
        self.tags.push(code.to_string());
        self
    }

    pub fn comment(&mut self, message: Option<&str>, source: &str) -> &mut Self {
        self.comments.push(CommentSnapshot {
            message: message.map(str::to_string),
            source: Some(source.to_string()),
        });
        self
    }

    /// A comment whose source reference is null.
    pub fn unsourced_comment(&mut self, message: Option<&str>) -> &mut Self {
        self.comments.push(CommentSnapshot {
            message: message.map(str::to_string),
            source: None,
        });
        self
    }

    pub fn rating(&mut self, rate: Option<i32>, source: &str) -> &mut Self {
        self.ratings.push(RatingSnapshot {
            rate,
            source: Some(source.to_string()),
        });
        self
    }
}

/// Builds a small article world; author article counts are derived on
/// [`into_graphs`](Fixtures::into_graphs).
#[derive(Default)]
pub struct Fixtures {
    authors: Vec<AuthorFixture>,
    articles: Vec<ArticleFixture>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an author with an info record and returns its handle.
    pub fn author(&mut self, phone: Option<&str>, birth_year: i32) -> usize {
        self.authors.push(AuthorFixture {
            has_info: true,
            phone: phone.map(str::to_string),
            birth_date: NaiveDate::from_ymd_opt(birth_year, 1, 15),
        });
        self.authors.len() - 1
    }

    /// Adds an author with no info record at all.
    pub fn author_without_info(&mut self, birth_year: Option<i32>) -> usize {
        self.authors.push(AuthorFixture {
            has_info: false,
            phone: None,
            birth_date: birth_year.and_then(|year| NaiveDate::from_ymd_opt(year, 1, 15)),
        });
        self.authors.len() - 1
    }

    pub fn article(&mut self, author: usize) -> &mut ArticleFixture {
        let id = self.articles.len() as i64 + 1;
        self.articles.push(ArticleFixture {
            id,
            author,
            publish_year: 2020,
            tags: Vec::new(),
            comments: Vec::new(),
            ratings: Vec::new(),
        });
        self.articles.last_mut().unwrap()
    }

    pub fn into_graphs(self) -> Vec<ArticleGraph> {
        let Fixtures { authors, articles } = self;
        let counts: Vec<i64> = (0..authors.len())
            .map(|author| articles.iter().filter(|a| a.author == author).count() as i64)
            .collect();

        articles
            .into_iter()
            .map(|fixture| {
                let author = &authors[fixture.author];
                ArticleGraph {
                    article: Article {
                        id: ArticleId::new(fixture.id).unwrap(),
                        title: ArticleTitle::new(format!("article {}", fixture.id)),
                        author_id: AuthorId::new(fixture.author as i64 + 1).unwrap(),
                        publish_date: Utc
                            .with_ymd_and_hms(fixture.publish_year, 3, 1, 9, 0, 0)
                            .unwrap(),
                    },
                    author: AuthorSnapshot {
                        has_info: author.has_info,
                        phone: author.phone.clone(),
                        birth_date: author.birth_date,
                        article_count: counts[fixture.author],
                    },
                    tags: fixture.tags,
                    comments: fixture.comments,
                    ratings: fixture.ratings,
                }
            })
            .collect()
    }
}
