// tests/support/builders.rs
use search_sync::application::dto::{
    ArticleSummary, CategoryDto, FeedDto, Page, SearchResultPage,
};
use serde_json::json;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    language: String,
    feed_id: Option<i64>,
    has_pdf: bool,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Artigo {id}"),
            language: "pt".into(),
            feed_id: None,
            has_pdf: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn feed(mut self, feed_id: i64) -> Self {
        self.feed_id = Some(feed_id);
        self
    }

    pub fn with_pdf(mut self) -> Self {
        self.has_pdf = true;
        self
    }

    pub fn build(self) -> ArticleSummary {
        serde_json::from_value(json!({
            "id": self.id,
            "title": self.title,
            "language": self.language,
            "feed_id": self.feed_id,
            "has_pdf": self.has_pdf,
            "impact_score": 1.5,
        }))
        .expect("article fixture")
    }
}

pub fn article(id: i64) -> ArticleSummary {
    ArticleBuilder::new(id).build()
}

pub fn result_page(items: Vec<ArticleSummary>, total: u64, page: u32) -> SearchResultPage {
    Page::new(items, total, page, 20)
}

pub fn category(id: i64, name: &str) -> CategoryDto {
    CategoryDto {
        id,
        name: name.into(),
        slug: None,
    }
}

pub fn feed(id: i64, name: &str) -> FeedDto {
    FeedDto {
        id,
        name: name.into(),
        website_url: None,
    }
}
