use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// The fields of a listed article the repository view renders. Relevance
/// score and classification confidence are computed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    #[serde(default)]
    pub title_translated: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub journal_name: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub category: Option<CategorySummary>,
    #[serde(default)]
    pub impact_score: f64,
    #[serde(default)]
    pub classification_confidence: Option<f64>,
    #[serde(default)]
    pub highlighted: bool,
    #[serde(default)]
    pub feed_id: Option<i64>,
    #[serde(default)]
    pub feed_name: Option<String>,
    #[serde(default)]
    pub has_pdf: bool,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub authors: Vec<AuthorSummary>,
}

fn default_language() -> String {
    "en".into()
}
