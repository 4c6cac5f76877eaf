use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Where an article was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Journal,
    Portal,
}

impl SourceType {
    pub const ALL: [SourceType; 2] = [SourceType::Journal, SourceType::Portal];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Journal => "journal",
            SourceType::Portal => "portal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceType::Journal => "Periódico científico",
            SourceType::Portal => "Portal / Blog",
        }
    }
}

impl FromStr for SourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journal" => Ok(SourceType::Journal),
            "portal" => Ok(SourceType::Portal),
            other => Err(DomainError::validation(format!(
                "unknown source type: {other}"
            ))),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    PublicationDate,
    Title,
    ImpactScore,
    ViewCount,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::PublicationDate => "publication_date",
            SortBy::Title => "title",
            SortBy::ImpactScore => "impact_score",
            SortBy::ViewCount => "view_count",
        }
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publication_date" => Ok(SortBy::PublicationDate),
            "title" => Ok(SortBy::Title),
            "impact_score" => Ok(SortBy::ImpactScore),
            "view_count" => Ok(SortBy::ViewCount),
            other => Err(DomainError::validation(format!("unknown sort field: {other}"))),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DomainError::validation(format!("unknown sort order: {other}"))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("category id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedId(i64);

impl FeedId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("feed id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<FeedId> for i64 {
    fn from(value: FeedId) -> Self {
        value.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short free-form language code such as `pt`, `en` or `other`.
///
/// The comma is reserved as the list delimiter of the location codec, so a
/// code can never contain one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const OTHER: &'static str = "other";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("language code cannot be empty"));
        }
        if trimmed.contains(',') {
            return Err(DomainError::validation(
                "language code cannot contain a comma",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &str {
        match self.0.as_str() {
            "pt" => "Português",
            "en" => "Inglês",
            "es" => "Espanhol",
            "other" => "Outros",
            code => code,
        }
    }

    /// Client-side language match used because the backend has no language
    /// parameter. `other` matches every article.
    pub fn matches(&self, article_language: &str) -> bool {
        let article_language = article_language.to_lowercase();
        match self.0.as_str() {
            Self::OTHER => true,
            code => article_language.starts_with(&code.to_lowercase()),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
