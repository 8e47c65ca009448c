//! Enhanced article records as served by the EPP server, without body content.
//!
//! Only the fields this service reads are typed strictly. Blocks we pass over
//! (licenses, headings, references, related content) are kept as raw JSON so
//! schema drift upstream doesn't break listing.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::author::Author;
use crate::content::Content;

/// One enhanced article record, as listed by the upstream service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedArticle {
    /// Upstream internal id (manuscript id plus version).
    #[serde(default)]
    pub id: String,
    /// Manuscript id.
    pub msid: String,
    #[serde(default)]
    pub doi: String,
    #[serde(default)]
    pub version_identifier: Option<String>,
    #[serde(default)]
    pub version_doi: Option<String>,
    pub preprint_doi: String,
    #[serde(default)]
    pub preprint_url: Option<String>,
    #[serde(default)]
    pub preprint_posted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sent_for_review: Option<DateTime<Utc>>,
    /// Publication of this version. Nullable upstream.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub e_location_id: Option<String>,
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub related_content: Option<Vec<serde_json::Value>>,
    pub article: ProcessedArticle,
    /// First publication of any version of this manuscript.
    pub first_published: DateTime<Utc>,
}

/// The processed article block of an enhanced article.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedArticle {
    #[serde(default)]
    pub title: Option<Content>,
    #[serde(default)]
    pub authors: Option<Vec<Author>>,
    #[serde(default, rename = "abstract")]
    pub abstract_: Option<Content>,
    #[serde(default)]
    pub licenses: Vec<serde_json::Value>,
    #[serde(default)]
    pub headings: Vec<serde_json::Value>,
    #[serde(default)]
    pub references: Vec<serde_json::Value>,
}

impl EnhancedArticle {
    /// Parse a JSON array of records.
    pub fn list_from_json(body: &str) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_str(body)?)
    }
}
