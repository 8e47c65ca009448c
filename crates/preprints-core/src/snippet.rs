//! Reviewed-preprint snippets: the public list representation of a record.

use serde::Serialize;

use crate::article::EnhancedArticle;
use crate::author::author_line;
use crate::content::render;
use crate::date::normalize_date;
use crate::error::{Error, Result};
use crate::subject::{Subject, map_subjects};

/// Status of every record this service lists.
pub const STATUS_REVIEWED: &str = "reviewed";

/// Stage of every record this service lists.
pub const STAGE_PUBLISHED: &str = "published";

/// Condensed public view of one reviewed preprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub doi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_line: Option<String>,
    /// Title rendered to HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_date: Option<String>,
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<Subject>>,
}

/// A page of snippets plus the upstream total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetList {
    pub total: u64,
    pub items: Vec<Snippet>,
}

impl TryFrom<&EnhancedArticle> for Snippet {
    type Error = Error;

    fn try_from(record: &EnhancedArticle) -> Result<Self> {
        to_snippet(record)
    }
}

/// Build the snippet for one upstream record.
///
/// Fails when the record has no `published` timestamp, since version and
/// status dates are derived from it.
pub fn to_snippet(record: &EnhancedArticle) -> Result<Snippet> {
    let published = record.published.ok_or_else(|| Error::MissingPublished {
        msid: record.msid.clone(),
    })?;

    let first_published = normalize_date(&record.first_published);
    let version_date = normalize_date(&published);

    let title = render(record.article.title.as_ref());
    let authors = record.article.authors.as_deref().unwrap_or_default();
    let subjects = record.subjects.as_deref().unwrap_or_default();

    Ok(Snippet {
        id: record.msid.clone(),
        doi: record.preprint_doi.clone(),
        pdf: record.pdf_url.clone(),
        status: STATUS_REVIEWED,
        author_line: author_line(authors),
        title: (!title.is_empty()).then_some(title),
        published: Some(first_published.clone()),
        reviewed_date: Some(first_published),
        version_date: Some(version_date.clone()),
        status_date: Some(version_date),
        stage: STAGE_PUBLISHED,
        subjects: Some(map_subjects(subjects)),
    })
}
