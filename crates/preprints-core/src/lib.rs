//! Core types and pure transforms for reviewed preprint listings.
//!
//! This crate provides:
//! - The upstream enhanced-article record model (EPP server, no content)
//! - Rich-text content rendering to HTML
//! - Author-line summarization
//! - Subject area slug mapping
//! - Date normalization
//! - The record → snippet transform and the outbound snippet model
//!
//! Nothing here does I/O; the HTTP service lives in `preprints-api`.

pub mod article;
pub mod author;
pub mod content;
pub mod date;
mod error;
pub mod snippet;
pub mod subject;

pub use article::{EnhancedArticle, ProcessedArticle};
pub use author::{Author, author_line};
pub use content::{Content, Node, render};
pub use date::normalize_date;
pub use error::{Error, Result};
pub use snippet::{STAGE_PUBLISHED, STATUS_REVIEWED, Snippet, SnippetList, to_snippet};
pub use subject::{Subject, map_subjects, subject_slug};
