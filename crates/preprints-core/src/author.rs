//! Author model and author-line summarization.

use serde::{Deserialize, Deserializer, Serialize};

/// Separator used when the author list has been elided.
const ELLIPSIS: &str = " ... ";

/// Separator between displayed authors.
const COMMA: &str = ", ";

/// An author as delivered by the upstream service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub given_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub family_names: Vec<String>,
}

/// A missing or `null` name list is an empty one.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Author {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new<G, F>(given_names: G, family_names: F) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            given_names: given_names.into_iter().map(Into::into).collect(),
            family_names: family_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Full display name: given names, then family names, space separated.
    pub fn display_name(&self) -> String {
        let given = self.given_names.join(" ");
        if self.family_names.is_empty() {
            return given;
        }
        let family = self.family_names.join(" ");
        if given.is_empty() {
            family
        } else {
            format!("{given} {family}")
        }
    }
}

/// Compress an author list into a short display line.
///
/// At most three names are shown: the first two, plus the last author when
/// there are three or more. Lists longer than three are elided with `...`.
/// Returns `None` for an empty list.
pub fn author_line(authors: &[Author]) -> Option<String> {
    let (first, rest) = authors.split_first()?;

    let mut line = first.display_name();
    if let Some(second) = rest.first() {
        line.push_str(COMMA);
        line.push_str(&second.display_name());
    }

    if authors.len() >= 3 {
        let last = authors.last()?;
        line.push_str(if authors.len() > 3 { ELLIPSIS } else { COMMA });
        line.push_str(&last.display_name());
    }

    Some(line)
}
