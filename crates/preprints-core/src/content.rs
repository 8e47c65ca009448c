//! Rich-text content model and HTML rendering.
//!
//! Upstream titles (and similar fields) arrive as a small recursive document
//! model: a plain string, an array of content, or a tagged node such as
//! `{"type": "Emphasis", "content": "..."}`. Rendering maps each tagged node
//! onto its inline HTML element.
//!
//! Text is emitted verbatim. The upstream service pre-sanitizes content, so
//! no escaping happens here.

use serde::Deserialize;

/// A fragment of rich-text content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text leaf.
    Text(String),
    /// Ordered sequence of fragments, rendered back to back.
    Sequence(Vec<Content>),
    /// A tagged inline or block node.
    Node(Node),
    /// Any other JSON shape. Renders as nothing.
    Other(serde_json::Value),
}

/// A tagged content node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Paragraph {
        #[serde(default)]
        content: Option<Box<Content>>,
    },
    Emphasis {
        #[serde(default)]
        content: Option<Box<Content>>,
    },
    Strong {
        #[serde(default)]
        content: Option<Box<Content>>,
    },
    NontextualAnnotation {
        #[serde(default)]
        content: Option<Box<Content>>,
    },
    Superscript {
        #[serde(default)]
        content: Option<Box<Content>>,
    },
    Subscript {
        #[serde(default)]
        content: Option<Box<Content>>,
    },
    /// A node type we don't know how to render.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// HTML tag name and inner content, or `None` for unknown nodes.
    fn parts(&self) -> Option<(&'static str, Option<&Content>)> {
        let (tag, content) = match self {
            Self::Paragraph { content } => ("p", content),
            Self::Emphasis { content } => ("em", content),
            Self::Strong { content } => ("strong", content),
            Self::NontextualAnnotation { content } => ("u", content),
            Self::Superscript { content } => ("sup", content),
            Self::Subscript { content } => ("sub", content),
            Self::Unknown => return None,
        };
        Some((tag, content.as_deref()))
    }
}

/// Render optional content to an HTML string. Absent content renders empty.
pub fn render(content: Option<&Content>) -> String {
    let mut out = String::new();
    if let Some(content) = content {
        render_into(content, &mut out);
    }
    out
}

fn render_into(content: &Content, out: &mut String) {
    match content {
        Content::Text(text) => out.push_str(text),
        Content::Sequence(items) => {
            for item in items {
                render_into(item, out);
            }
        }
        Content::Node(node) => {
            if let Some((tag, inner)) = node.parts() {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                if let Some(inner) = inner {
                    render_into(inner, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Content::Other(_) => {}
    }
}
