use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parsing::{BlockNode, render};

/// Stable identifier of a post (e.g. `"b1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A blog post as supplied by the content source.
///
/// Fields are private so a post cannot change once constructed; the body is
/// kept as raw Markdown-like text and rendered on demand with [`Post::blocks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    title: String,
    date: String,
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
    content: String,
}

impl Post {
    pub fn new(
        id: impl Into<PostId>,
        title: impl Into<String>,
        date: impl Into<String>,
        summary: impl Into<String>,
        tags: Vec<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            summary: summary.into(),
            tags,
            content: content.into(),
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Raw Markdown-like body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The first `n` tags, as shown on a list card.
    pub fn preview_tags(&self, n: usize) -> &[String] {
        &self.tags[..n.min(self.tags.len())]
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Estimated reading time in whole minutes, never less than one.
    pub fn reading_minutes(&self, words_per_minute: u32) -> usize {
        let wpm = (words_per_minute as usize).max(1);
        self.word_count().div_ceil(wpm).max(1)
    }

    /// Renders the body into block nodes.
    pub fn blocks(&self) -> Vec<BlockNode> {
        render(&self.content)
    }
}
