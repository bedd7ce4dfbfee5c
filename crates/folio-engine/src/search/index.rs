use std::collections::{BTreeSet, HashSet};

use crate::models::{Post, PostId};

use super::FilterState;

/// Sorted, de-duplicated tags of every post (case-sensitive byte order).
pub fn tag_universe(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// An ordered post collection together with its tag universe.
///
/// The tag universe is derived from the full collection, so filtering never
/// shrinks it; it is recomputed only when the collection is replaced.
#[derive(Debug, Clone, Default)]
pub struct PostIndex {
    posts: Vec<Post>,
    tags: Vec<String>,
}

impl PostIndex {
    /// Builds an index; posts with an id seen earlier are skipped.
    pub fn new(posts: Vec<Post>) -> Self {
        let mut seen = HashSet::new();
        let posts: Vec<Post> = posts
            .into_iter()
            .filter(|post| {
                let fresh = seen.insert(post.id().clone());
                if !fresh {
                    log::warn!("skipping post with duplicate id '{}'", post.id());
                }
                fresh
            })
            .collect();
        let tags = tag_universe(&posts);
        log::debug!("indexed {} posts with {} tags", posts.len(), tags.len());
        Self { posts, tags }
    }

    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        *self = Self::new(posts);
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == id)
    }

    pub fn filter(&self, state: &FilterState) -> Vec<&Post> {
        state.apply(&self.posts)
    }
}
