//! # Blog View Controller
//!
//! Holds which post is open and the current filter, and answers what the
//! presentation layer should show. One level of navigation only: a list, or a
//! single post opened from it.

use crate::{
    models::{Post, PostId},
    search::{FilterState, PostIndex},
};

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Listing,
    Reading,
}

#[derive(Debug, Clone, Default)]
pub struct BlogView {
    index: PostIndex,
    filter: FilterState,
    active_post: Option<PostId>,
}

impl BlogView {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            index: PostIndex::new(posts),
            filter: FilterState::new(),
            active_post: None,
        }
    }

    pub fn state(&self) -> ViewState {
        if self.active_post.is_some() {
            ViewState::Reading
        } else {
            ViewState::Listing
        }
    }

    pub fn index(&self) -> &PostIndex {
        &self.index
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Tag universe of the whole collection, independent of the filter.
    pub fn tags(&self) -> &[String] {
        self.index.tags()
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.index.filter(&self.filter)
    }

    /// True when the filter hides every post; the list should then offer to
    /// clear the filters.
    pub fn is_empty_result(&self) -> bool {
        self.visible_posts().is_empty()
    }

    pub fn active_post(&self) -> Option<&Post> {
        self.active_post.as_ref().and_then(|id| self.index.get(id))
    }

    /// Opens a post. Unknown ids leave the view unchanged and return `false`.
    pub fn select(&mut self, id: &PostId) -> bool {
        if self.index.get(id).is_none() {
            log::debug!("ignoring selection of unknown post '{id}'");
            return false;
        }
        self.active_post = Some(id.clone());
        true
    }

    /// Opens the `position`-th post of the current filtered list.
    pub fn select_visible(&mut self, position: usize) -> bool {
        let id = match self.visible_posts().get(position) {
            Some(post) => post.id().clone(),
            None => return false,
        };
        self.select(&id)
    }

    /// Returns to the list; the filter is kept.
    pub fn back(&mut self) {
        self.active_post = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn push_query_char(&mut self, c: char) {
        self.filter.push_query_char(c);
    }

    pub fn pop_query_char(&mut self) {
        self.filter.pop_query_char();
    }

    pub fn clear_query(&mut self) {
        self.filter.clear_query();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
    }

    /// The "All" choice of the tag bar: clears the tag only.
    pub fn show_all_tags(&mut self) {
        self.filter.clear_tag();
    }

    /// Resets query and tag together.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Replaces the collection. An open post that no longer exists is closed.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.index.replace_posts(posts);
        if self.active_post().is_none() {
            self.active_post = None;
        }
    }
}
