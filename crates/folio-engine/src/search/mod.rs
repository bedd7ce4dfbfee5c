//! # Post Search
//!
//! Free-text and tag filtering over an ordered post collection.
//!
//! - **`filter`**: the stable filter itself
//! - **`FilterState`**: query + selected tag as held by the view layer
//! - **`PostIndex`**: owns the collection and its tag universe

mod index;
mod state;

pub use index::{PostIndex, tag_universe};
pub use state::FilterState;

use crate::models::Post;

/// Returns the posts matching `query` and `tag`, in collection order.
///
/// A post matches when the query is empty or is a case-insensitive substring
/// of its title or summary, and when no tag is given or the post carries the
/// tag exactly.
pub fn filter<'a>(posts: &'a [Post], query: &str, tag: Option<&str>) -> Vec<&'a Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_query(post, &needle) && tag.is_none_or(|t| post.has_tag(t)))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(post: &Post, needle: &str) -> bool {
    needle.is_empty()
        || post.title().to_lowercase().contains(needle)
        || post.summary().to_lowercase().contains(needle)
}
