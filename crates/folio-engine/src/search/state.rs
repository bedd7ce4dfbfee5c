use crate::models::Post;

/// Current search query and selected tag.
///
/// Owned by the view layer and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    tag: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Clears the query, keeping the tag.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.tag = Some(tag.into());
    }

    /// Selects `tag`, or deselects it when it is already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.tag() == Some(tag) {
            self.tag = None;
        } else {
            self.tag = Some(tag.to_string());
        }
    }

    /// Clears the tag, keeping the query.
    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    /// Resets both query and tag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.tag.is_some()
    }

    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        super::filter(posts, &self.query, self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_tag_deselects_the_selected_tag() {
        let mut state = FilterState::new();
        state.toggle_tag("R");
        assert_eq!(state.tag(), Some("R"));
        state.toggle_tag("Linux");
        assert_eq!(state.tag(), Some("Linux"));
        state.toggle_tag("Linux");
        assert_eq!(state.tag(), None);
    }

    #[test]
    fn clearing_one_part_keeps_the_other() {
        let mut state = FilterState::new();
        state.set_query("cdm");
        state.select_tag("R");

        state.clear_query();
        assert_eq!(state.query(), "");
        assert_eq!(state.tag(), Some("R"));

        state.set_query("cdm");
        state.clear_tag();
        assert_eq!(state.query(), "cdm");
        assert!(state.is_active());

        state.clear();
        assert!(!state.is_active());
    }

    #[test]
    fn query_editing() {
        let mut state = FilterState::new();
        for c in "linx".chars() {
            state.push_query_char(c);
        }
        state.pop_query_char();
        state.push_query_char('u');
        assert_eq!(state.query(), "linu");
    }
}
