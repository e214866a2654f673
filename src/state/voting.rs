//! Voting view state.
//!
//! Everything the voting view remembers between key presses, grouped in one
//! serializable value. The list itself is kept outside so the derived page
//! can always be recomputed from `(ideas, search_text, current_page)`.

use super::listing::{self, IdeaPage};
use super::vote::VoteFlow;
use crate::api::Idea;
use serde::Serialize;

/// Houses the voting view's UI state.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VotingPage {
    search_text: String,
    current_page: usize,
    cursor: usize,
    is_loading: bool,
    vote: VoteFlow,
}

impl Default for VotingPage {
    fn default() -> Self {
        VotingPage {
            search_text: String::new(),
            current_page: 1,
            cursor: 0,
            is_loading: false,
            vote: VoteFlow::Idle,
        }
    }
}

impl VotingPage {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replace the search text. The page always goes back to the first one.
    ///
    pub fn set_search_text(&mut self, text: String) -> &mut Self {
        self.search_text = text;
        self.current_page = 1;
        self.cursor = 0;
        self
    }

    pub fn push_search_char(&mut self, c: char) -> &mut Self {
        let mut text = self.search_text.clone();
        text.push(c);
        self.set_search_text(text)
    }

    pub fn pop_search_char(&mut self) -> &mut Self {
        let mut text = self.search_text.clone();
        if text.pop().is_some() {
            self.set_search_text(text);
        }
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Advance one page without passing the last one.
    ///
    pub fn next_page(&mut self, total_pages: usize) -> &mut Self {
        let next = listing::clamp_page(self.current_page + 1, total_pages);
        if next != self.current_page {
            self.current_page = next;
            self.cursor = 0;
        }
        self
    }

    /// Go back one page without passing the first one.
    ///
    pub fn previous_page(&mut self, total_pages: usize) -> &mut Self {
        let previous = listing::clamp_page(self.current_page.saturating_sub(1), total_pages);
        if previous != self.current_page {
            self.current_page = previous;
            self.cursor = 0;
        }
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the card cursor forward, wrapping within the visible page.
    ///
    pub fn next_card(&mut self, visible: usize) -> &mut Self {
        if visible > 0 {
            self.cursor = (self.cursor + 1) % visible;
        }
        self
    }

    /// Move the card cursor backward, wrapping within the visible page.
    ///
    pub fn previous_card(&mut self, visible: usize) -> &mut Self {
        if visible > 0 {
            self.cursor = (self.cursor + visible - 1) % visible;
        }
        self
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, is_loading: bool) -> &mut Self {
        self.is_loading = is_loading;
        self
    }

    pub fn vote(&self) -> &VoteFlow {
        &self.vote
    }

    pub fn vote_mut(&mut self) -> &mut VoteFlow {
        &mut self.vote
    }

    /// Derive the visible page from the given list.
    ///
    pub fn derive<'a>(&self, ideas: &'a [Idea]) -> IdeaPage<'a> {
        listing::derive_page(ideas, &self.search_text, self.current_page)
    }

    /// Return the idea under the cursor on the visible page.
    ///
    pub fn idea_under_cursor<'a>(&self, ideas: &'a [Idea]) -> Option<&'a Idea> {
        let page = self.derive(ideas);
        page.ideas
            .get(self.cursor.min(page.ideas.len().saturating_sub(1)))
            .copied()
    }
}
