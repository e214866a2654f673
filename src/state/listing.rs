//! Derived idea listing.
//!
//! Pure functions turning the fetched idea list, the search text and the
//! requested page into the slice of ideas shown on screen.

use crate::api::Idea;

/// Number of idea cards shown per page.
///
pub const IDEAS_PER_PAGE: usize = 12;

/// One page of the filtered and ranked idea list.
///
#[derive(Debug, PartialEq, Eq)]
pub struct IdeaPage<'a> {
    pub ideas: Vec<&'a Idea>,
    pub current_page: usize,
    pub total_pages: usize,
    pub matched: usize,
}

impl IdeaPage<'_> {
    /// Pagination controls are only shown when there is somewhere to go.
    ///
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Keep ideas whose title or description contains the query, ignoring case.
/// An empty query keeps everything.
///
pub fn filter_ideas<'a>(ideas: &'a [Idea], query: &str) -> Vec<&'a Idea> {
    let query_lower = query.to_lowercase();
    ideas
        .iter()
        .filter(|idea| {
            idea.title.to_lowercase().contains(&query_lower)
                || idea.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

/// Order ideas by vote count, most voted first. Ties keep their order.
///
pub fn rank_by_votes(ideas: &mut [&Idea]) {
    ideas.sort_by(|a, b| b.vote_count().cmp(&a.vote_count()));
}

/// Return the number of pages needed for the given number of ideas, never
/// less than one.
///
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(IDEAS_PER_PAGE).max(1)
}

/// Clamp a 1-based page index into `[1, total_pages]`.
///
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Filter, rank and slice the idea list for display.
///
pub fn derive_page<'a>(ideas: &'a [Idea], query: &str, page: usize) -> IdeaPage<'a> {
    let mut matched = filter_ideas(ideas, query);
    rank_by_votes(&mut matched);

    let total_pages = total_pages(matched.len());
    let current_page = clamp_page(page, total_pages);
    let start = (current_page - 1) * IDEAS_PER_PAGE;
    let count = matched.len();
    let page_ideas = matched
        .into_iter()
        .skip(start)
        .take(IDEAS_PER_PAGE)
        .collect();

    IdeaPage {
        ideas: page_ideas,
        current_page,
        total_pages,
        matched: count,
    }
}
