//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - The voting view's state, derived listing and vote flow
//! - Navigation types (View, InputMode)
//! - Toast notifications
//! - State error handling

mod error;
mod listing;
mod navigation;
mod toast;
mod vote;
mod voting;

pub use error::StateError;
pub use listing::{
    derive_page, filter_ideas, rank_by_votes, total_pages, IdeaPage, IDEAS_PER_PAGE,
};
pub use navigation::{InputMode, View};
pub use toast::{Toast, ToastVariant};
pub use vote::{ParticipantCode, VoteFlow, PARTICIPANT_CODE_LENGTH};
pub use voting::VotingPage;

mod state_impl;

pub use state_impl::State;
