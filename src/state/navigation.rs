//! Navigation-related state types.
//!
//! This module contains enums describing which view is shown and where key
//! presses are routed.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Register,
    Voting,
}

impl View {
    /// Return the other view.
    ///
    pub fn toggled(&self) -> View {
        match self {
            View::Register => View::Voting,
            View::Voting => View::Register,
        }
    }
}

/// Specifying where typed characters go on the voting view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Browse,
    Search,
}
