//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Network event channel is gone
    #[error("Network channel closed: {0}")]
    NetworkChannelClosed(String),

    /// Vote requested with nothing under the cursor
    #[error("No idea selected")]
    NoIdeaSelected,
}
