//! Transient notifications shown on top of every view.

use std::time::{Duration, Instant};

/// Specifying how a toast is styled.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ToastVariant {
    Success,
    Destructive,
}

/// A titled notification that disappears once it expires.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    expires_at: Option<Instant>,
}

impl Toast {
    pub fn new(title: &str, description: &str, variant: ToastVariant) -> Self {
        Toast {
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
            expires_at: None,
        }
    }

    /// Notification for a failed idea listing.
    ///
    pub fn load_failed() -> Self {
        Toast::new("Error", "Failed to load ideas", ToastVariant::Destructive)
    }

    /// Notification for an accepted vote.
    ///
    pub fn vote_confirmed(voter_name: &str, idea_title: &str) -> Self {
        Toast::new(
            "Vote Confirmed",
            &format!("Voted as {} for {}", voter_name, idea_title),
            ToastVariant::Success,
        )
    }

    /// Notification for a refused vote carrying the server's reason.
    ///
    pub fn vote_failed(message: &str) -> Self {
        Toast::new("Error", message, ToastVariant::Destructive)
    }

    /// Start the display countdown.
    ///
    pub fn shown_at(mut self, now: Instant, duration: Duration) -> Self {
        self.expires_at = Some(now + duration);
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.map(|at| now >= at).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_confirmed_text() {
        let toast = Toast::vote_confirmed("Alice", "Food App");
        assert_eq!(toast.title, "Vote Confirmed");
        assert_eq!(toast.description, "Voted as Alice for Food App");
        assert_eq!(toast.variant, ToastVariant::Success);
    }

    #[test]
    fn vote_failed_is_verbatim_and_destructive() {
        let toast = Toast::vote_failed("Already voted");
        assert_eq!(toast.description, "Already voted");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn expiry() {
        let now = Instant::now();
        let toast = Toast::load_failed().shown_at(now, Duration::from_secs(3));
        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + Duration::from_secs(2)));
        assert!(toast.is_expired(now + Duration::from_secs(3)));
    }

    #[test]
    fn unscheduled_toast_never_expires() {
        let toast = Toast::load_failed();
        assert!(!toast.is_expired(Instant::now() + Duration::from_secs(3600)));
    }
}
