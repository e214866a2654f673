//! Vote confirmation flow.
//!
//! A vote goes `Idle -> DialogOpen -> Submitting -> Idle`, or is cancelled
//! straight from `DialogOpen` back to `Idle`. The idea being voted for lives
//! inside the non-idle states, so an open dialog always knows its target.

use super::toast::Toast;
use crate::api::{ApiError, Idea, VoteReceipt, VoteRequest};
use serde::Serialize;

/// Maximum number of characters in a participant code.
///
pub const PARTICIPANT_CODE_LENGTH: usize = 6;

/// Participant code typed by the voter, kept uppercase and at most
/// [`PARTICIPANT_CODE_LENGTH`] characters long.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParticipantCode(String);

impl ParticipantCode {
    /// Normalize arbitrary input into a participant code.
    ///
    #[cfg(test)]
    pub fn parse(input: &str) -> Self {
        let mut code = ParticipantCode::default();
        input.chars().for_each(|c| {
            code.push(c);
        });
        code
    }

    /// Append a character, returning whether it was accepted.
    ///
    pub fn push(&mut self, c: char) -> bool {
        if c.is_whitespace() || c.is_control() {
            return false;
        }
        let upper = c.to_uppercase();
        if self.len() + upper.len() > PARTICIPANT_CODE_LENGTH {
            return false;
        }
        self.0.extend(upper);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Specifying where the vote flow currently is.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VoteFlow {
    #[default]
    Idle,
    DialogOpen {
        idea: Idea,
        code: ParticipantCode,
    },
    Submitting {
        idea: Idea,
        code: ParticipantCode,
    },
}

impl VoteFlow {
    /// Open the confirmation dialog for the idea. Ignored unless idle.
    ///
    pub fn open(&mut self, idea: Idea) -> bool {
        if !matches!(self, VoteFlow::Idle) {
            return false;
        }
        *self = VoteFlow::DialogOpen {
            idea,
            code: ParticipantCode::default(),
        };
        true
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, VoteFlow::Idle)
    }

    pub fn is_dialog_open(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, VoteFlow::Submitting { .. })
    }

    /// Return the idea targeted by the open dialog.
    ///
    pub fn selected_idea(&self) -> Option<&Idea> {
        match self {
            VoteFlow::Idle => None,
            VoteFlow::DialogOpen { idea, .. } | VoteFlow::Submitting { idea, .. } => Some(idea),
        }
    }

    /// Return the participant code typed so far.
    ///
    pub fn code(&self) -> Option<&ParticipantCode> {
        match self {
            VoteFlow::Idle => None,
            VoteFlow::DialogOpen { code, .. } | VoteFlow::Submitting { code, .. } => Some(code),
        }
    }

    /// Add a character to the code while the dialog accepts input.
    ///
    pub fn push_char(&mut self, c: char) -> bool {
        match self {
            VoteFlow::DialogOpen { code, .. } => code.push(c),
            _ => false,
        }
    }

    pub fn pop_char(&mut self) -> Option<char> {
        match self {
            VoteFlow::DialogOpen { code, .. } => code.pop(),
            _ => None,
        }
    }

    /// The confirm control is enabled only with a code and no request in
    /// flight.
    ///
    pub fn can_confirm(&self) -> bool {
        matches!(self, VoteFlow::DialogOpen { code, .. } if !code.is_empty())
    }

    /// Move to `Submitting` and return the request to send.
    ///
    pub fn begin_submit(&mut self) -> Option<VoteRequest> {
        if !self.can_confirm() {
            return None;
        }
        match std::mem::take(self) {
            VoteFlow::DialogOpen { idea, code } => {
                let request = VoteRequest {
                    idea_id: idea.id.clone(),
                    voter_code: code.as_str().to_owned(),
                };
                *self = VoteFlow::Submitting { idea, code };
                Some(request)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Close the dialog without submitting anything.
    ///
    pub fn cancel(&mut self) -> bool {
        if matches!(self, VoteFlow::DialogOpen { .. }) {
            *self = VoteFlow::Idle;
            true
        } else {
            false
        }
    }

    /// Drop back to `Idle` from any state.
    ///
    pub fn reset(&mut self) {
        *self = VoteFlow::Idle;
    }

    /// Close the dialog after the submission resolved, whatever the
    /// outcome, and return the notification describing it.
    ///
    pub fn finish(
        &mut self,
        idea_title: &str,
        outcome: Result<VoteReceipt, ApiError>,
    ) -> Toast {
        self.reset();
        match outcome {
            Ok(receipt) => Toast::vote_confirmed(&receipt.name, idea_title),
            Err(e) => Toast::vote_failed(&e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastVariant;
    use fake::{Fake, Faker};

    fn food_app() -> Idea {
        Idea {
            title: "Food App".to_string(),
            ..Faker.fake()
        }
    }

    #[test]
    fn code_is_uppercased_and_capped() {
        let code = ParticipantCode::parse("ab c12345");
        assert_eq!(code.as_str(), "ABC123");
        assert_eq!(code.len(), PARTICIPANT_CODE_LENGTH);
    }

    #[test]
    fn code_rejects_seventh_character() {
        let mut code = ParticipantCode::parse("QWERTY");
        assert!(!code.push('Z'));
        assert_eq!(code.as_str(), "QWERTY");
    }

    #[test]
    fn open_records_selected_idea() {
        let idea = food_app();
        let mut flow = VoteFlow::default();
        assert!(flow.open(idea.clone()));
        assert!(flow.is_dialog_open());
        assert_eq!(flow.selected_idea(), Some(&idea));
        assert!(!flow.open(Faker.fake()));
    }

    #[test]
    fn confirm_is_disabled_without_code() {
        let mut flow = VoteFlow::default();
        assert!(!flow.can_confirm());
        flow.open(food_app());
        assert!(!flow.can_confirm());
        assert!(flow.begin_submit().is_none());
        flow.push_char('a');
        assert!(flow.can_confirm());
        flow.pop_char();
        assert!(!flow.can_confirm());
    }

    #[test]
    fn confirm_is_disabled_while_submitting() {
        let idea = food_app();
        let mut flow = VoteFlow::default();
        flow.open(idea.clone());
        "xy12zz".chars().for_each(|c| {
            flow.push_char(c);
        });

        let request = flow.begin_submit().unwrap();
        assert_eq!(request.idea_id, idea.id);
        assert_eq!(request.voter_code, "XY12ZZ");
        assert!(flow.is_submitting());
        assert!(!flow.can_confirm());
        assert!(flow.begin_submit().is_none());
        assert!(!flow.push_char('Q'));
        assert!(!flow.cancel());
    }

    #[test]
    fn cancel_discards_dialog() {
        let mut flow = VoteFlow::default();
        flow.open(food_app());
        flow.push_char('A');
        assert!(flow.cancel());
        assert!(flow.is_idle());
        assert!(flow.code().is_none());
    }

    #[test]
    fn finish_success_reports_voter_and_title() {
        let mut flow = VoteFlow::default();
        flow.open(food_app());
        flow.push_char('A');
        flow.begin_submit();
        let toast = flow.finish(
            "Food App",
            Ok(VoteReceipt {
                name: "Alice".to_string(),
            }),
        );
        assert!(flow.is_idle());
        assert_eq!(toast.description, "Voted as Alice for Food App");
    }

    #[test]
    fn finish_failure_reports_server_message() {
        let mut flow = VoteFlow::default();
        flow.open(food_app());
        flow.push_char('A');
        flow.begin_submit();
        let toast = flow.finish(
            "Food App",
            Err(ApiError::Rejected {
                status: 409,
                message: "Already voted".to_string(),
            }),
        );
        assert!(flow.is_idle());
        assert!(flow.code().is_none());
        assert_eq!(toast.description, "Already voted");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }
}
