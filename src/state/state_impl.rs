use crate::api::{ApiError, Idea, VoteReceipt};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use std::time::{Duration, Instant};

use super::error::StateError;
use super::listing::IdeaPage;
use super::navigation::{InputMode, View};
use super::toast::Toast;
use super::voting::VotingPage;

const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    spinner_index: usize,
    view: View,
    input_mode: InputMode,
    ideas: Vec<Idea>,
    voting: VotingPage,
    generation: u64, // bumped on every voting view activation and teardown
    toasts: Vec<Toast>,
    toast_duration: Duration,
    log_panel_open: bool,
    log_buffer: LogBuffer,
    register_scroll: u16,
    theme: Theme,
    shut_down: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            spinner_index: 0,
            view: View::Register,
            input_mode: InputMode::Browse,
            ideas: vec![],
            voting: VotingPage::default(),
            generation: 0,
            toasts: vec![],
            toast_duration: DEFAULT_TOAST_DURATION,
            log_panel_open: false,
            log_buffer: LogBuffer::default(),
            register_scroll: 0,
            theme: Theme::default(),
            shut_down: false,
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        theme: Theme,
        toast_duration: Duration,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            toast_duration,
            log_buffer,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Housekeeping done on every terminal tick.
    ///
    pub fn tick(&mut self, now: Instant) -> &mut Self {
        self.advance_spinner_index();
        self.expire_toasts(now)
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> &View {
        &self.view
    }

    /// Return where typed characters are routed.
    ///
    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    /// Return the generation of the current voting view activation.
    ///
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Show the voting view with fresh state and request the idea list once.
    ///
    pub fn activate_voting(&mut self) -> &mut Self {
        self.generation += 1;
        self.view = View::Voting;
        self.input_mode = InputMode::Browse;
        self.ideas.clear();
        self.voting = VotingPage::default();
        self.voting.set_loading(true);
        debug!(
            "Activating voting view (generation {})...",
            self.generation
        );
        if let Err(e) = self.dispatch(NetworkEvent::FetchIdeas {
            generation: self.generation,
        }) {
            error!("{}", e);
            self.voting.set_loading(false);
            self.push_toast(Toast::load_failed());
        }
        self
    }

    /// Show the registration view, tearing down the voting view state.
    ///
    pub fn activate_register(&mut self) -> &mut Self {
        if self.view == View::Voting {
            self.generation += 1;
            self.ideas.clear();
            self.voting = VotingPage::default();
            self.input_mode = InputMode::Browse;
        }
        self.view = View::Register;
        self
    }

    /// Switch to the other view.
    ///
    pub fn toggle_view(&mut self) -> &mut Self {
        match self.view.toggled() {
            View::Voting => self.activate_voting(),
            View::Register => self.activate_register(),
        }
    }

    /// Fetch the idea list again unless a fetch or a vote is in flight.
    ///
    pub fn reload_ideas(&mut self) -> &mut Self {
        if self.view != View::Voting || self.voting.is_loading() || !self.voting.vote().is_idle() {
            debug!("Skipping reload request.");
            return self;
        }
        info!("Reloading ideas...");
        self.activate_voting()
    }

    /// Store a fetched idea list if it belongs to the live activation.
    /// Returns whether the list was applied.
    ///
    pub fn set_ideas(&mut self, generation: u64, ideas: Vec<Idea>) -> bool {
        if !self.accepts(generation) {
            debug!("Ignoring idea list for stale generation {}.", generation);
            return false;
        }
        self.ideas = ideas;
        self.voting.set_loading(false);
        true
    }

    /// Record a failed idea listing if it belongs to the live activation.
    /// The list stays empty.
    ///
    pub fn fail_ideas(&mut self, generation: u64, e: &ApiError) -> bool {
        if !self.accepts(generation) {
            debug!("Ignoring failed idea list for stale generation {}.", generation);
            return false;
        }
        error!("Failed to load ideas: {}", e);
        self.voting.set_loading(false);
        self.push_toast(Toast::load_failed());
        true
    }

    /// Returns the raw idea list.
    ///
    pub fn get_ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Returns the voting view state.
    ///
    pub fn get_voting(&self) -> &VotingPage {
        &self.voting
    }

    /// Returns whether the idea list is being fetched.
    ///
    pub fn is_loading(&self) -> bool {
        self.voting.is_loading()
    }

    /// Returns the visible page derived from the list and the voting state.
    ///
    pub fn idea_page(&self) -> IdeaPage<'_> {
        self.voting.derive(&self.ideas)
    }

    /// Route typed characters to the search box.
    ///
    pub fn enter_search_mode(&mut self) -> &mut Self {
        if self.view == View::Voting && self.voting.vote().is_idle() {
            self.input_mode = InputMode::Search;
        }
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.input_mode = InputMode::Browse;
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.input_mode == InputMode::Search
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.voting.push_search_char(c);
        self
    }

    pub fn backspace_search(&mut self) -> &mut Self {
        self.voting.pop_search_char();
        self
    }

    pub fn clear_search(&mut self) -> &mut Self {
        self.voting.set_search_text(String::new());
        self
    }

    /// Go to the next page of ideas.
    ///
    pub fn next_page(&mut self) -> &mut Self {
        let total_pages = self.idea_page().total_pages;
        self.voting.next_page(total_pages);
        self
    }

    /// Go to the previous page of ideas.
    ///
    pub fn previous_page(&mut self) -> &mut Self {
        let total_pages = self.idea_page().total_pages;
        self.voting.previous_page(total_pages);
        self
    }

    /// Move the card cursor to the next idea on the page.
    ///
    pub fn next_card(&mut self) -> &mut Self {
        let visible = self.idea_page().ideas.len();
        self.voting.next_card(visible);
        self
    }

    /// Move the card cursor to the previous idea on the page.
    ///
    pub fn previous_card(&mut self) -> &mut Self {
        let visible = self.idea_page().ideas.len();
        self.voting.previous_card(visible);
        self
    }

    /// Returns the index of the highlighted card on the visible page.
    ///
    pub fn current_card_index(&self) -> usize {
        self.voting.cursor()
    }

    /// Open the vote confirmation for the highlighted idea.
    ///
    pub fn open_vote_dialog(&mut self) -> Result<(), StateError> {
        let idea = self
            .voting
            .idea_under_cursor(&self.ideas)
            .cloned()
            .ok_or(StateError::NoIdeaSelected)?;
        debug!("Opening vote dialog for idea '{}'...", idea.title);
        self.input_mode = InputMode::Browse;
        self.voting.vote_mut().open(idea);
        Ok(())
    }

    pub fn is_vote_dialog_open(&self) -> bool {
        self.voting.vote().is_dialog_open()
    }

    pub fn is_submitting_vote(&self) -> bool {
        self.voting.vote().is_submitting()
    }

    pub fn can_confirm_vote(&self) -> bool {
        self.voting.vote().can_confirm()
    }

    pub fn add_code_char(&mut self, c: char) -> &mut Self {
        self.voting.vote_mut().push_char(c);
        self
    }

    pub fn backspace_code(&mut self) -> &mut Self {
        self.voting.vote_mut().pop_char();
        self
    }

    /// Close the vote dialog without submitting.
    ///
    pub fn cancel_vote(&mut self) -> &mut Self {
        if self.voting.vote_mut().cancel() {
            debug!("Vote cancelled.");
        }
        self
    }

    /// Submit the vote if the confirm control is enabled.
    ///
    pub fn confirm_vote(&mut self) -> &mut Self {
        let idea_title = match self.voting.vote().selected_idea() {
            Some(idea) => idea.title.clone(),
            None => return self,
        };
        let request = match self.voting.vote_mut().begin_submit() {
            Some(request) => request,
            None => return self,
        };
        info!("Submitting vote for '{}'...", idea_title);
        let event = NetworkEvent::CastVote {
            generation: self.generation,
            idea_title: idea_title.clone(),
            request,
        };
        if let Err(e) = self.dispatch(event) {
            error!("{}", e);
            self.voting.vote_mut().reset();
            self.push_toast(Toast::vote_failed("Failed to submit vote"));
        }
        self
    }

    /// Close the dialog with the outcome of a submitted vote if it belongs to
    /// the live activation. Returns whether the outcome was applied.
    ///
    pub fn finish_vote(
        &mut self,
        generation: u64,
        idea_title: &str,
        outcome: Result<VoteReceipt, ApiError>,
    ) -> bool {
        if !self.accepts(generation) || !self.voting.vote().is_submitting() {
            debug!("Ignoring vote outcome for stale generation {}.", generation);
            return false;
        }
        match &outcome {
            Ok(receipt) => info!("Vote for '{}' confirmed as {}.", idea_title, receipt.name),
            Err(e) => warn!("Vote for '{}' failed: {}", idea_title, e),
        }
        let toast = self.voting.vote_mut().finish(idea_title, outcome);
        self.push_toast(toast);
        true
    }

    /// Show a toast for the configured duration.
    ///
    pub fn push_toast(&mut self, toast: Toast) -> &mut Self {
        self.toasts
            .push(toast.shown_at(Instant::now(), self.toast_duration));
        self
    }

    /// Drop toasts whose time is up.
    ///
    pub fn expire_toasts(&mut self, now: Instant) -> &mut Self {
        self.toasts.retain(|toast| !toast.is_expired(now));
        self
    }

    pub fn get_toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn toggle_log_panel(&mut self) -> &mut Self {
        self.log_panel_open = !self.log_panel_open;
        self
    }

    pub fn is_log_panel_open(&self) -> bool {
        self.log_panel_open
    }

    /// Returns a snapshot of captured log entries, oldest first.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    pub fn scroll_register_down(&mut self) -> &mut Self {
        self.register_scroll = self.register_scroll.saturating_add(1);
        self
    }

    pub fn scroll_register_up(&mut self) -> &mut Self {
        self.register_scroll = self.register_scroll.saturating_sub(1);
        self
    }

    pub fn get_register_scroll(&self) -> u16 {
        self.register_scroll
    }

    /// Stop accepting network results.
    ///
    pub fn shutdown(&mut self) -> &mut Self {
        self.shut_down = true;
        self.net_sender = None;
        self
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    fn accepts(&self, generation: u64) -> bool {
        !self.shut_down && self.view == View::Voting && generation == self.generation
    }

    fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        match &self.net_sender {
            Some(sender) => sender
                .send(event)
                .map_err(|e| StateError::NetworkChannelClosed(e.to_string())),
            None => Err(StateError::NetworkChannelClosed(
                "no network sender".to_string(),
            )),
        }
    }
}
