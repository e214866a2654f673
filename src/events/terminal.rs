use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> Result<Event<KeyEvent>> {
        Ok(self.rx.recv()?)
    }

    /// Apply a terminal event to state. Returns true if the application
    /// should continue or false if exit was requested.
    ///
    pub fn apply(&self, event: Event<KeyEvent>, state: &mut State) -> bool {
        match event {
            Event::Input(key) => handle_key(key, state),
            Event::Tick => {
                state.tick(Instant::now());
                true
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Return the character of a plain or shifted key press.
///
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Route a key press according to the current view and mode. Returns false
/// if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    // Nothing but exit while a vote is in flight
    if state.is_submitting_vote() {
        return true;
    }
    if state.is_vote_dialog_open() {
        handle_dialog_key(key, state);
        return true;
    }
    if *state.current_view() == View::Voting && state.is_search_mode() {
        handle_search_key(key, state);
        return true;
    }
    if key.code == KeyCode::Tab {
        state.toggle_view();
        return true;
    }

    match state.current_view() {
        View::Voting => handle_voting_key(key, state),
        View::Register => handle_register_key(key, state),
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Esc => {
            state.cancel_vote();
        }
        KeyCode::Enter => {
            if state.can_confirm_vote() {
                state.confirm_vote();
            }
        }
        KeyCode::Backspace => {
            state.backspace_code();
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                state.add_code_char(c);
            }
        }
    }
}

fn handle_search_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.exit_search_mode();
        }
        KeyCode::Backspace => {
            state.backspace_search();
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                state.add_search_char(c);
            }
        }
    }
}

fn handle_voting_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('/') => {
            state.enter_search_mode();
        }
        KeyCode::Esc => {
            state.clear_search();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_card();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_card();
        }
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => {
            state.next_page();
        }
        KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => {
            state.previous_page();
        }
        KeyCode::Enter | KeyCode::Char('v') => {
            if let Err(e) = state.open_vote_dialog() {
                warn!("Cannot open vote dialog: {}", e);
            }
        }
        KeyCode::Char('r') => {
            state.reload_ideas();
        }
        KeyCode::Char('d') => {
            state.toggle_log_panel();
        }
        _ => (),
    }
    true
}

fn handle_register_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('j') | KeyCode::Down => {
            state.scroll_register_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.scroll_register_up();
        }
        KeyCode::Char('d') => {
            state.toggle_log_panel();
        }
        _ => (),
    }
    true
}
