use crate::api::Api;
use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::{State, View};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration, opening
    /// the given view first. Returns the result of the application execution.
    ///
    pub async fn start(config: Config, initial_view: View) -> Result<()> {
        let log_buffer = LogBuffer::default();
        CustomLogger::install(config.log_level_filter()?, log_buffer.clone())
            .map_err(|e| AppError::Logger(e.to_string()))?;

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default. Available: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                theme,
                config.toast_duration(),
                log_buffer,
            ))),
            config,
        };
        app.start_network(rx)?;
        let result = app.start_ui(initial_view).await;

        // Late responses must not touch state anymore
        app.state.lock().await.shutdown();

        info!("Exiting application...");
        result
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let api = Api::new(&self.config.base_url)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &api);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
                debug!("Network channel closed.");
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self, initial_view: View) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        {
            let mut state = self.state.lock().await;
            match initial_view {
                View::Voting => state.activate_voting(),
                View::Register => state.activate_register(),
            };
        }

        let terminal_event_handler = TerminalEventHandler::new();
        let result: Result<()> = loop {
            {
                let state = self.state.lock().await;
                if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &state)) {
                    break Err(e.into());
                }
            }
            let event = match terminal_event_handler.next() {
                Ok(event) => event,
                Err(e) => break Err(e),
            };
            let mut state = self.state.lock().await;
            if !terminal_event_handler.apply(event, &mut state) {
                debug!("Received application exit request.");
                break Ok(());
            }
        };

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}
