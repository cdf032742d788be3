//! Application state and logic for the TUI.
//!
//! - [`App`] - owns all UI state; only the event loop mutates it
//! - [`Screen`] - which screen is displayed
//! - [`LoadState`] - progress of the film fetch
//! - [`AppMessage`] - results delivered from background tasks
//!
//! Flow: [`App::start_loading`] spawns a [`FetchTask`]; its result arrives
//! through [`App::handle_message`] and is bound to the [`FilmListPresenter`].
//! Activating a row sends a [`FilmSelected`] event which the
//! [`DetailNavigator`] turns into the detail screen.

mod handlers;
mod loader;
mod messages;
mod navigation;
mod navigator;
mod presenter;
mod types;

pub use loader::FetchTask;
pub use messages::AppMessage;
pub use navigator::{selection_channel, DetailNavigator};
pub use presenter::{FilmListPresenter, FilmSelected};
pub use types::{DetailScreen, LoadState, LoadingIndicator, Screen};

use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::fetcher::FilmFetcher;
use crate::startup::AppConfig;
use crate::traits::HttpClient;

/// Client type the app fetches through.
pub type SharedClient = Arc<dyn HttpClient>;

/// Main application state.
pub struct App {
    pub config: AppConfig,
    fetcher: Arc<FilmFetcher<SharedClient>>,
    /// Current screen
    pub screen: Screen,
    /// Progress of the film fetch
    pub load_state: LoadState,
    /// Spinner shown while loading
    pub spinner: LoadingIndicator,
    /// Films bound to the list screen
    pub presenter: FilmListPresenter,
    navigator: DetailNavigator,
    fetch_task: Option<FetchTask>,
    generation: u64,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver; the event loop takes it for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    /// Set whenever state changes and a redraw is due
    pub needs_redraw: bool,
    /// Rows visible in the list viewport, updated on render
    pub list_viewport_rows: usize,
}

impl App {
    /// Create the app with the production reqwest client.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = ReqwestHttpClient::with_timeout(config.request_timeout())?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create the app with any HTTP client (tests inject a mock).
    pub fn with_client(config: AppConfig, client: SharedClient) -> Self {
        let fetcher = FilmFetcher::new(client, config.films_url.clone())
            .with_timeout_secs(config.timeout_secs);
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (selection_tx, navigator) = selection_channel();

        Self {
            config,
            fetcher: Arc::new(fetcher),
            screen: Screen::FilmList,
            load_state: LoadState::Loading,
            spinner: LoadingIndicator::default(),
            presenter: FilmListPresenter::new(selection_tx),
            navigator,
            fetch_task: None,
            generation: 0,
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            list_viewport_rows: 10,
        }
    }

    /// Start (or restart) the film fetch. Must run inside a tokio runtime.
    ///
    /// Any fetch still in flight is aborted and its generation retired.
    pub fn start_loading(&mut self) {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        self.spinner.show();
        self.fetch_task = Some(FetchTask::spawn(
            Arc::clone(&self.fetcher),
            self.generation,
            self.message_tx.clone(),
        ));
        self.mark_dirty();
    }

    /// Retry after a failure. Ignored in any other state.
    pub fn retry(&mut self) -> bool {
        if !self.load_state.is_failed() {
            return false;
        }
        tracing::info!("retrying film fetch");
        self.start_loading();
        true
    }

    /// Generation of the most recent fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a fetch task is currently held.
    pub fn has_fetch_in_flight(&self) -> bool {
        self.fetch_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Tear down the list screen: abort the fetch and stop the loop.
    pub fn quit(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.cancel();
        }
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Animation tick.
    pub fn tick(&mut self) {
        if self.spinner.is_visible() {
            self.spinner.tick();
            self.mark_dirty();
        }
    }
}
