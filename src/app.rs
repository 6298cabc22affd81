//! Core application state and iced wiring
//!
//! Submit validates the query, moves the view to Loading and spawns the search.
//! The result comes back as a message tagged with the ticket it was issued under.

use std::sync::Arc;
use std::time::Duration;

use iced::keyboard::Key;
use iced::widget::{column, container, text, Space};
use iced::{
    keyboard, time, Background, Border, Element, Event, Length, Subscription, Task, Theme,
};

use crate::backend::{validate_query, SearchClient, SearchError, SearchResult};
use crate::native::browser;
use crate::ui::results;
use crate::ui::search_bar;
use crate::ui::state::{SearchView, ViewState};
use crate::ui::theme::DarkTheme;

pub const WINDOW_TITLE: &str = "Grounded Search";

const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

// ============================================================================
// Application State
// ============================================================================

pub struct GroundedSearch {
    query: String,
    view: SearchView,
    client: Arc<SearchClient>,
    /// Last ticket handed out
    ticket: u64,
    /// Ticket of the request currently awaited
    in_flight: Option<u64>,
    /// Spinner animation frame, reset on each new search
    spinner_frame: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    SearchFinished {
        ticket: u64,
        result: Result<SearchResult, SearchError>,
    },
    OpenSource(String),
    Tick,
    IcedEvent(Event),
}

/// A search that passed validation and is waiting to be spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub ticket: u64,
    pub query: String,
}

impl GroundedSearch {
    pub fn new(client: SearchClient) -> Self {
        Self {
            query: String::new(),
            view: SearchView::new(),
            client: Arc::new(client),
            ticket: 0,
            in_flight: None,
            spinner_frame: 0,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }

            Message::Submit => match self.begin_search() {
                Some(pending) => self.spawn_search(pending),
                None => Task::none(),
            },

            Message::SearchFinished { ticket, result } => {
                self.finish_search(ticket, result);
                Task::none()
            }

            Message::OpenSource(uri) => {
                if let Err(e) = browser::open(&uri) {
                    tracing::warn!("{}", e);
                }
                Task::none()
            }

            Message::Tick => {
                if self.view.is_loading() {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                Task::none()
            }

            Message::IcedEvent(event) => {
                if let Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(keyboard::key::Named::Escape),
                    ..
                }) = event
                {
                    self.clear();
                }
                Task::none()
            }
        }
    }

    /// Validate and enter Loading. Returns the search to run, if any.
    ///
    /// Ignored while a request is in flight; a blank query goes straight to
    /// Error without issuing anything.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        if let Some(ticket) = self.in_flight {
            tracing::debug!("Ignoring submit while request {} is in flight", ticket);
            return None;
        }

        if let Err(err) = validate_query(&self.query) {
            tracing::warn!("Rejected submit: {}", err);
            self.view.show_error(err.user_message());
            return None;
        }

        self.ticket += 1;
        self.in_flight = Some(self.ticket);
        self.spinner_frame = 0;
        tracing::info!(
            "Search {} submitted ({} chars)",
            self.ticket,
            self.query.len()
        );
        self.view.show_loading();

        Some(PendingSearch {
            ticket: self.ticket,
            query: self.query.clone(),
        })
    }

    fn spawn_search(&self, pending: PendingSearch) -> Task<Message> {
        let client = Arc::clone(&self.client);
        let PendingSearch { ticket, query } = pending;

        Task::perform(
            async move { client.run_search(&query).await },
            move |result| Message::SearchFinished { ticket, result },
        )
    }

    /// Apply a completed search; completions for any other ticket are dropped
    pub fn finish_search(&mut self, ticket: u64, result: Result<SearchResult, SearchError>) {
        if self.in_flight != Some(ticket) {
            tracing::debug!("Discarding stale result for request {}", ticket);
            return;
        }
        self.in_flight = None;

        match result {
            Ok(SearchResult { answer, sources }) => self.view.show_success(answer, sources),
            Err(err) => {
                tracing::error!("Search {} failed: {}", ticket, err);
                self.view.show_error(err.user_message());
            }
        }
    }

    /// Escape: clear the query and return to Idle, unless loading
    fn clear(&mut self) {
        if self.in_flight.is_some() {
            return;
        }
        self.query.clear();
        self.view.reset();
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search_bar = search_bar::view(
            &self.query,
            self.view.controls_enabled(),
            self.view.submit_label(),
            Message::QueryChanged,
            Message::Submit,
        );

        let body: Element<'_, Message> = match self.view_state() {
            ViewState::Idle => container(
                text("Answers are grounded in live web search results.")
                    .size(14)
                    .color(DarkTheme::TEXT_MUTED),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
            ViewState::Loading => results::loading(self.spinner_frame),
            ViewState::Error(message) => results::error(message),
            ViewState::Success(result) => {
                results::success(&result.answer, self.view.source_lines(), Message::OpenSource)
            }
        };

        let content = column![
            text(WINDOW_TITLE).size(22).color(DarkTheme::TEXT),
            Space::with_height(12),
            search_bar,
            Space::with_height(16),
            body,
        ];

        container(container(content).padding(16).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                border: Border {
                    color: DarkTheme::BORDER,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let events = iced::event::listen().map(Message::IcedEvent);

        if self.view.is_loading() {
            Subscription::batch([
                events,
                time::every(SPINNER_INTERVAL).map(|_| Message::Tick),
            ])
        } else {
            events
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
