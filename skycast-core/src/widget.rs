use log::debug;

use crate::{
    config::Config,
    error::FetchError,
    model::WeatherSnapshot,
    source::{WeatherSource, source_from_config},
};

/// What the widget is showing right now.
///
/// A tagged union instead of independent loading/error/result fields, so
/// combinations like "loading with a populated error" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A fetch is in flight. `previous` carries the last successful snapshot,
    /// which is kept (not cleared) until the fetch resolves; the renderer
    /// shows the loading view regardless.
    Loading {
        previous: Option<WeatherSnapshot>,
    },
    Ready(WeatherSnapshot),
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    /// The snapshot currently displayed, if any. A stale snapshot carried
    /// through `Loading` is not displayed and is not returned here.
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            ViewState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one fetch attempt. Resolving a ticket that is no longer the
/// widget's current one has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// The weather widget: view state, the committed target city, and the
/// uncommitted search field text.
///
/// `target_city` and `search_text` are deliberately decoupled: editing the
/// field never fetches, only an explicit submission commits a new target.
#[derive(Debug)]
pub struct WeatherWidget {
    state: ViewState,
    target_city: String,
    search_text: String,
    generation: u64,
}

impl WeatherWidget {
    /// A widget freshly mounted against `city`: loading, nothing to show
    /// yet. The caller is expected to run the fetch effect immediately.
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            state: ViewState::Loading { previous: None },
            target_city: city.into(),
            search_text: String::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn target_city(&self) -> &str {
        &self.target_city
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Update the uncommitted search field. Never triggers a fetch.
    pub fn edit_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Whether the submit action is enabled: false while the trimmed field
    /// is empty.
    pub fn can_submit(&self) -> bool {
        !self.search_text.trim().is_empty()
    }

    /// Commit the search field as the new target city and enter the
    /// loading state: any prior error is cleared immediately, a prior
    /// snapshot is carried until the new fetch resolves.
    ///
    /// Empty or whitespace-only input is a no-op leaving the target and all
    /// view state untouched; [`Self::can_submit`] already disables the
    /// action in that case, so this is defense in depth. Returns the ticket
    /// for the committed fetch; the caller runs the fetch effect and
    /// resolves it (a later [`Self::refresh`] supersedes the ticket, which
    /// is equally fine). Re-submitting the current city still commits:
    /// equality with the previous target is not consulted, a re-submission
    /// re-fetches.
    pub fn submit_search(&mut self) -> Option<FetchTicket> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.target_city = trimmed.to_string();
        Some(self.begin_fetch())
    }

    /// Enter the loading state for a new fetch attempt.
    ///
    /// Any prior error is cleared immediately; a prior snapshot is carried
    /// until the attempt resolves. Returns the ticket the attempt must
    /// resolve with.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        debug!(
            "fetch #{} started for {:?}",
            self.generation, self.target_city
        );

        let previous = match std::mem::replace(&mut self.state, ViewState::Loading { previous: None }) {
            ViewState::Ready(snapshot) => Some(snapshot),
            ViewState::Loading { previous } => previous,
            ViewState::Failed(_) => None,
        };
        self.state = ViewState::Loading { previous };

        FetchTicket(self.generation)
    }

    /// Resolve a fetch attempt. The widget leaves the loading state as the
    /// final step on both outcomes.
    ///
    /// A ticket from a superseded attempt is discarded so that a late
    /// response for an abandoned query cannot overwrite a newer one.
    /// Returns whether the result was applied.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<WeatherSnapshot, FetchError>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "discarding stale fetch #{} (current is #{})",
                ticket.0, self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(snapshot) => ViewState::Ready(snapshot),
            Err(err) => ViewState::Failed(err.message().to_string()),
        };

        true
    }

    /// The fetch effect: one attempt against the current target city.
    ///
    /// The credential is resolved at effect-run time; when it is missing
    /// the attempt short-circuits to a configuration failure without
    /// issuing any request.
    pub async fn refresh(&mut self, config: &Config) {
        match source_from_config(config) {
            Ok(source) => self.refresh_with(&source).await,
            Err(err) => {
                let ticket = self.begin_fetch();
                self.apply(ticket, Err(err));
            }
        }
    }

    /// Run one fetch attempt against an explicit source.
    pub async fn refresh_with(&mut self, source: &dyn WeatherSource) {
        let city = self.target_city.clone();
        let ticket = self.begin_fetch();
        let result = source.current(&city).await;
        self.apply(ticket, result);
    }
}
