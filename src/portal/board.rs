use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::model::{HackathonListing, Route, HACKATHONS_PATH};
use crate::navigation::Navigator;
use crate::portal::detail::{DetailAction, DetailState};
use crate::portal::filter::filter;
use crate::portal::Services;
use crate::session::{SessionFlags, SessionKey, SessionStore};

/// The open detail overlay as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub listing: HackathonListing,
    pub action_label: &'static str,
    pub register_url: Option<String>,
}

/// Snapshot of the hackathon page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub search_term: String,
    pub cards: Vec<HackathonListing>,
    pub detail: Option<DetailView>,
}

/// Page controller for the hackathon listings: search, detail overlay and the
/// login-to-register flow.
pub struct HackathonBoard {
    listings: Vec<HackathonListing>,
    search_term: String,
    detail: DetailState,
    logged_in: bool,
    register_url: String,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl HackathonBoard {
    /// Build the page, reading the login flag once.
    pub fn mount(listings: Vec<HackathonListing>, services: &Services, config: &Config) -> Self {
        let flags = SessionFlags::read(services.session.as_ref());
        debug!(listings = listings.len(), logged_in = flags.logged_in, "mounted hackathon board");
        Self {
            listings,
            search_term: String::new(),
            detail: DetailState::Closed,
            logged_in: flags.logged_in,
            register_url: config.register_url.clone(),
            session: Arc::clone(&services.session),
            navigator: Arc::clone(&services.navigator),
        }
    }

    /// Replace the search box contents.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Current search box contents.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Listings matching the current search term.
    pub fn visible(&self) -> Vec<&HackathonListing> {
        filter(&self.listings, &self.search_term)
    }

    /// Open the detail overlay on the `position`-th visible card.
    ///
    /// Returns `None` and leaves the overlay untouched if there is no such card.
    pub fn select(&mut self, position: usize) -> Option<&HackathonListing> {
        let listing = self.visible().get(position).map(|l| (*l).clone())?;
        self.select_listing(listing);
        self.detail.selected()
    }

    /// Open the detail overlay on `listing`.
    pub fn select_listing(&mut self, listing: HackathonListing) {
        debug!(title = %listing.title, "opening detail");
        self.detail = std::mem::take(&mut self.detail).select(listing);
    }

    /// Close the detail overlay, whatever it was showing.
    pub fn close(&mut self) {
        self.detail = std::mem::take(&mut self.detail).close();
    }

    /// Current state of the detail overlay.
    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// Login flag as read at mount, or set by [`login`](Self::login).
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// The action the detail overlay offers for the current login state.
    pub fn detail_action(&self) -> DetailAction {
        DetailAction::for_session(self.logged_in, &self.register_url)
    }

    /// Send the visitor to sign in and remember them as logged in.
    #[instrument(skip(self))]
    pub fn login(&mut self) -> Result<()> {
        self.navigator.navigate(Route::SignIn {
            return_to: HACKATHONS_PATH.to_string(),
        });
        self.logged_in = true;
        self.session.set_flag(SessionKey::LoggedIn)
    }

    /// Snapshot of the page for rendering.
    pub fn view(&self) -> BoardView {
        let detail = self.detail.selected().map(|listing| {
            let action = self.detail_action();
            DetailView {
                listing: listing.clone(),
                action_label: action.label(),
                register_url: match action {
                    DetailAction::Register { url } => Some(url),
                    DetailAction::LoginToRegister => None,
                },
            }
        });
        BoardView {
            search_term: self.search_term.clone(),
            cards: self.visible().into_iter().cloned().collect(),
            detail,
        }
    }
}
