use crate::model::HackathonListing;

/// Whether the detail overlay is showing, and for which listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Open(HackathonListing),
}

impl DetailState {
    /// Open the overlay on `listing`, replacing whatever was shown.
    #[must_use]
    pub fn select(self, listing: HackathonListing) -> Self {
        DetailState::Open(listing)
    }

    #[must_use]
    pub fn close(self) -> Self {
        DetailState::Closed
    }

    pub fn selected(&self) -> Option<&HackathonListing> {
        match self {
            DetailState::Open(listing) => Some(listing),
            DetailState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open(_))
    }
}

/// The primary action offered in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    /// Link out to the registration page.
    Register { url: String },
    /// Send the visitor through the login flow first.
    LoginToRegister,
}

impl DetailAction {
    pub fn for_session(logged_in: bool, register_url: &str) -> Self {
        if logged_in {
            DetailAction::Register {
                url: register_url.to_string(),
            }
        } else {
            DetailAction::LoginToRegister
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailAction::Register { .. } => "Register",
            DetailAction::LoginToRegister => "Login to Register",
        }
    }
}
