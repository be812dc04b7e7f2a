//! Headless client for a hackathon portal.
//!
//! Controllers hold page state and hand out immutable view snapshots; a host
//! (browser, TUI, desktop shell) renders the snapshots and forwards user input
//! back. External collaborators are injected through [`Services`]:
//!
//! - a [`SessionStore`] for the durable "logged in" / "profile submitted" flags,
//! - an [`IdentityProvider`] for sign-in state and bearer tokens,
//! - a [`ProfileApi`] for the profile endpoint ([`ProfileClient`] over HTTP),
//! - a [`Navigator`] for page changes.

pub use client::{ProfileApi, ProfileClient};
pub use config::Config;
pub use error::{FailureKind, PortalError, Result};
pub use identity::{IdentityProvider, StaticIdentity};
pub use model::*;
pub use navigation::{Navigator, RecordingNavigator};
pub use portal::board::{BoardView, DetailView, HackathonBoard};
pub use portal::detail::{DetailAction, DetailState};
pub use portal::filter::filter;
pub use portal::header::{Header, HeaderView, NavLinkView};
pub use portal::profile::{FormView, ProfileFormController, ProfileView, SubmitPhase};
pub use portal::toast::Toaster;
pub use portal::Services;
pub use session::{FileSessionStore, MemorySessionStore, SessionFlags, SessionKey, SessionStore};

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod identity;
pub mod model;
pub mod navigation;
pub mod portal;
pub mod session;
#[cfg(test)]
pub(crate) mod test_utils;
