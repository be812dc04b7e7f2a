//! Profile form controller.
//!
//! Holds what the user typed, validates it, and submits it to the profile
//! endpoint with a fresh bearer token. Submission runs through an explicit
//! state machine:
//!
//! ```text
//! Idle ──▶ Submitting ──▶ Submitted
//!              │  ▲
//!              ▼  │
//!             Failed
//! ```
//!
//! All operations take `&self`. State lives behind a mutex that is released
//! before any `.await`, so a second `submit()` issued while the first is on
//! the network is rejected with [`PortalError::SubmitInFlight`]. A `submit()`
//! future dropped before it finishes puts the form back to `Idle`.

use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::model::{Notice, ProfileFormState, ProfilePayload, Route, SkillOption, SkillPair, TextField};
use crate::portal::toast::Toaster;
use crate::portal::Services;
use crate::session::{SessionFlags, SessionKey};

pub const SIGN_IN_WARNING: &str = "Please sign in to submit your profile and add skills.";
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const SUBMIT_SUCCESS: &str = "Profile created successfully";
pub const SUBMIT_FAILURE: &str = "Error submitting profile";

/// Where a profile submission stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

/// The editable form as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub state: ProfileFormState,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub submitting: bool,
}

/// What the profile page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProfileView {
    Form(FormView),
    /// "Profile Submitted!" with an edit action. Replaces the form for good.
    Confirmation,
}

#[derive(Debug, Default)]
struct FormInner {
    form: ProfileFormState,
    phase: SubmitPhase,
    warning: Option<String>,
    error: Option<String>,
    toaster: Toaster,
}

pub struct ProfileFormController {
    services: Services,
    request_timeout: Duration,
    inner: Mutex<FormInner>,
}

impl ProfileFormController {
    /// Build the form, reading the "profile submitted" flag once.
    pub fn mount(services: Services, config: &Config) -> Self {
        let flags = SessionFlags::read(services.session.as_ref());
        let phase = if flags.profile_submitted {
            SubmitPhase::Submitted
        } else {
            SubmitPhase::Idle
        };
        debug!(%phase, "mounted profile form");
        Self {
            services,
            request_timeout: config.request_timeout,
            inner: Mutex::new(FormInner {
                phase,
                ..FormInner::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assign one text input. Always succeeds.
    pub fn update_field(&self, field: TextField, value: impl Into<String>) {
        self.lock().form.set_field(field, value.into());
    }

    /// Same as [`update_field`](Self::update_field) for input names coming
    /// from the rendering layer.
    pub fn update_field_named(&self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = TextField::from_str(name)
            .map_err(|_: strum::ParseError| PortalError::UnknownField(name.to_string()))?;
        self.update_field(field, value);
        Ok(())
    }

    /// Replace the skills with the selector's current value. `None` means the
    /// selection was cleared. Duplicates are kept as given.
    pub fn update_skills(&self, selected: Option<&[SkillOption]>) {
        let skills = selected
            .map(|options| options.iter().map(SkillPair::from).collect())
            .unwrap_or_default();
        self.lock().form.skills = skills;
    }

    /// Current contents of the form.
    pub fn form(&self) -> ProfileFormState {
        self.lock().form.clone()
    }

    /// Where the current submission stands.
    pub fn phase(&self) -> SubmitPhase {
        self.lock().phase
    }

    /// Notices still on screen now.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices_at(Utc::now())
    }

    /// Notices still on screen at `now`. Expired ones are dropped.
    pub fn notices_at(&self, now: DateTime<Utc>) -> Vec<Notice> {
        let mut inner = self.lock();
        inner.toaster.prune(now);
        inner.toaster.notices().to_vec()
    }

    /// Close a notice before it expires. Returns whether it was showing.
    pub fn dismiss_notice(&self, id: u64) -> bool {
        self.lock().toaster.dismiss(id)
    }

    /// Snapshot of the page for rendering.
    pub fn view(&self) -> ProfileView {
        let inner = self.lock();
        match inner.phase {
            SubmitPhase::Submitted => ProfileView::Confirmation,
            phase => ProfileView::Form(FormView {
                state: inner.form.clone(),
                warning: inner.warning.clone(),
                error: inner.error.clone(),
                submitting: phase == SubmitPhase::Submitting,
            }),
        }
    }

    /// Validate and submit the profile.
    ///
    /// Guard failures (`SubmitInFlight`, `AlreadySubmitted`, `AuthRequired`,
    /// `Validation`) return before anything is sent and leave the form as is.
    /// On success the form is cleared, the durable flag is set and the view
    /// switches to the confirmation. On any network-side failure the form is
    /// kept for another attempt.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<serde_json::Value> {
        let payload = self.begin_submit()?;
        let in_flight = InFlight { controller: self };

        let outcome = match tokio::time::timeout(self.request_timeout, self.send(&payload)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(PortalError::Timeout {
                after: self.request_timeout,
            }),
        };

        let result = self.record(outcome);
        drop(in_flight);
        result
    }

    fn record(&self, outcome: Result<serde_json::Value>) -> Result<serde_json::Value> {
        let mut inner = self.lock();
        match outcome {
            Ok(body) => {
                info!("profile submitted");
                inner.toaster.success(SUBMIT_SUCCESS);
                if let Err(e) = self.services.session.set_flag(SessionKey::ProfileSubmitted) {
                    warn!(error = %e, "failed to persist profile submission flag");
                }
                inner.form = ProfileFormState::default();
                inner.phase = SubmitPhase::Submitted;
                Ok(body)
            }
            Err(e) => {
                warn!(error = %e, kind = %e.failure_kind(), "profile submission failed");
                inner.toaster.error(SUBMIT_FAILURE);
                inner.phase = SubmitPhase::Failed;
                Err(e)
            }
        }
    }

    fn begin_submit(&self) -> Result<ProfilePayload> {
        let mut inner = self.lock();
        match inner.phase {
            SubmitPhase::Submitting => return Err(PortalError::SubmitInFlight),
            SubmitPhase::Submitted => return Err(PortalError::AlreadySubmitted),
            SubmitPhase::Idle | SubmitPhase::Failed => {}
        }

        if !self.services.identity.is_signed_in() {
            debug!("submit blocked: not signed in");
            inner.warning = Some(SIGN_IN_WARNING.to_string());
            return Err(PortalError::AuthRequired);
        }

        let missing = inner.form.missing_required();
        if !missing.is_empty() {
            debug!(?missing, "submit blocked: missing fields");
            inner.error = Some(FILL_ALL_FIELDS.to_string());
            return Err(PortalError::Validation { missing });
        }

        inner.error = None;
        inner.warning = None;
        inner.phase = SubmitPhase::Submitting;
        Ok(ProfilePayload::from(&inner.form))
    }

    async fn send(&self, payload: &ProfilePayload) -> Result<serde_json::Value> {
        let token = self.services.identity.session_token().await?;
        self.services.api.create_user(&token, payload).await
    }

    /// Leave for the edit page. Nothing is loaded here.
    pub fn edit_profile(&self) {
        self.services.navigator.navigate(Route::EditProfile);
    }
}

/// Held for the network half of `submit()`. If the future is dropped before
/// the outcome is recorded, the phase leaves `Submitting`.
struct InFlight<'a> {
    controller: &'a ProfileFormController,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut inner = self.controller.lock();
        if inner.phase == SubmitPhase::Submitting {
            debug!("submission abandoned before completion");
            inner.phase = SubmitPhase::Idle;
        }
    }
}
