//! Fakes for the portal's external collaborators.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::client::ProfileApi;
use crate::error::{PortalError, Result};
use crate::identity::IdentityProvider;
use crate::model::ProfilePayload;
use crate::navigation::RecordingNavigator;
use crate::portal::Services;
use crate::session::MemorySessionStore;

pub(crate) struct FakeIdentity {
    signed_in: bool,
    fail_tokens: AtomicBool,
    token_requests: AtomicUsize,
}

impl FakeIdentity {
    pub(crate) const TOKEN: &'static str = "test-token";

    pub(crate) fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
            fail_tokens: AtomicBool::new(false),
            token_requests: AtomicUsize::new(0),
        }
    }

    pub(crate) fn fail_tokens(&self) {
        self.fail_tokens.store(true, Ordering::SeqCst);
    }

    pub(crate) fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    async fn session_token(&self) -> Result<String> {
        self.token_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_tokens.load(Ordering::SeqCst) {
            return Err(PortalError::TokenUnavailable("session expired".to_string()));
        }
        Ok(Self::TOKEN.to_string())
    }
}

#[derive(Clone)]
enum Reply {
    Ok(serde_json::Value),
    Status(u16),
    Hang,
}

/// Records every call and answers with a canned reply.
pub(crate) struct FakeApi {
    reply: Mutex<Reply>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, ProfilePayload)>>,
    called: Notify,
    gate: Option<Arc<Notify>>,
}

impl FakeApi {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
            called: Notify::new(),
            gate: None,
        }
    }

    pub(crate) fn ok(body: serde_json::Value) -> Self {
        Self::with_reply(Reply::Ok(body))
    }

    pub(crate) fn status(status: u16) -> Self {
        Self::with_reply(Reply::Status(status))
    }

    pub(crate) fn hang() -> Self {
        Self::with_reply(Reply::Hang)
    }

    /// Replies only after the gate is notified.
    pub(crate) fn gated(body: serde_json::Value) -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::ok(body)
        }
    }

    pub(crate) fn gate(&self) -> Arc<Notify> {
        self.gate.clone().unwrap_or_else(|| Arc::new(Notify::new()))
    }

    pub(crate) fn respond_ok(&self, body: serde_json::Value) {
        *self.reply.lock().unwrap_or_else(PoisonError::into_inner) = Reply::Ok(body);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) async fn wait_for_call(&self) {
        self.called.notified().await;
    }

    pub(crate) fn last_token(&self) -> Option<String> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(token, _)| token.clone())
    }

    pub(crate) fn last_payload(&self) -> Option<ProfilePayload> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, payload)| payload.clone())
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn create_user(&self, token: &str, payload: &ProfilePayload) -> Result<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((token.to_string(), payload.clone()));
        self.called.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self.reply.lock().unwrap_or_else(PoisonError::into_inner).clone();
        match reply {
            Reply::Ok(body) => Ok(body),
            Reply::Status(code) => Err(PortalError::UnexpectedStatus {
                url: "http://fake/api/users".to_string(),
                status: reqwest::StatusCode::from_u16(code)
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            }),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// Services with a signed-in identity and an API that accepts everything.
pub(crate) fn services_with(session: Arc<MemorySessionStore>, navigator: Arc<RecordingNavigator>) -> Services {
    Services {
        session,
        identity: Arc::new(FakeIdentity::new(true)),
        api: Arc::new(FakeApi::ok(serde_json::json!({"ok": true}))),
        navigator,
    }
}
