//! Authenticated-session state.
//!
//! `Unknown -> { Authenticated | Anonymous }`: the state starts `Unknown`,
//! is resolved exactly once by `restore()` at startup, and afterwards only
//! moves between `Authenticated` and `Anonymous` in response to provider
//! calls. Consumers observe transitions through a watch channel.

pub mod auth;

use crate::error::{AppError, Result};
use crate::session::auth::AuthClient;
use crate::storage;
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

pub const SESSION_CHANGED_EVENT: &str = "session-changed";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "identity", rename_all = "lowercase")]
pub enum Session {
    Unknown,
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Session::Authenticated(identity) => Some(&identity.uid),
            _ => None,
        }
    }
}

/// Bearer credentials for the current identity, held alongside the public
/// session state but never sent to the webview.
#[derive(Debug, Clone)]
struct AuthTokens {
    id_token: String,
    refresh_token: String,
}

pub struct SessionManager {
    auth: AuthClient,
    tx: watch::Sender<Session>,
    tokens: Mutex<Option<AuthTokens>>,
}

impl SessionManager {
    pub fn new(auth: AuthClient) -> Self {
        let (tx, _) = watch::channel(Session::Unknown);
        Self {
            auth,
            tx,
            tokens: Mutex::new(None),
        }
    }

    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Access token for the signed-in identity, if any.
    pub fn id_token(&self) -> Option<String> {
        self.tokens.lock().as_ref().map(|t| t.id_token.clone())
    }

    /// Uid and access token when signed in. All history traffic is gated on
    /// this: while `Unknown` or `Anonymous`, nothing reaches the document
    /// store.
    pub fn credentials(&self) -> Option<(String, String)> {
        let uid = self.current().user_id().map(String::from)?;
        let id_token = self.id_token()?;
        Some((uid, id_token))
    }

    /// Resolve the initial `Unknown` state from the persisted refresh token.
    /// Any failure lands on `Anonymous`; absence of a session is not an
    /// error.
    pub async fn restore(&self) {
        let stored = storage::with_db(storage::get_refresh_token).unwrap_or_default();

        let Some(refresh_token) = stored else {
            info!("No stored session, starting anonymous");
            self.set_anonymous();
            return;
        };

        match self.auth.refresh(&refresh_token).await {
            Ok(session) => {
                info!("Restored session for uid={}", session.uid);
                self.install(session);
            }
            Err(e) => {
                warn!("Stored session could not be restored: {}", e);
                let _ = storage::with_db(|conn| storage::set_refresh_token(conn, None));
                self.set_anonymous();
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::Auth(
                "Correo y contrase\u{f1}a son obligatorios".into(),
            ));
        }

        let session = self.auth.sign_in(email.trim(), password).await?;
        if let Err(e) =
            storage::with_db(|conn| storage::set_refresh_token(conn, Some(&session.refresh_token)))
        {
            warn!("Could not persist session: {}", e);
        }
        Ok(self.install(session))
    }

    pub fn logout(&self) {
        if let Err(e) = storage::with_db(|conn| storage::set_refresh_token(conn, None)) {
            warn!("Could not clear persisted session: {}", e);
        }
        self.tokens.lock().take();
        self.set_anonymous();
        info!("Signed out");
    }

    fn install(&self, session: auth::AuthSession) -> Identity {
        let identity = Identity {
            uid: session.uid,
            display_name: session.display_name,
            email: session.email,
        };
        *self.tokens.lock() = Some(AuthTokens {
            id_token: session.id_token,
            refresh_token: session.refresh_token,
        });
        let _ = self.tx.send(Session::Authenticated(identity.clone()));
        identity
    }

    fn set_anonymous(&self) {
        let _ = self.tx.send(Session::Anonymous);
    }
}
