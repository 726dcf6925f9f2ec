use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use moka::future::Cache;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::types::user_session::UserSession;

pub const SESSION_COOKIE: &str = "mbta_finder_session";

const KEY_CONTEXT: &str = "mbta-finder session cookie signing key v1";

/// Stretches the configured secret into a full 64-byte signing key. Without a
/// secret every process start gets a fresh random key, which drops existing
/// sessions.
pub fn cookie_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => {
            let mut hasher = blake3::Hasher::new_derive_key(KEY_CONTEXT);
            hasher.update(secret.as_bytes());

            let mut key = [0u8; 64];
            hasher.finalize_xof().fill(&mut key);
            Key::from(&key)
        }
        None => {
            warn!("SESSION_SECRET not set, sessions will not survive a restart");
            Key::generate()
        }
    }
}

/// Server-side session state. The browser only holds a signed session id, so
/// the cookie stays the same size however much history a session collects.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<Uuid, UserSession>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, idle_timeout: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle_timeout)
            .build();

        SessionStore { sessions }
    }

    fn session_id(jar: &SignedCookieJar) -> Option<Uuid> {
        let cookie = jar.get(SESSION_COOKIE)?;

        match Uuid::parse_str(cookie.value()) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Discarding session cookie with invalid id: {}", e);
                None
            }
        }
    }

    /// A missing, tampered or expired session id yields an empty session.
    pub async fn load(&self, jar: &SignedCookieJar) -> UserSession {
        let Some(id) = Self::session_id(jar) else {
            return UserSession::default();
        };

        self.sessions.get(&id).await.unwrap_or_else(|| {
            debug!("No stored session for {}", id);
            UserSession::default()
        })
    }

    /// Saves `session` under the jar's id, issuing a new id when the request
    /// had none.
    pub async fn save(&self, jar: SignedCookieJar, session: UserSession) -> SignedCookieJar {
        let id = Self::session_id(&jar).unwrap_or_else(Uuid::new_v4);
        self.sessions.insert(id, session).await;

        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);

        jar.add(cookie)
    }
}
