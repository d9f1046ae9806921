//! Admin session gate.
//!
//! Logging in stores a grant (nonce + expiry deadline) in the caller's cookie
//! session and records the nonce server-side in [`AdminGrants`]. Admin handlers
//! take the [`Admin`] extractor, which only resolves while the deadline is in
//! the future and the nonce is still live. Logging out forgets the nonce, so a
//! copy of the old cookie is worthless.

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::models::DrawId;
use crate::state::LockError;
use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionExt, SessionMiddleware};
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::Key;
use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::{ready, Ready};
use std::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "match.sid";

/// How long an admin login stays valid.
pub const ADMIN_SESSION_HOURS: i64 = 4;

const ADMIN_KEY: &str = "admin";
const DRAW_KEY: &str = "draw";

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct AdminGrant {
    nonce: Uuid,
    until: DateTime<Utc>,
}

/// Live admin grants: nonce -> deadline. Only grants listed here are honoured.
#[derive(Default)]
pub struct AdminGrants {
    live: RwLock<HashMap<Uuid, DateTime<Utc>>>,
}

impl AdminGrants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh grant, dropping any that have already expired.
    fn issue(&self) -> Result<AdminGrant, LockError> {
        let now = Utc::now();
        let grant = AdminGrant {
            nonce: Uuid::new_v4(),
            until: now + Duration::hours(ADMIN_SESSION_HOURS),
        };
        let mut g = self.live.write().map_err(|_| LockError)?;
        g.retain(|_, until| *until > now);
        g.insert(grant.nonce, grant.until);
        Ok(grant)
    }

    fn is_live(&self, grant: &AdminGrant) -> bool {
        match self.live.read() {
            Ok(g) => g.get(&grant.nonce).is_some_and(|until| *until > Utc::now()),
            Err(_) => false,
        }
    }

    fn forget(&self, nonce: Uuid) -> Result<(), LockError> {
        self.live.write().map_err(|_| LockError)?.remove(&nonce);
        Ok(())
    }

    /// Number of grants currently recorded (expired ones included until the next login).
    pub fn len(&self) -> Result<usize, LockError> {
        Ok(self.live.read().map_err(|_| LockError)?.len())
    }
}

/// Cookie-backed sessions: http-only `match.sid`, 4 hour lifetime.
/// `key` must be shared by every worker so cookies stay readable across them.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_http_only(true)
        .cookie_secure(cookie_secure)
        .session_lifecycle(
            PersistentSession::default().session_ttl(CookieDuration::hours(ADMIN_SESSION_HOURS)),
        )
        .build()
}

fn session_grant(session: &Session) -> Option<AdminGrant> {
    match session.get::<AdminGrant>(ADMIN_KEY) {
        Ok(grant) => grant,
        Err(e) => {
            log::warn!("Unreadable admin grant in session: {}", e);
            None
        }
    }
}

/// Whether this session holds an unexpired grant that has not been revoked.
pub fn is_admin(session: &Session, grants: &AdminGrants) -> bool {
    session_grant(session).is_some_and(|grant| grant.until > Utc::now() && grants.is_live(&grant))
}

/// Mark the session as admin until the grant expires.
pub fn grant_admin(session: &Session, grants: &AdminGrants) -> Result<(), ApiError> {
    let grant = grants.issue()?;
    session.renew();
    session
        .insert(ADMIN_KEY, grant)
        .map_err(|e| ApiError::Session(e.to_string()))
}

/// Forget the session's grant server-side, then drop the session and expire the cookie.
pub fn revoke(session: &Session, grants: &AdminGrants) -> Result<(), ApiError> {
    if let Some(grant) = session_grant(session) {
        grants.forget(grant.nonce)?;
    }
    session.purge();
    Ok(())
}

/// Draw this session generated last, if any.
pub fn session_draw(session: &Session) -> Option<DrawId> {
    session.get::<DrawId>(DRAW_KEY).ok().flatten()
}

pub fn remember_draw(session: &Session, id: DrawId) -> Result<(), ApiError> {
    session
        .insert(DRAW_KEY, id)
        .map_err(|e| ApiError::Session(e.to_string()))
}

/// Capability token: only extractable from a request with a live admin session.
#[derive(Clone, Copy, Debug)]
pub struct Admin;

impl FromRequest for Admin {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<Data<AppState>>() else {
            log::error!("AppState missing from app data");
            return ready(Err(ApiError::Forbidden));
        };
        let session = req.get_session();
        ready(if is_admin(&session, &state.grants) {
            Ok(Admin)
        } else {
            Err(ApiError::Forbidden)
        })
    }
}
