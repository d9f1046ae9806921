//! REST API: teams, admin login, draw generation, cup and league simulation.

mod auth;
mod error;
mod frontend;
mod handlers;

pub use auth::{
    grant_admin, is_admin, revoke, session_middleware, Admin, AdminGrants, ADMIN_SESSION_HOURS,
    SESSION_COOKIE,
};
pub use error::ApiError;
pub use frontend::frontend;
pub use handlers::configure;

use crate::config::Config;
use crate::state::DrawRegistry;
use crate::store::TeamStore;

/// Shared state handed to every handler.
pub struct AppState {
    pub store: TeamStore,
    pub draws: DrawRegistry,
    pub grants: AdminGrants,
    admin_password: String,
}

impl AppState {
    pub fn new(store: TeamStore, admin_password: impl Into<String>) -> Self {
        Self {
            store,
            draws: DrawRegistry::new(),
            grants: AdminGrants::new(),
            admin_password: admin_password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(TeamStore::new(&config.data_path), &config.admin_password)
    }

    pub fn check_password(&self, candidate: &str) -> bool {
        candidate == self.admin_password
    }
}
