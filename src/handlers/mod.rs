pub mod admin;
pub mod health;
pub mod prices;

use crate::config::Config;
use crate::session::SessionStore;
use crate::store::PriceStore;
use std::sync::Arc;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<PriceStore>,
    pub sessions: Arc<SessionStore>,
}
