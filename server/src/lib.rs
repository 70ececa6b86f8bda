// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use crate::config::ServerConfig;
use crate::sheets::SheetsClient;

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod registration;
pub mod sheets;
pub mod transport;

pub use errors::HandlerError;

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Sheets client with credentials resolved at construction
    pub sheets: SheetsClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let sheets = SheetsClient::new(&config.google);
        Self { config, sheets }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
