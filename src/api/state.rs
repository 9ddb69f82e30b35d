//! Application state for the parking charge API.

use std::sync::Arc;

use crate::config::TariffConfig;

/// Shared application state.
///
/// Holds the tariff every request is priced under. The tariff is read-only,
/// so cloning the state only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    tariff: Arc<TariffConfig>,
}

impl AppState {
    /// Creates a new application state with the given tariff.
    pub fn new(tariff: TariffConfig) -> Self {
        Self {
            tariff: Arc::new(tariff),
        }
    }

    /// Returns the tariff.
    pub fn tariff(&self) -> &TariffConfig {
        &self.tariff
    }
}
