use std::ops::Deref;
use std::sync::Arc;

use api::catalog;
use api::catalog::Service;
use api::catalog::Vendor;
use chrono::DateTime;
use chrono::Utc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub services: Vec<Service>,
    pub vendors: Vec<Vendor>,
    pub promo_ends: DateTime<Utc>,
}

/// Stable, non-reactive application data: the catalog snapshot the page was
/// "delivered" with. Mutable UI state lives in [`crate::AppStateMut`].
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new() -> Self {
        Self(Arc::new(AppStateData {
            services: catalog::services(),
            vendors: catalog::vendors(),
            promo_ends: catalog::promo_ends(),
        }))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
