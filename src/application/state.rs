// src/application/state.rs

use std::sync::{Arc, RwLock};

use crate::config::CatalogConfig;
use crate::domain::ViewParams;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::services::CatalogService;

/// Everything the display layer needs to drive the catalog.
///
/// The canonical collection lives inside `catalog_service`; the view
/// parameters live here and never touch the network.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub catalog_service: Arc<CatalogService>,
    view: RwLock<ViewParams>,
}

impl AppState {
    pub fn new(catalog_service: Arc<CatalogService>, event_bus: Arc<EventBus>) -> Self {
        Self {
            event_bus,
            catalog_service,
            view: RwLock::new(ViewParams::default()),
        }
    }

    /// Wire the HTTP-backed service from configuration
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());
        let catalog_service = Arc::new(CatalogService::from_config(config, Arc::clone(&event_bus))?);
        Ok(Self::new(catalog_service, event_bus))
    }

    pub fn view_params(&self) -> ViewParams {
        self.view.read().unwrap().clone()
    }

    /// Apply `change` to the view parameters and return the result
    pub fn update_view<F>(&self, change: F) -> ViewParams
    where
        F: FnOnce(&mut ViewParams),
    {
        let mut view = self.view.write().unwrap();
        change(&mut view);
        view.clone()
    }
}
