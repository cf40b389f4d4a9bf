// src/lib.rs
//! Visual design analysis engine for the app builder: color conversion and
//! harmonies, WCAG contrast scoring, palette synthesis, layout metrics and
//! auto layouts, plus a thin actix-web adapter over them.

use std::sync::Arc;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

pub use errors::DesignError;
pub use services::DesignAdvisor;

#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<DesignAdvisor>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            advisor: Arc::new(DesignAdvisor::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
