//! Shared application state handed to every request handler.
//!
//! `AppState` is built once in `main.rs` and registered as `web::Data`, so the
//! renderer and its settings are injected explicitly instead of living in a
//! global.

use crate::config::AppConfig;
use crate::renderer::PdfRenderer;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Renderer used by all `/api/pdf` handlers.
    pub renderer: PdfRenderer,
    /// Reported by `GET /health`.
    pub service_name: String,
    /// Cancelled on shutdown. Each render receives a child token, so stopping
    /// the server kills renders that are still running.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(renderer: PdfRenderer, service_name: impl Into<String>) -> Self {
        Self {
            renderer,
            service_name: service_name.into(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let renderer = PdfRenderer::new(&config.renderer_bin, &config.temp_root)
            .with_timeout(config.render_timeout);
        Self::new(renderer, &config.service_name)
    }

    /// Token for one render; cancelled together with the server.
    pub fn render_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
