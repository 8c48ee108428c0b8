//! HTML to PDF service.
//!
//! Converts HTML documents into paginated PDFs by delegating to the
//! `wkhtmltopdf` command-line tool, and fills a service-contract template
//! with caller data before rendering it.
//!
//! ## Module Overview
//!
//! - `config`: environment-driven settings.
//! - `renderer`: workspace staging and the `wkhtmltopdf` subprocess.
//! - `templates`: the contract HTML and placeholder substitution.
//! - `services`: actix-web handlers and routing.
//! - `state`: application data shared by the handlers.

pub mod config;
pub mod renderer;
pub mod services;
pub mod state;
pub mod templates;
