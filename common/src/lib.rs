//! Wire models shared between the PDF service and its clients.
//!
//! - `requests`: JSON payloads accepted by the render endpoints.
//! - `model`: contract fields, problem responses and health status.
//! - `util`: helpers for turning user input into safe HTML fragments.

pub mod model;
pub mod requests;
pub mod util;
