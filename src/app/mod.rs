//! Application layer: browser state, events and session flags.
//!
//! Sits between the presentation layer (or the CLI in `main.rs`) and the pure
//! logic in [`crate::content`]. Data flows one way:
//!
//! ```text
//! User Input → Event → handle_event → ContentBrowser mutation → compute_viewmodel
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event type and dispatch
//! - [`signal`]: One-shot flags shared within a session
//! - [`state`]: The browser and its view model computation

pub mod handler;
pub mod signal;
pub mod state;

pub use handler::{handle_event, Event};
pub use signal::OnceFlag;
pub use state::ContentBrowser;
