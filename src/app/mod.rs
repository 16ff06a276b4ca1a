//! Application module.
//!
//! - [`app_state`]: the [`AppState`] struct holding all session state
//! - [`event_handler`]: the [`App`] struct and winit event routing
//! - [`update`]: the per-frame update and render step
//!
//! Events arrive at [`App`], mutate [`AppState`], and each
//! `RedrawRequested` turns the current state into one rendered frame.
//! Everything runs on the event-loop thread.

pub mod app_state;
pub mod event_handler;
pub mod update;

pub use app_state::AppState;
pub use event_handler::App;
