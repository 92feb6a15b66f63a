//! Status channel to the page embedding the scene in an iframe.
//!
//! One-way JSON-RPC 2.0 notifications posted to the parent window. The
//! scene never reads messages back; buttons are its only input.
//!
//! ```text
//! Page (parent window)  <── postMessage ──  Bevy (iframe)
//! ```
//!
//! Notifications:
//!
//! - `loading_state {manifest, model, environment}`: each value is one of
//!   `pending`, `loaded`, `skipped`, `failed`. Sent whenever it changes
//!   during loading.
//! - `fps_update {fps}`: smoothed frame rate, twice a second.

pub mod web_rpc;
