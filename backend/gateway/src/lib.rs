//! HTTP gateway for snapfind.
//!
//! Wires the upload store, vision describer, and marketplace synthesizer
//! into a three-route API, translating every pipeline failure into the
//! uniform `{error}` response shape.

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use server::{build_router, start_server};
pub use state::AppState;
