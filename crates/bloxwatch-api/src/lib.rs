//! # bloxwatch-api
//!
//! HTTP layer for BloxWatch. Exposes the roster sync endpoints, the
//! Roblox proxy pass-through endpoints, the WebSocket upgrade that feeds
//! the fan-out channel, and the health check.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
