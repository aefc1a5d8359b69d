//! # bloxwatch-gateway
//!
//! Stateless request translator for the public Roblox web APIs (Users,
//! Presence, Thumbnails, Games). Holds no roster state: callers fetch
//! enrichment data here first, then commit it through the roster store.
//!
//! Every upstream failure — non-2xx status, malformed body, or timeout —
//! is normalized into an `Upstream` [`bloxwatch_core::AppError`] carrying
//! the mirrored HTTP status and the first upstream error message. The
//! gateway never retries; callers may re-issue a manual refresh.

pub mod client;
pub mod types;

pub use client::RobloxGateway;
pub use types::{RobloxUser, ThumbnailEntry};
