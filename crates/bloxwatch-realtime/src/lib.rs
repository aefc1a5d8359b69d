//! # bloxwatch-realtime
//!
//! The fan-out channel for BloxWatch. Provides:
//!
//! - Per-viewer connection handles backed by bounded mpsc queues
//! - A registry of connected viewers
//! - Typed server→client push messages (`SYNC`, `ADDED`, `REMOVED`,
//!   `UPDATED`, `LOG_UPDATED`)
//! - Best-effort broadcast: a slow or dead viewer never blocks the others
//!
//! Delivery is FIFO per viewer (one mpsc queue per connection); no ordering
//! guarantee is made across viewers.

pub mod channel;
pub mod handle;
pub mod message;

pub use channel::FanoutChannel;
pub use handle::{ViewerHandle, ViewerId};
pub use message::ServerMessage;
