//! # bloxwatch-roster
//!
//! The authoritative in-memory roster store. Owns the tracked-user list
//! and the bounded activity log, serializes all mutations behind a single
//! mutex, and emits change deltas into the fan-out channel after each
//! committed mutation.
//!
//! State lives for the process lifetime only; a restart starts from an
//! empty roster and an empty log.

pub mod history;
pub mod store;

pub use history::ActivityHistory;
pub use store::{RosterSnapshot, RosterStore};
