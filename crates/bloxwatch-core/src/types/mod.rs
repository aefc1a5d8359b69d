//! Domain types shared across the roster, realtime, and gateway layers.
//!
//! Wire field names are camelCase to match both the Roblox API response
//! shapes and the browser client's expectations.

pub mod game;
pub mod log;
pub mod presence;
pub mod user;

pub use game::{PlaceDetails, UniverseCreator, UniverseDetails};
pub use log::{ActivityLogEntry, LogKind};
pub use presence::{PresenceKind, PresenceSnapshot};
pub use user::{TrackedUser, parse_place_ref};
