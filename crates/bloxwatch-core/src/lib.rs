//! # bloxwatch-core
//!
//! Core crate for BloxWatch. Contains configuration schemas, the domain
//! types shared by the roster/realtime/gateway layers, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other BloxWatch crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
