//! HTTP request handlers, organized by domain.

pub mod health;
pub mod proxy;
pub mod roster;
pub mod ws;
