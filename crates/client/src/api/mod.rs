//! Endpoint catalogue.
//!
//! Each module exposes one descriptor builder per backend endpoint and the
//! matching `ConsoleClient` method that executes it.

pub mod auth;
pub mod dept;
pub mod dict;
pub mod menu;
pub mod params;
pub mod role;
pub mod tenant;
pub mod user;
pub mod version;
