//! Configuration module
//!
//! Loads load-test scenario files and decodes them into the typed schema:
//! target server, services and methods, load pattern, rate limits,
//! optional TLS settings, and free-form metadata.

pub mod loader;
pub mod schema;

pub use loader::{load, load_from_str};
pub use schema::*;
