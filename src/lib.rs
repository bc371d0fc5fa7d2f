//! `rpcload` - declarative load-test scenario configuration
//!
//! This library defines the YAML schema describing a load-test scenario
//! (target server, RPC services with example inputs, load pattern, rate
//! limits, optional TLS, free-form metadata) and the loader that turns a
//! scenario file into a typed [`config::Config`].
//!
//! The load-generation engine, network client, and CLI are separate
//! components; they consume the returned configuration read-only.

pub mod config;
pub mod error;
