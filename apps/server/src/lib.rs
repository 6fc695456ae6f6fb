//! Meeple backend server
//!
//! Backend for the meeple board game night app:
//! - Board game search proxied to the BoardGameGeek XML API
//! - Single game lookup backed by an in-process detail cache
//! - Migration configuration for the external schema tooling

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod migration;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
