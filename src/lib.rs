//! signup-api - static JSON greeting routes and a user signup endpoint backed by SQLite

pub mod config;
pub mod error;
pub mod types;

pub mod store;
pub mod api;
pub mod commands;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
