// src/lib.rs

//! Thrift Finder client library
//!
//! Typed REST client, bulk selection and application state for a thrift
//! store, garage sale and flea market discovery site.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod selection;
pub mod state;
pub mod utils;

pub use api::{ApiClient, UtilityClient};
pub use error::{AppError, Result};
pub use selection::{BulkSelection, SelectionStatus};
pub use state::{AppState, AppStore};
