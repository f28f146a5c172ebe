// src/models/mod.rs

//! Domain models for the client library.
//!
//! Records exchanged with the backend, the serverless utility payloads,
//! and the configuration structures.

mod article;
mod config;
mod event;
mod store;
mod utility;

// Re-export all public types
pub use article::Article;
pub use config::{ApiConfig, Config, StateConfig};
pub use event::{Event, EventCategory};
pub use store::{OpeningHours, Store};
pub use utility::{
    ApiKeyUpdate, ConnectionStatus, KeyStatus, KeyUpdateAck, RssValidation,
    RssValidationRequest,
};
