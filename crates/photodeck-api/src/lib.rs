#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPhotoClient is meant to be used through PhotoApiPort, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPhotoClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, PhotoApiConfig};

// Internal error, exposed for construction failures
pub use error::ApiError;
