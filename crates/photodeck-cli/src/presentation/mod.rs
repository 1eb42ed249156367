//! Shared CLI presentation utilities.
//!
//! Format-only: no domain transforms.

pub mod photo_display;
pub mod tables;

pub use photo_display::{print_history, print_photo_details, print_photo_table};
pub use tables::{format_optional, format_timestamp, print_separator, truncate_string};
