//! Flohmarkt Core - Shared types library.
//!
//! This crate provides the pieces of the admin panel that never touch the
//! network:
//! - `admin` - Admin view controller, REST client and HTTP host
//! - `cli` - Terminal console for the same admin operations
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, statuses and roles
//! - [`models`] - Product, category and user records as the backend sends them
//! - [`format`] - `ar-EG` style number and date formatting
//! - [`search`] - Live substring filter over product cards
//! - [`upload`] - Drag/drop upload area and file preview

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod format;
pub mod models;
pub mod search;
pub mod types;
pub mod upload;

pub use models::*;
pub use types::*;
