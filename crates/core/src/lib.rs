//! PlaceScope core: everything the desktop UI needs that is not rendering.
//!
//! This crate talks to a GeoDB-style places API (prefix search over city
//! names, capped at a small per-request limit) and owns the pure logic
//! around it: response models, environment configuration, the HTTP client,
//! the error taxonomy, and the client-side pagination math.
//!
//! # Modules
//!
//! - [`types`]: API response model and the flag-image URL helper
//! - [`config`]: environment configuration (API URL and key)
//! - [`client`]: HTTP client issuing one GET per search
//! - [`error`]: error taxonomy for failed fetches
//! - [`fetch`]: bookkeeping for overlapping fetches
//! - [`pagination`]: page math and numeric input clamping

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pagination;
pub mod types;

pub use client::PlacesClient;
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use fetch::FetchLedger;
