//! HTTP client for the FibreFlo timesheet API.
//!
//! Implements `fibreflo_core`'s repository port over the remote JSON API:
//! construct a [`FibrefloClient`] with the signed-in user's bearer
//! [`Credentials`] and hand it to the core's service layer.

mod auth;
mod client;
mod conversions;
mod repository;
mod url;
pub mod wire;

pub use auth::Credentials;
pub use client::{FetchError, FibrefloClient};
pub use url::{ApiUrl, DEFAULT_API_URL};
