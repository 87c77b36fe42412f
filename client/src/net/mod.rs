//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` wraps the transport with token and 401 handling, `api` holds the
//! endpoint calls, `types` defines the wire bodies and `error` the failure
//! taxonomy shared by all of them.

pub mod api;
pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
