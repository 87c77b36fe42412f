//! Shared UI building blocks used by the pages.

pub mod form_status;
pub mod route_guard;
