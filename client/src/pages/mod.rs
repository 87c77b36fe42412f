//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and delegates session work to
//! `state::auth::AuthStore`, pulled from context.

pub mod dashboard;
pub mod forgot_password;
pub(crate) mod forms;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reset_password;
