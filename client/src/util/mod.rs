//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and store
//! logic so both can run against in-memory fakes in tests.

pub mod navigation;
pub mod storage;
