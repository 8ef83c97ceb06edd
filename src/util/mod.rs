//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Formatting and comparison helpers
//! are pure; `cookie` and `query` read ambient browser state only in hydrate
//! builds.

pub mod compare;
pub mod cookie;
pub mod format;
pub mod query;
