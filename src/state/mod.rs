//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`confirm`, `plugin_config`) so components can
//! depend on small focused models provided through Leptos context.

pub mod confirm;
pub mod plugin_config;
