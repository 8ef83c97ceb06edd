//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared interaction surfaces while reading/writing state
//! from Leptos context providers.

pub mod confirm_dialog;
