//! # web-helpers
//!
//! Presentation helpers shared by the Leptos web client: display formatting,
//! collection comparators, query-string and cookie access, the plugin
//! configuration route registry, and the confirmation dialog.
//!
//! Browser access is gated behind the `hydrate` feature. Without it every
//! browser-facing helper degrades to an empty, deterministic result so the
//! same code runs during SSR and in native tests.

pub mod components;
pub mod state;
pub mod util;

/// Install the browser console logger and panic hook.
///
/// Returns `true` when a logger was installed by this call. Non-hydrate
/// builds leave logger installation to the host and return `false`.
pub fn init_logging(level: log::Level) -> bool {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        console_log::init_with_level(level).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("console logger unavailable outside hydrate; requested level {level}");
        false
    }
}
