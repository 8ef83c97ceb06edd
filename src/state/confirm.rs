//! Pending confirmation prompt state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any view can ask the user to confirm a destructive action by storing a
//! request here; the `ConfirmDialog` component renders it and runs the
//! callback on the affirmative button.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use leptos::prelude::*;

/// Text and styling for a confirmation prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub text: String,
    pub yes_text: String,
    pub yes_class: String,
    pub no_text: String,
    /// Render `text` as HTML. Callers setting this must have escaped any
    /// user-supplied content in `text`.
    pub escaped_html: bool,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            text: "Are you sure?".to_owned(),
            yes_text: "Yes".to_owned(),
            yes_class: "btn-danger".to_owned(),
            no_text: "Cancel".to_owned(),
            escaped_html: false,
        }
    }
}

impl ConfirmOptions {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }
}

/// A prompt waiting for the user's answer.
#[derive(Clone)]
pub struct ConfirmRequest {
    pub options: ConfirmOptions,
    pub on_confirm: Callback<()>,
}

/// At most one prompt is open; a new request replaces the current one.
#[derive(Clone, Default)]
pub struct ConfirmState {
    pub pending: Option<ConfirmRequest>,
}

impl ConfirmState {
    pub fn request(&mut self, options: ConfirmOptions, on_confirm: Callback<()>) {
        self.pending = Some(ConfirmRequest { options, on_confirm });
    }

    pub fn dismiss(&mut self) {
        self.pending = None;
    }

    /// Close the prompt and hand back its request so the caller can run the
    /// callback outside any state borrow.
    pub fn take(&mut self) -> Option<ConfirmRequest> {
        self.pending.take()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}

/// Open a confirmation prompt on the shared state signal.
pub fn confirm<F>(state: RwSignal<ConfirmState>, options: ConfirmOptions, on_confirm: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let on_confirm = Callback::new(move |()| on_confirm());
    state.update(|s| s.request(options, on_confirm));
}

/// Answer the open prompt affirmatively. Returns `false` if none was open.
pub fn accept(state: RwSignal<ConfirmState>) -> bool {
    match state.try_update(ConfirmState::take).flatten() {
        Some(request) => {
            request.on_confirm.run(());
            true
        }
        None => false,
    }
}
