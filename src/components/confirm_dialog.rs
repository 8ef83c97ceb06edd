//! Modal dialog asking the user to confirm an action.

use leptos::prelude::*;

use crate::state::confirm::{ConfirmOptions, ConfirmState, accept};

/// Renders the pending prompt from `state`, or nothing when none is open.
#[component]
pub fn ConfirmDialog(state: RwSignal<ConfirmState>) -> impl IntoView {
    let on_cancel = move |_| state.update(ConfirmState::dismiss);
    let on_yes = move |_| {
        accept(state);
    };

    move || {
        let options: Option<ConfirmOptions> = state.with(|s| s.pending.as_ref().map(|r| r.options.clone()));
        options.map(|options| {
            let body = if options.escaped_html {
                view! { <p class="dialog__text" inner_html=options.text></p> }.into_any()
            } else {
                view! { <p class="dialog__text">{options.text}</p> }.into_any()
            };
            let yes_class = format!("btn {}", options.yes_class);

            view! {
                <div class="dialog-backdrop" on:click=on_cancel>
                    <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                        {body}
                        <div class="dialog__actions">
                            <button class="btn" on:click=on_cancel>
                                {options.no_text}
                            </button>
                            <button class=yes_class on:click=on_yes>
                                {options.yes_text}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
