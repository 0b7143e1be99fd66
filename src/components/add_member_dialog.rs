//! Modal dialog that adds an existing user to the group by user id.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog owns the membership write. On success it reports the new
//! member id through `on_member_added`; the page then fetches the member's
//! record and closes the dialog.

#[cfg(test)]
#[path = "add_member_dialog_test.rs"]
mod add_member_dialog_test;

use leptos::prelude::*;

use crate::config::StoreConfig;
use crate::error::ErrorCode;
use crate::net::store::SharedStore;
use crate::services::group::{self, GroupError};

/// Trimmed user id from the input box, or `None` if blank.
pub fn normalize_member_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Inline message shown when the write fails.
pub fn add_failed_message(err: &GroupError) -> String {
    match err {
        GroupError::MemberNotFound(id) => format!("No user with id {id}"),
        _ => "Could not add member, try again".to_owned(),
    }
}

#[component]
pub fn AddMemberDialog(
    #[prop(into)] visible: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] group_id: Signal<String>,
    on_member_added: Callback<String>,
) -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let config = expect_context::<StoreConfig>();
    let member_id = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Start clean each time the dialog opens.
    Effect::new(move || {
        if visible.get() {
            member_id.set(String::new());
            error.set(None);
            pending.set(false);
        }
    });

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let Some(new_id) = normalize_member_id(&member_id.get_untracked()) else {
            return;
        };
        let group_id = group_id.get_untracked();
        let store = store.clone();
        let config = config.clone();
        pending.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match group::add_member(store.as_ref(), &config, &group_id, &new_id).await {
                Ok(()) => {
                    log::info!("member added: group_id={group_id} member_id={new_id}");
                    on_member_added.run(new_id);
                }
                Err(e) => {
                    log::error!(
                        "add member failed: group_id={group_id} member_id={new_id} code={} error={e}",
                        e.error_code()
                    );
                    error.set(Some(add_failed_message(&e)));
                }
            }
            pending.set(false);
        });
    });

    view! {
        <Show when=move || visible.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Add Member"</h2>
                    <label class="dialog__label">
                        "User ID"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || member_id.get()
                            on:input=move |ev| member_id.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit.run(());
                                }
                            }
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || pending.get()
                            on:click=move |_| submit.run(())
                        >
                            "Add"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
