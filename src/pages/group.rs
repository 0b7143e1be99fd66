//! Group page: group details, member list, and the rating leaderboard.
//!
//! ARCHITECTURE
//! ============
//! Route-level coordinator between the `group_id` path parameter, the
//! document store, and `GroupPageState`. Rendering is delegated to
//! `components`; store access goes through `services::group`.
//!
//! ERROR HANDLING
//! ==============
//! Load, remove, and member-fetch failures are logged and otherwise ignored:
//! a failed load leaves the page empty, a failed remove leaves the member in
//! place, a failed member fetch leaves the add dialog open.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::add_member_dialog::AddMemberDialog;
use crate::components::leaderboard_panel::LeaderboardPanel;
use crate::components::member_list::MemberList;
use crate::config::StoreConfig;
use crate::error::ErrorCode;
use crate::net::store::SharedStore;
use crate::net::types::Member;
use crate::services::group::{self, GroupError, LoadedGroup};
use crate::state::auth::AuthState;
use crate::state::group::GroupPageState;

/// What happened when a load result reached the page state.
#[derive(Clone, Debug, PartialEq, Eq)]
enum LoadOutcome {
    Loaded { members: usize },
    NotFound,
    Failed { code: &'static str, message: String },
    Stale,
}

fn apply_load_result(
    page: &mut GroupPageState,
    seq: u64,
    result: Result<Option<LoadedGroup>, GroupError>,
) -> LoadOutcome {
    match result {
        Ok(loaded) => {
            let members = loaded.as_ref().map(|l| l.members.len());
            if !page.finish_load(seq, loaded) {
                return LoadOutcome::Stale;
            }
            members.map_or(LoadOutcome::NotFound, |members| LoadOutcome::Loaded { members })
        }
        Err(err) => {
            if !page.fail_load(seq) {
                return LoadOutcome::Stale;
            }
            LoadOutcome::Failed { code: err.error_code(), message: err.to_string() }
        }
    }
}

/// What happened when a remove or member-fetch result reached the page state.
#[derive(Clone, Debug, PartialEq, Eq)]
enum EditOutcome {
    Applied,
    Failed { code: &'static str, message: String },
    /// The page moved on to another group before the result arrived.
    Stale,
}

impl EditOutcome {
    fn failed(err: &GroupError) -> Self {
        Self::Failed { code: err.error_code(), message: err.to_string() }
    }
}

/// Drop `member_id` locally only after the remote removal succeeded.
fn apply_remove_result(
    page: &mut GroupPageState,
    group_id: &str,
    member_id: &str,
    result: Result<(), GroupError>,
) -> EditOutcome {
    match result {
        Ok(()) if shows_group(page, group_id) => {
            page.remove_member(member_id);
            EditOutcome::Applied
        }
        Ok(()) => EditOutcome::Stale,
        Err(err) => EditOutcome::failed(&err),
    }
}

/// Append a freshly added member; a failed fetch leaves the dialog open.
fn apply_member_fetch_result(
    page: &mut GroupPageState,
    group_id: &str,
    result: Result<Member, GroupError>,
) -> EditOutcome {
    match result {
        Ok(member) if shows_group(page, group_id) => {
            page.append_member(member);
            EditOutcome::Applied
        }
        Ok(_) => EditOutcome::Stale,
        Err(err) => EditOutcome::failed(&err),
    }
}

/// True when `group_id` is still the group shown by the page.
fn shows_group(page: &GroupPageState, group_id: &str) -> bool {
    page.group.as_ref().is_some_and(|g| g.id == group_id)
}

#[component]
pub fn GroupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let config = expect_context::<StoreConfig>();
    let params = use_params_map();
    let state = RwSignal::new(GroupPageState::default());

    let route_group_id = move || params.read().get("group_id");

    // Reload whenever the routed group id changes.
    let load_store = store.clone();
    let load_config = config.clone();
    Effect::new(move || {
        let next_id = route_group_id();
        let unchanged = state.with_untracked(|s| s.load_seq > 0 && s.group_id == next_id);
        if unchanged {
            return;
        }
        let mut seq = 0;
        state.update(|s| seq = s.begin_load(next_id.clone()));
        let Some(group_id) = next_id else {
            return;
        };

        let store = load_store.clone();
        let config = load_config.clone();
        leptos::task::spawn_local(async move {
            let result = group::load_group(store.as_ref(), &config, &group_id).await;
            let mut outcome = LoadOutcome::Stale;
            state.update(|s| outcome = apply_load_result(s, seq, result));
            match outcome {
                LoadOutcome::Loaded { members } => {
                    log::info!("group loaded: group_id={group_id} members={members}");
                }
                LoadOutcome::NotFound => log::warn!("group not found: group_id={group_id}"),
                LoadOutcome::Failed { code, message } => {
                    log::error!("group load failed: group_id={group_id} code={code} error={message}");
                }
                LoadOutcome::Stale => log::debug!("stale group load discarded: group_id={group_id} seq={seq}"),
            }
        });
    });

    let remove_store = store.clone();
    let remove_config = config.clone();
    let on_remove = Callback::new(move |member_id: String| {
        let Some(group_id) = state.with_untracked(|s| s.group.as_ref().map(|g| g.id.clone())) else {
            return;
        };
        let store = remove_store.clone();
        let config = remove_config.clone();
        leptos::task::spawn_local(async move {
            let result = group::remove_member(store.as_ref(), &config, &group_id, &member_id).await;
            let mut outcome = EditOutcome::Stale;
            state.update(|s| outcome = apply_remove_result(s, &group_id, &member_id, result));
            match outcome {
                EditOutcome::Applied => log::info!("member removed: group_id={group_id} member_id={member_id}"),
                EditOutcome::Failed { code, message } => log::error!(
                    "remove member failed: group_id={group_id} member_id={member_id} code={code} error={message}"
                ),
                EditOutcome::Stale => {
                    log::debug!("member removed after page left group: group_id={group_id} member_id={member_id}");
                }
            }
        });
    });

    let on_member_added = Callback::new(move |member_id: String| {
        let Some(group_id) = state.with_untracked(|s| s.group.as_ref().map(|g| g.id.clone())) else {
            return;
        };
        let store = store.clone();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = group::fetch_member(store.as_ref(), &config, &member_id).await;
            let mut outcome = EditOutcome::Stale;
            state.update(|s| outcome = apply_member_fetch_result(s, &group_id, result));
            match outcome {
                EditOutcome::Applied => log::info!("member added: group_id={group_id} member_id={member_id}"),
                EditOutcome::Failed { code, message } => log::error!(
                    "fetch added member failed: group_id={group_id} member_id={member_id} code={code} error={message}"
                ),
                EditOutcome::Stale => {
                    log::debug!("added member arrived after page left group: group_id={group_id} member_id={member_id}");
                }
            }
        });
    });

    let on_add = Callback::new(move |()| state.update(GroupPageState::open_add_dialog));
    let on_close = Callback::new(move |()| state.update(GroupPageState::close_add_dialog));

    let group_name = move || state.get().group.map(|g| g.name).unwrap_or_default();
    let group_description = move || state.get().group.map(|g| g.description).unwrap_or_default();

    view! {
        <div class="group-page">
            <Show when=move || state.get().loading>
                <p class="group-page__status">"Loading group..."</p>
            </Show>
            <Show when=move || state.get().not_found>
                <p class="group-page__status">"Group not found."</p>
            </Show>
            <Show when=move || state.get().group.is_some()>
                <section class="group-page__info">
                    <h2 class="group-page__name">{group_name}</h2>
                    <p class="group-page__description">{group_description}</p>
                    <MemberList state=state auth=auth on_remove=on_remove on_add=on_add/>
                    <LeaderboardPanel state=state/>
                </section>
                <AddMemberDialog
                    visible=Signal::derive(move || state.get().add_dialog_open)
                    on_close=on_close
                    group_id=Signal::derive(move || state.get().group_id.unwrap_or_default())
                    on_member_added=on_member_added
                />
            </Show>
        </div>
    }
}
