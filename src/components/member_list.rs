//! Member chips with the admin badge and creator-only edit controls.
//!
//! DESIGN
//! ======
//! Visibility of the add and remove controls comes from `util::access`; this
//! component only renders what those checks allow and forwards clicks.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::state::auth::AuthState;
use crate::state::group::GroupPageState;
use crate::util::access::{can_remove_member, is_creator, is_group_admin};

/// Member list for the loaded group.
#[component]
pub fn MemberList(
    state: RwSignal<GroupPageState>,
    auth: RwSignal<AuthState>,
    on_remove: Callback<String>,
    on_add: Callback<()>,
) -> impl IntoView {
    let is_admin = move || {
        let user = auth.get().resolved_user().cloned();
        state
            .get()
            .group
            .is_some_and(|g| is_group_admin(&g, user.as_ref()))
    };

    view! {
        <div class="member-list">
            {move || {
                let page = state.get();
                let user = auth.get().resolved_user().cloned();
                let Some(group) = page.group else {
                    return Vec::new();
                };
                page.members
                    .into_iter()
                    .map(|member| {
                        let admin = is_creator(&group, &member.id);
                        let removable = can_remove_member(&group, user.as_ref(), &member.id);
                        let member_id = member.id.clone();
                        view! {
                            <div class="member-chip">
                                <Avatar src=member.avatar name=member.name.clone() size=40/>
                                <div class="member-chip__body">
                                    <span class="member-chip__name">{member.name}</span>
                                    {admin.then(|| view! { <span class="member-chip__badge">"Admin"</span> })}
                                    {removable.then(|| {
                                        view! {
                                            <button
                                                class="member-chip__remove"
                                                title="Remove member"
                                                aria-label="Remove member"
                                                on:click=move |_| on_remove.run(member_id.clone())
                                            >
                                                "⊖"
                                            </button>
                                        }
                                    })}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=is_admin>
                <button class="btn member-list__add" title="Add Member" on:click=move |_| on_add.run(())>
                    "+ Add Member"
                </button>
            </Show>
        </div>
    }
}
