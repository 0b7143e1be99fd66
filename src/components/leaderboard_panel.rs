//! Ranked leaderboard for the group's members.

#[cfg(test)]
#[path = "leaderboard_panel_test.rs"]
mod leaderboard_panel_test;

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::net::types::Rating;
use crate::state::group::GroupPageState;
use crate::util::leaderboard::Medal;

/// Rating line shown under each leaderboard name.
pub fn rating_label(rating: Rating) -> String {
    format!("Contest Rating: {}", rating.display())
}

#[component]
pub fn LeaderboardPanel(state: RwSignal<GroupPageState>) -> impl IntoView {
    view! {
        <section class="leaderboard">
            <h2 class="leaderboard__title">"Leaderboard"</h2>
            <ul class="leaderboard__list">
                {move || {
                    state
                        .get()
                        .leaderboard()
                        .into_iter()
                        .map(|entry| {
                            let medal = entry.medal.map_or("", Medal::glyph);
                            let rating = rating_label(entry.member.rating);
                            view! {
                                <li class="leaderboard__row" data-rank=entry.rank.to_string()>
                                    <span class="leaderboard__medal">{medal}</span>
                                    <Avatar src=entry.member.avatar name=entry.member.name.clone() size=48/>
                                    <div class="leaderboard__body">
                                        <span class="leaderboard__name">{entry.member.name}</span>
                                        <span class="leaderboard__rating">{rating}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
