//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::StoreConfig;
use crate::net::store::SharedStore;
use crate::pages::group::GroupPage;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Store used when the host does not inject one: the REST store in the
/// browser, an empty in-memory store elsewhere.
fn default_store(config: &StoreConfig) -> SharedStore {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::net::http_store::HttpStore::new(config.base_url.clone()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Arc::new(crate::net::memory_store::MemoryStore::new())
    }
}

/// Root application component.
///
/// Provides auth, store, and config contexts and sets up client-side routing.
#[component]
pub fn App(#[prop(optional)] store: Option<SharedStore>) -> impl IntoView {
    provide_meta_context();

    let config = StoreConfig::from_env();
    let store = store.unwrap_or_else(|| default_store(&config));
    let auth = RwSignal::new(AuthState { user: None, loading: cfg!(feature = "hydrate") });

    provide_context(auth);
    provide_context(store);
    provide_context(config);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        match &user {
            Some(u) => log::info!("current user resolved: uid={}", u.uid),
            None => log::info!("no authenticated user"),
        }
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/groupboard.css"/>
        <Title text="Groupboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("group"), ParamSegment("group_id")) view=GroupPage/>
            </Routes>
        </Router>
    }
}
