//! Document-store configuration.
//!
//! The browser has no process environment, so overrides are read at compile
//! time with `option_env!`. Unset or blank values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORE_URL: &str = "/api/store";
pub const DEFAULT_GROUPS_COLLECTION: &str = "groups";
pub const DEFAULT_USERS_COLLECTION: &str = "users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the REST document API, without a trailing slash.
    pub base_url: String,
    pub groups_collection: String,
    pub users_collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_owned(),
            groups_collection: DEFAULT_GROUPS_COLLECTION.to_owned(),
            users_collection: DEFAULT_USERS_COLLECTION.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `GROUPBOARD_STORE_URL`: default `/api/store`
    /// - `GROUPBOARD_GROUPS_COLLECTION`: default `groups`
    /// - `GROUPBOARD_USERS_COLLECTION`: default `users`
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("GROUPBOARD_STORE_URL"),
            option_env!("GROUPBOARD_GROUPS_COLLECTION"),
            option_env!("GROUPBOARD_USERS_COLLECTION"),
        )
    }

    fn from_overrides(base_url: Option<&str>, groups: Option<&str>, users: Option<&str>) -> Self {
        let base_url = non_blank(base_url)
            .unwrap_or(DEFAULT_STORE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self {
            base_url,
            groups_collection: non_blank(groups)
                .unwrap_or(DEFAULT_GROUPS_COLLECTION)
                .to_owned(),
            users_collection: non_blank(users)
                .unwrap_or(DEFAULT_USERS_COLLECTION)
                .to_owned(),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
