//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity resolves asynchronously after mount. Until it does, `user` is
//! `None` and identity-gated controls stay hidden.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// The current user once identity has resolved; `None` while loading.
    pub fn resolved_user(&self) -> Option<&User> {
        if self.loading {
            return None;
        }
        self.user.as_ref()
    }
}
