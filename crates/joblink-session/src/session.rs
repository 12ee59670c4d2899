//! In-memory session state.

use joblink_models::User;

/// Authentication state visible to the view layer.
///
/// Owned by the session store and mutated only through its actions;
/// consumers read snapshots or subscribe to changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The authenticated user, if any
    pub current_user: Option<User>,

    /// True until startup hydration has resolved
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_user: None,
            loading: true,
        }
    }
}

impl Session {
    /// Whether a user is signed in. Derived from `current_user`; never
    /// tracked separately.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
