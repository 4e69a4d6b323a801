//! The authenticated-session store: single source of truth for who is logged
//! in, mirrored into a durable browser slot so identity survives reloads.

use crate::api::{self, ApiError};
use crate::models::User;

const SESSION_KEY: &str = "user";

/// The durable slot behind the session store. Writers always replace the
/// whole slot; there is no partial merge.
pub trait SessionRepository {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// `window.localStorage` implementation. Storage access can fail in odd
/// embeddings (sandboxed iframes, disabled storage); every failure collapses
/// to "no session" on read and a dropped write on save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserSession;

impl SessionRepository for BrowserSession {
    fn load(&self) -> Option<String> {
        let storage = local_storage()?;
        storage.get_item(SESSION_KEY).ok()?
    }

    fn save(&self, raw: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(SESSION_KEY, raw);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// In-memory identity plus its durable mirror. Every mutation writes through
/// to the repository in the same call; the two are never allowed to drift.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore<R: SessionRepository> {
    repo: R,
    user: Option<User>,
}

pub type Session = SessionStore<BrowserSession>;

impl<R: SessionRepository> SessionStore<R> {
    /// Restores identity from the durable slot. An absent or unparsable slot
    /// yields an unauthenticated store; malformed data is discarded, never
    /// an error.
    pub fn initialize(repo: R) -> Self {
        let user = repo
            .load()
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self { repo, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn login(&mut self, user: User) {
        self.replace(user);
    }

    /// Idempotent: clearing an already-empty session is a no-op.
    pub fn logout(&mut self) {
        self.repo.clear();
        self.user = None;
    }

    /// Refetches the current identity by id and replaces both copies on
    /// success. On failure identity is left untouched and the error goes
    /// back to the caller.
    pub async fn refresh(&mut self, user_id: i64) -> Result<(), ApiError> {
        let user = api::fetch_user(user_id).await?;
        self.replace(user);
        Ok(())
    }

    fn replace(&mut self, user: User) {
        if let Ok(raw) = serde_json::to_string(&user) {
            self.repo.save(&raw);
        }
        self.user = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared-slot fake so "reload" can be simulated by re-initializing a
    /// second store over the same slot.
    #[derive(Clone, Default)]
    struct MemorySession {
        slot: Rc<RefCell<Option<String>>>,
    }

    impl SessionRepository for MemorySession {
        fn load(&self) -> Option<String> {
            self.slot.borrow().clone()
        }

        fn save(&self, raw: &str) {
            *self.slot.borrow_mut() = Some(raw.to_string());
        }

        fn clear(&self) {
            *self.slot.borrow_mut() = None;
        }
    }

    fn user(id: i64, premium: bool) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            name: Some(format!("User {id}")),
            is_premium: premium,
        }
    }

    #[test]
    fn empty_slot_starts_unauthenticated() {
        let store = SessionStore::initialize(MemorySession::default());
        assert_eq!(store.user(), None);
    }

    #[test]
    fn login_survives_reinitialization() {
        let repo = MemorySession::default();
        let mut store = SessionStore::initialize(repo.clone());
        store.login(user(7, false));

        let reloaded = SessionStore::initialize(repo);
        assert_eq!(reloaded.user(), Some(&user(7, false)));
    }

    #[test]
    fn logout_clears_slot_and_memory() {
        let repo = MemorySession::default();
        let mut store = SessionStore::initialize(repo.clone());
        store.login(user(7, false));
        store.logout();

        assert_eq!(store.user(), None);
        assert_eq!(SessionStore::initialize(repo).user(), None);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = SessionStore::initialize(MemorySession::default());
        store.logout();
        store.logout();
        assert_eq!(store.user(), None);
    }

    #[test]
    fn malformed_slot_reads_as_absent() {
        let repo = MemorySession::default();
        repo.save("{not json at all");
        let store = SessionStore::initialize(repo);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn replace_overwrites_the_whole_slot() {
        let repo = MemorySession::default();
        let mut store = SessionStore::initialize(repo.clone());
        store.login(user(7, false));
        store.login(user(7, true));

        let reloaded = SessionStore::initialize(repo);
        assert!(reloaded.user().map(|u| u.is_premium).unwrap_or(false));
    }
}
