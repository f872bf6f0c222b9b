//! Durable session persistence.
//!
//! The session lives in client key-value storage as three entries: access
//! token, refresh token, and a JSON identity bundle. The invariant is
//! all-or-nothing: a read that finds the entries incomplete or the bundle
//! unparseable clears everything and reports the session as absent, so a
//! corrupted store heals itself on the next read. No other code path may
//! touch these keys.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "took_auth_token";
const REFRESH_TOKEN_KEY: &str = "took_refresh_token";
const USER_INFO_KEY: &str = "took_user_info";

/// The persisted session: token pair plus member identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub member_id: i64,
    pub team_id: i64,
    pub team_name: String,
}

/// Identity bundle persisted under [`USER_INFO_KEY`], camelCase on disk
/// to match what the backend hands out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfo {
    member_id: i64,
    team_id: i64,
    team_name: String,
}

/// Raw key-value storage the store runs on.
///
/// The production backend is browser localStorage; tests and the SSR
/// shell use [`MemoryStorage`].
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser localStorage backend. Every operation degrades to a no-op when
/// the window or storage is unavailable (e.g. storage disabled); the
/// session then simply reads as absent.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The one owner of the persisted session entries.
#[derive(Debug, Default)]
pub struct SessionStore<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Read the persisted session.
    ///
    /// Fails soft: missing entries or an unparseable identity bundle
    /// clear the whole store and return `None`. The token is a cache of
    /// server-issued state, so dropping it on corruption only costs the
    /// user a re-login.
    pub fn read(&self) -> Option<Session> {
        let access_token = self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let refresh_token = self.backend.get(REFRESH_TOKEN_KEY);
        let raw_info = self.backend.get(USER_INFO_KEY);

        let (Some(access_token), Some(refresh_token), Some(raw_info)) =
            (access_token, refresh_token, raw_info)
        else {
            self.clear();
            return None;
        };

        match serde_json::from_str::<UserInfo>(&raw_info) {
            Ok(info) => Some(Session {
                access_token,
                refresh_token,
                member_id: info.member_id,
                team_id: info.team_id,
                team_name: info.team_name,
            }),
            Err(err) => {
                log::warn!("session identity bundle unparseable, clearing session: {err}");
                self.clear();
                None
            }
        }
    }

    /// Persist `session`, overwriting any previous one.
    ///
    /// The identity bundle is written last: a crash mid-write leaves
    /// tokens without identity, which the next `read` treats as absent
    /// and clears.
    pub fn write(&self, session: &Session) {
        let info = UserInfo {
            member_id: session.member_id,
            team_id: session.team_id,
            team_name: session.team_name.clone(),
        };
        // UserInfo serialization cannot fail; fall back to clearing if it ever does.
        let Ok(raw_info) = serde_json::to_string(&info) else {
            self.clear();
            return;
        };
        self.backend.set(TOKEN_KEY, &session.access_token);
        self.backend.set(REFRESH_TOKEN_KEY, &session.refresh_token);
        self.backend.set(USER_INFO_KEY, &raw_info);
    }

    /// Remove all three entries. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        self.backend.remove(USER_INFO_KEY);
    }

    /// Presence check on the access token only. Expiry and signature are
    /// the server's problem on each request.
    pub fn has_session(&self) -> bool {
        self.backend
            .get(TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }

    /// The bearer token for outgoing requests, if any.
    pub fn access_token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &S {
        &self.backend
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore<LocalStorage> {
    /// Store over browser localStorage.
    pub fn local() -> Self {
        Self::new(LocalStorage)
    }
}
