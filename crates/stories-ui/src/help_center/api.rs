//! Current-user backend: where read tips live once hydrated.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use stories_engine::storage::{read_or_default, StorageError, Store};

/// Onboarding flags keyed by tip key.
pub type Onboarding = BTreeMap<String, bool>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    pub onboarding: Onboarding,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("user service unavailable: {0}")]
    Unavailable(String),
    #[error("update rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub trait UserApi {
    fn current_user(&self) -> Result<CurrentUser, ApiError>;

    /// Merges `onboarding` into the user's flags and returns the stored user.
    fn update_onboarding(&mut self, onboarding: &Onboarding) -> Result<CurrentUser, ApiError>;
}

/// In-process user. Clones share the user, so a test can keep a handle.
#[derive(Debug, Default, Clone)]
pub struct MemoryUserApi {
    inner: Rc<RefCell<MemoryUser>>,
}

#[derive(Debug, Default)]
struct MemoryUser {
    user: CurrentUser,
    offline: bool,
}

impl MemoryUserApi {
    pub fn new(onboarding: Onboarding) -> Self {
        let api = Self::default();
        api.inner.borrow_mut().user.onboarding = onboarding;
        api
    }

    /// Makes every call fail with [`ApiError::Unavailable`] while `offline`.
    pub fn set_offline(&self, offline: bool) {
        self.inner.borrow_mut().offline = offline;
    }

    pub fn onboarding(&self) -> Onboarding {
        self.inner.borrow().user.onboarding.clone()
    }
}

impl UserApi for MemoryUserApi {
    fn current_user(&self) -> Result<CurrentUser, ApiError> {
        let inner = self.inner.borrow();
        if inner.offline {
            return Err(ApiError::Unavailable("offline".into()));
        }
        Ok(inner.user.clone())
    }

    fn update_onboarding(&mut self, onboarding: &Onboarding) -> Result<CurrentUser, ApiError> {
        let mut inner = self.inner.borrow_mut();
        if inner.offline {
            return Err(ApiError::Unavailable("offline".into()));
        }
        inner.user.onboarding.extend(onboarding.iter().map(|(k, v)| (k.clone(), *v)));
        Ok(inner.user.clone())
    }
}

/// User kept under a key of a [`Store`], for hosts without a user service.
pub struct StoreUserApi {
    store: Box<dyn Store>,
    key: String,
}

impl StoreUserApi {
    pub const DEFAULT_KEY: &'static str = "web_stories_current_user";

    pub fn new(store: Box<dyn Store>) -> Self {
        Self { store, key: Self::DEFAULT_KEY.to_string() }
    }
}

impl UserApi for StoreUserApi {
    fn current_user(&self) -> Result<CurrentUser, ApiError> {
        Ok(read_or_default(self.store.as_ref(), &self.key))
    }

    fn update_onboarding(&mut self, onboarding: &Onboarding) -> Result<CurrentUser, ApiError> {
        let mut user = self.current_user()?;
        user.onboarding.extend(onboarding.iter().map(|(k, v)| (k.clone(), *v)));
        let value = serde_json::to_value(&user).map_err(StorageError::from)?;
        self.store.set(&self.key, value)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stories_engine::storage::MemoryStore;

    fn flags(keys: &[&str]) -> Onboarding {
        keys.iter().map(|k| (k.to_string(), true)).collect()
    }

    #[test]
    fn memory_api_merges_updates() {
        let mut api = MemoryUserApi::new(flags(&["a"]));
        let handle = api.clone();
        api.update_onboarding(&flags(&["b"])).unwrap();
        assert_eq!(handle.onboarding(), flags(&["a", "b"]));
    }

    #[test]
    fn offline_memory_api_fails() {
        let api = MemoryUserApi::default();
        api.set_offline(true);
        assert!(matches!(api.current_user(), Err(ApiError::Unavailable(_))));
    }

    #[test]
    fn store_api_round_trips_through_store() {
        let mut api = StoreUserApi::new(Box::new(MemoryStore::new()));
        assert_eq!(api.current_user().unwrap(), CurrentUser::default());
        api.update_onboarding(&flags(&["a"])).unwrap();
        api.update_onboarding(&flags(&["b"])).unwrap();
        assert_eq!(api.current_user().unwrap().onboarding, flags(&["a", "b"]));
    }
}
