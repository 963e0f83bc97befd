//! Session gate for Spare Gold.
//!
//! Translates identity-provider state-change events into a local
//! authenticated/unauthenticated signal and mirrors the current user record
//! into the store under `currentUser`. One gate exists per process with an
//! explicit subscribe/unsubscribe contract; screens share it instead of each
//! holding their own provider subscription.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{SpareError, SpareResult};
use crate::models::UserProfile;
use crate::store::{KeyValueStore, CURRENT_USER_KEY};

/// Authentication state as seen by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No provider event received yet and no persisted user
    Unknown,
    /// A user is signed in
    Authenticated(UserProfile),
    /// The provider reported no user; views redirect to sign-in
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Handle returned by [`SessionGate::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&SessionState) + Send>;

struct GateInner {
    state: SessionState,
    subscribers: HashMap<u64, Subscriber>,
    next_subscription: u64,
}

/// Process-wide session gate.
pub struct SessionGate {
    store: Arc<dyn KeyValueStore>,
    inner: Mutex<GateInner>,
}

impl SessionGate {
    /// Create the gate, restoring a persisted user record if one exists.
    ///
    /// A persisted `currentUser` puts the gate straight into
    /// `Authenticated`; otherwise the state stays `Unknown` until the first
    /// provider event arrives.
    pub fn new(store: Arc<dyn KeyValueStore>) -> SpareResult<Self> {
        let state = match store.get(CURRENT_USER_KEY)? {
            Some(json) => match serde_json::from_str::<UserProfile>(&json) {
                Ok(user) => SessionState::Authenticated(user),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring unreadable persisted user record");
                    SessionState::Unknown
                }
            },
            None => SessionState::Unknown,
        };

        Ok(Self {
            store,
            inner: Mutex::new(GateInner {
                state,
                subscribers: HashMap::new(),
                next_subscription: 0,
            }),
        })
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        match self.inner.lock() {
            Ok(inner) => inner.state.clone(),
            Err(_) => SessionState::Unknown,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        match self.state() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Register a callback invoked on every state transition.
    ///
    /// Callbacks run on the thread delivering the event and must not call
    /// back into the gate.
    pub fn subscribe<F>(&self, callback: F) -> SpareResult<SubscriptionId>
    where
        F: Fn(&SessionState) + Send + 'static,
    {
        let mut inner = self.lock_inner()?;
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.subscribers.insert(id, Box::new(callback));
        Ok(SubscriptionId(id))
    }

    /// Remove a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) -> SpareResult<()> {
        let mut inner = self.lock_inner()?;
        inner.subscribers.remove(&id.0);
        Ok(())
    }

    /// Apply an identity-provider state-change event.
    ///
    /// `Some(user)` persists the record and transitions to `Authenticated`;
    /// `None` clears the persisted record and transitions to
    /// `Unauthenticated`. Subscribers are notified either way, even when the
    /// state repeats: the mirrored writes are idempotent.
    pub fn handle_event(&self, user: Option<UserProfile>) -> SpareResult<()> {
        let persisted = match &user {
            Some(profile) => {
                let json = serde_json::to_string(profile)?;
                self.store.set(CURRENT_USER_KEY, &json)
            }
            None => self.store.remove(CURRENT_USER_KEY),
        };

        if let Err(err) = &persisted {
            tracing::error!(error = %err, "failed to mirror session state to store");
        }

        let state = match user {
            Some(profile) => {
                tracing::info!(uid = %profile.uid, "session authenticated");
                SessionState::Authenticated(profile)
            }
            None => {
                tracing::info!("session cleared");
                SessionState::Unauthenticated
            }
        };

        {
            let mut inner = self.lock_inner()?;
            inner.state = state.clone();
            for subscriber in inner.subscribers.values() {
                subscriber(&state);
            }
        }

        persisted
    }

    fn lock_inner(&self) -> SpareResult<std::sync::MutexGuard<'_, GateInner>> {
        self.inner
            .lock()
            .map_err(|_| SpareError::Other("session gate lock poisoned".to_string()))
    }
}
