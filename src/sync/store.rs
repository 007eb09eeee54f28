//! Backend store interface and change subscriptions

use crate::io::error::Result;
use crate::sync::records::{ChangeEvent, Table, UserGameRecord, UserLocationRecord};

/// Callback invoked for every matching change
pub type ChangeListener = Box<dyn FnMut(&ChangeEvent)>;

/// Token returned by `subscribe`, used to cancel the subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Per-user persistence with upsert-on-conflict semantics
///
/// Every table holds at most one row per user id; writing a row for an
/// existing user replaces it (last write wins).
pub trait StateStore {
    /// Insert or replace the user's location row
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    fn upsert_location(&mut self, record: UserLocationRecord) -> Result<()>;

    /// Fetch the user's location row
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn location(&self, user_id: &str) -> Result<Option<UserLocationRecord>>;

    /// Insert or replace the user's game row
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    fn upsert_game(&mut self, record: UserGameRecord) -> Result<()>;

    /// Fetch the user's game row
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn game(&self, user_id: &str) -> Result<Option<UserGameRecord>>;

    /// Listen for changes to one user's rows in one table
    fn subscribe(&mut self, user_id: &str, table: Table, listener: ChangeListener)
    -> SubscriptionId;

    /// Stop a subscription, returning false if it was unknown
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

struct Subscription {
    id: SubscriptionId,
    user_id: String,
    table: Table,
    listener: ChangeListener,
}

/// Subscription registry shared by the store implementations
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<Subscription>,
}

impl Subscribers {
    /// Register a listener filtered by user and table
    pub fn add(&mut self, user_id: &str, table: Table, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Subscription {
            id,
            user_id: user_id.to_string(),
            table,
            listener,
        });
        id
    }

    /// Drop a listener
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to every listener whose filter matches
    pub fn notify(&mut self, event: &ChangeEvent) {
        for entry in &mut self.entries {
            if entry.table == event.table && entry.user_id == event.user_id {
                (entry.listener)(event);
            }
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("next_id", &self.next_id)
            .field("count", &self.entries.len())
            .finish()
    }
}
