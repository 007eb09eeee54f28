//! In-process store, used when no backend is configured and in tests

use std::collections::HashMap;

use crate::io::error::Result;
use crate::sync::records::{ChangeEvent, ChangeKind, Table, UserGameRecord, UserLocationRecord};
use crate::sync::store::{ChangeListener, StateStore, Subscribers, SubscriptionId};

/// Store holding rows in memory and notifying listeners synchronously
#[derive(Debug, Default)]
pub struct MemoryStore {
    locations: HashMap<String, UserLocationRecord>,
    games: HashMap<String, UserGameRecord>,
    subscribers: Subscribers,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscribers.len()
    }

    fn announce(&mut self, table: Table, existed: bool, user_id: String) {
        let kind = if existed {
            ChangeKind::Update
        } else {
            ChangeKind::Insert
        };
        self.subscribers.notify(&ChangeEvent {
            table,
            kind,
            user_id,
        });
    }
}

impl StateStore for MemoryStore {
    fn upsert_location(&mut self, record: UserLocationRecord) -> Result<()> {
        let user_id = record.user_id.clone();
        let existed = self.locations.insert(user_id.clone(), record).is_some();
        self.announce(Table::UserLocations, existed, user_id);
        Ok(())
    }

    fn location(&self, user_id: &str) -> Result<Option<UserLocationRecord>> {
        Ok(self.locations.get(user_id).cloned())
    }

    fn upsert_game(&mut self, record: UserGameRecord) -> Result<()> {
        let user_id = record.user_id.clone();
        let existed = self.games.insert(user_id.clone(), record).is_some();
        self.announce(Table::UserGames, existed, user_id);
        Ok(())
    }

    fn game(&self, user_id: &str) -> Result<Option<UserGameRecord>> {
        Ok(self.games.get(user_id).cloned())
    }

    fn subscribe(
        &mut self,
        user_id: &str,
        table: Table,
        listener: ChangeListener,
    ) -> SubscriptionId {
        self.subscribers.add(user_id, table, listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}
