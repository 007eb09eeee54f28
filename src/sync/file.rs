//! Directory-backed store keeping one pretty-printed JSON file per row
//!
//! Layout: `<root>/<table>/<user_id>.json`. A write replaces the whole file,
//! so the save slot follows last-write-wins.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::error::{GameError, Result, file_system_error, invalid_parameter};
use crate::sync::records::{ChangeEvent, ChangeKind, Table, UserGameRecord, UserLocationRecord};
use crate::sync::store::{ChangeListener, StateStore, Subscribers, SubscriptionId};

/// Store persisting rows under a root directory
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    subscribers: Subscribers,
}

impl FileStore {
    /// Open a store rooted at `root`, creating directories as needed
    ///
    /// # Errors
    ///
    /// Returns a file system error if the table directories cannot be created
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        for table in [Table::UserLocations, Table::UserGames] {
            let dir = root.join(table.as_str());
            std::fs::create_dir_all(&dir)
                .map_err(|e| file_system_error(&dir, "create directory", e))?;
        }

        Ok(Self {
            root,
            subscribers: Subscribers::default(),
        })
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding a user's row in a table
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the user id is empty or contains
    /// characters other than ASCII letters, digits, `-` and `_`
    pub fn row_path(&self, table: Table, user_id: &str) -> Result<PathBuf> {
        let valid = !user_id.is_empty()
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(invalid_parameter(
                "user_id",
                &user_id,
                &"must be non-empty and use only letters, digits, '-' or '_'",
            ));
        }

        Ok(self
            .root
            .join(table.as_str())
            .join(format!("{user_id}.json")))
    }

    fn write_row<T: Serialize>(&mut self, table: Table, user_id: &str, row: &T) -> Result<()> {
        let path = self.row_path(table, user_id)?;
        let existed = path.exists();

        let json = serde_json::to_string_pretty(row).map_err(|e| GameError::Serialization {
            operation: "encode row",
            source: e,
        })?;
        std::fs::write(&path, json).map_err(|e| file_system_error(&path, "write row", e))?;

        let kind = if existed {
            ChangeKind::Update
        } else {
            ChangeKind::Insert
        };
        self.subscribers.notify(&ChangeEvent {
            table,
            kind,
            user_id: user_id.to_string(),
        });
        Ok(())
    }

    fn read_row<T: DeserializeOwned>(&self, table: Table, user_id: &str) -> Result<Option<T>> {
        let path = self.row_path(table, user_id)?;
        if !path.exists() {
            return Ok(None);
        }

        let json =
            std::fs::read_to_string(&path).map_err(|e| file_system_error(&path, "read row", e))?;
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| GameError::Serialization {
                operation: "decode row",
                source: e,
            })
    }
}

impl StateStore for FileStore {
    fn upsert_location(&mut self, record: UserLocationRecord) -> Result<()> {
        let user_id = record.user_id.clone();
        self.write_row(Table::UserLocations, &user_id, &record)
    }

    fn location(&self, user_id: &str) -> Result<Option<UserLocationRecord>> {
        self.read_row(Table::UserLocations, user_id)
    }

    fn upsert_game(&mut self, record: UserGameRecord) -> Result<()> {
        let user_id = record.user_id.clone();
        self.write_row(Table::UserGames, &user_id, &record)
    }

    fn game(&self, user_id: &str) -> Result<Option<UserGameRecord>> {
        self.read_row(Table::UserGames, user_id)
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
