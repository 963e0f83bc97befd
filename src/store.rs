//! On-device key-value persistence for Spare Gold.
//!
//! Collections and session state are mirrored into a string-keyed,
//! string-valued store; values are the JSON form of each collection. The
//! production store is SQLite-backed (the same shape the original device
//! store uses); an in-memory store backs the tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{SpareError, SpareResult};

/// Store key for the company collection
pub const COMPANIES_KEY: &str = "companies";

/// Store key for the car model collection
pub const CAR_MODELS_KEY: &str = "carModels";

/// Store key for the variant collection
pub const VARIANTS_KEY: &str = "variants";

/// Store key for the spare part collection
pub const SPARE_PARTS_KEY: &str = "spareParts";

/// Store key for the booking collection
pub const BOOKINGS_KEY: &str = "bookings";

/// Store key for the mirrored identity-provider user record
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Store key for the dark mode preference (JSON boolean)
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// String-keyed, string-valued persistent store.
///
/// Exactly one mutation is in flight at a time per the UI-gating rule, but
/// implementations still synchronize internally so two mounted screens
/// sharing the process cannot interleave a write.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> SpareResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> SpareResult<()>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> SpareResult<()>;
}

/// SQLite-backed store: one `kv_store` table of key/value rows.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a store at the given file path.
    pub fn new<P: AsRef<Path>>(db_path: P) -> SpareResult<Self> {
        let conn = Connection::open(db_path)?;
        Self::init(conn)
    }

    /// Create an in-memory store. Contents are lost when dropped.
    pub fn new_in_memory() -> SpareResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> SpareResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> SpareResult<Option<String>> {
        let conn = self.conn.lock().map_err(|_| {
            SpareError::storage_op("store lock poisoned")
        })?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> SpareResult<()> {
        let conn = self.conn.lock().map_err(|_| {
            SpareError::storage_op("store lock poisoned")
        })?;
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> SpareResult<()> {
        let conn = self.conn.lock().map_err(|_| {
            SpareError::storage_op("store lock poisoned")
        })?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SpareResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| {
            SpareError::storage_op("store lock poisoned")
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SpareResult<()> {
        let mut entries = self.entries.lock().map_err(|_| {
            SpareError::storage_op("store lock poisoned")
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SpareResult<()> {
        let mut entries = self.entries.lock().map_err(|_| {
            SpareError::storage_op("store lock poisoned")
        })?;
        entries.remove(key);
        Ok(())
    }
}
