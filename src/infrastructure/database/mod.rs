//! Owner-command audit log backed by sqlite
//!
//! Opened before the bot connects, closed during orderly shutdown.

use crate::application::errors::StorageError;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandLogEntry {
    pub id: i64,
    pub invoker: String,
    pub command: String,
    /// JSON-encoded argument list
    pub args: String,
    pub at: String,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_tables()?;
        Ok(db)
    }

    fn init_tables(&self) -> Result<(), StorageError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS command_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                invoker TEXT NOT NULL,
                command TEXT NOT NULL,
                args TEXT NOT NULL DEFAULT '[]',
                at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Record an accepted owner command
    pub fn log_command(
        &self,
        invoker: &str,
        command: &str,
        args: &[String],
    ) -> Result<(), StorageError> {
        let args_json = serde_json::to_string(args)?;
        self.conn.execute(
            "INSERT INTO command_log (invoker, command, args, at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                invoker,
                command,
                args_json,
                chrono::Utc::now().to_rfc3339()
            ],
        )?;
        Ok(())
    }

    /// Most recent owner commands, newest first
    pub fn recent_commands(&self, limit: usize) -> Result<Vec<CommandLogEntry>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, invoker, command, args, at FROM command_log
             ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(CommandLogEntry {
                id: row.get(0)?,
                invoker: row.get(1)?,
                command: row.get(2)?,
                args: row.get(3)?,
                at: row.get(4)?,
            })
        })?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Flush and close the connection
    pub fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, e)| StorageError::from(e))
    }
}
