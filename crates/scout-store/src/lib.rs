//! Scout Storage Layer
//!
//! Implements the StatusStore trait using SQLite.
//!
//! # Architecture
//!
//! - SQLite `leads` table holding the lead fields and its enrichment status
//! - `MemoryStatusStore` recording every status write, for tests and dry runs
//!
//! # Examples
//!
//! ```no_run
//! use scout_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for lead operations
//! ```

#![warn(missing_docs)]

mod memory;

use rusqlite::{params, Connection, OptionalExtension, Row};
use scout_domain::traits::StatusStore;
use scout_domain::{EnrichStatus, LeadId, LeadRow, StatusUpdate};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

pub use memory::MemoryStatusStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Lead not found
    #[error("Lead not found: {0}")]
    NotFound(String),

    /// Lead already exists
    #[error("Lead already exists: {0}")]
    Duplicate(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Connection lock was poisoned by a panicking thread
    #[error("Store lock poisoned")]
    Poisoned,

    /// Injected failure (memory store only)
    #[error("Simulated failure recording '{0}'")]
    Simulated(EnrichStatus),
}

/// A stored lead with its enrichment status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRecord {
    /// The lead itself
    pub lead: LeadRow,

    /// Current status
    pub status: EnrichStatus,

    /// Last failure message
    pub error: Option<String>,

    /// Last completion time (unix seconds)
    pub last_enriched_at: Option<u64>,
}

/// Filter for listing leads
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// Only leads with one of these statuses (all when empty)
    pub statuses: Vec<EnrichStatus>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

impl LeadFilter {
    /// Leads with exactly this status
    pub fn with_status(status: EnrichStatus) -> Self {
        Self {
            statuses: vec![status],
            limit: None,
        }
    }

    /// Leads that still need enrichment (anything not `done`)
    pub fn unfinished() -> Self {
        Self {
            statuses: vec![
                EnrichStatus::Pending,
                EnrichStatus::Running,
                EnrichStatus::Error,
            ],
            limit: None,
        }
    }
}

/// SQLite-based implementation of StatusStore
///
/// Leads keep their insertion order, which is also the order batches see them in.
/// Rows are keyed on the id's text together with its kind, so `7` and `"7"`
/// are distinct leads.
///
/// # Thread Safety
///
/// The connection sits behind a mutex, so a store can be shared by reference
/// across tasks. Writes are short and never held across an await point.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scout_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("scout.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Insert a new pending lead
    pub fn insert_lead(&self, lead: &LeadRow) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let key = lead.id.to_string();

        let exists = conn
            .query_row(
                "SELECT 1 FROM leads WHERE id = ?1 AND id_numeric = ?2",
                params![&key, lead.id.is_numeric()],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        if exists {
            return Err(StoreError::Duplicate(key));
        }

        conn.execute(
            "INSERT INTO leads (id, id_numeric, business_name, city, state, enrich_status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &key,
                lead.id.is_numeric(),
                &lead.business_name,
                &lead.city,
                &lead.state,
                EnrichStatus::Pending.as_str(),
            ],
        )?;

        debug!(lead = %lead.id, "Inserted lead");
        Ok(())
    }

    /// Next free numeric id (one past the largest numeric id, 1 when empty)
    pub fn next_numeric_id(&self) -> Result<i64, StoreError> {
        let conn = self.conn()?;
        let next = conn.query_row(
            "SELECT COALESCE(MAX(CAST(id AS INTEGER)), 0) + 1 FROM leads WHERE id_numeric = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(next)
    }

    /// Get a lead by id
    pub fn get_lead(&self, id: &LeadId) -> Result<Option<LeadRow>, StoreError> {
        Ok(self.get_status(id)?.map(|record| record.lead))
    }

    /// Get a lead together with its status
    pub fn get_status(&self, id: &LeadId) -> Result<Option<LeadRecord>, StoreError> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "SELECT id, id_numeric, business_name, city, state, enrich_status, enrich_error, last_enriched_at
                 FROM leads WHERE id = ?1 AND id_numeric = ?2",
                params![id.to_string(), id.is_numeric()],
                Self::row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// List leads matching a filter, in insertion order
    pub fn list_leads(&self, filter: &LeadFilter) -> Result<Vec<LeadRecord>, StoreError> {
        let mut sql = String::from(
            "SELECT id, id_numeric, business_name, city, state, enrich_status, enrich_error, last_enriched_at
             FROM leads WHERE 1=1",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if !filter.statuses.is_empty() {
            let placeholders = vec!["?"; filter.statuses.len()].join(", ");
            sql.push_str(&format!(" AND enrich_status IN ({})", placeholders));
            for status in &filter.statuses {
                params.push(Box::new(status.as_str()));
            }
        }

        sql.push_str(" ORDER BY rowid");

        if let Some(limit) = filter.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let records = stmt
            .query_map(&param_refs[..], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Apply a status write
    ///
    /// Terminal statuses must carry a completion time and others must not.
    pub fn apply_status(&self, update: &StatusUpdate) -> Result<(), StoreError> {
        if update.status.is_terminal() != update.last_enriched_at.is_some() {
            return Err(StoreError::InvalidData(format!(
                "status '{}' for lead {} has inconsistent completion time",
                update.status, update.id
            )));
        }

        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE leads SET enrich_status = ?1, enrich_error = ?2, last_enriched_at = ?3
             WHERE id = ?4 AND id_numeric = ?5",
            params![
                update.status.as_str(),
                &update.error,
                update.last_enriched_at.map(|t| t as i64),
                update.id.to_string(),
                update.id.is_numeric(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(update.id.to_string()));
        }

        debug!(lead = %update.id, status = %update.status, "Status updated");
        Ok(())
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<LeadRecord> {
        let key: String = row.get(0)?;
        let numeric: bool = row.get(1)?;
        let id = if numeric {
            key.parse::<i64>()
                .map(LeadId::Number)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(
                    0, rusqlite::types::Type::Text, Box::new(e)
                ))?
        } else {
            LeadId::Text(key)
        };

        let status_text: String = row.get(5)?;
        let status = EnrichStatus::parse(&status_text).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                rusqlite::types::Type::Text,
                Box::new(StoreError::InvalidData(format!("Unknown status: {}", status_text))),
            )
        })?;

        let last_enriched_at: Option<i64> = row.get(7)?;

        Ok(LeadRecord {
            lead: LeadRow {
                id,
                business_name: row.get(2)?,
                city: row.get(3)?,
                state: row.get(4)?,
            },
            status,
            error: row.get(6)?,
            last_enriched_at: last_enriched_at.map(|t| t as u64),
        })
    }
}

impl StatusStore for SqliteStore {
    type Error = StoreError;

    async fn set_status(&self, update: StatusUpdate) -> Result<(), Self::Error> {
        self.apply_status(&update)
    }
}
