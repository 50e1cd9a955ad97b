/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::ramsey::aggregate::ResultAggregate;
use crate::ramsey::config::OutputFormat;
use crate::ramsey::error::{RamseyError, RamseyResult};
use crate::ramsey::id_types::GraphId;
use crate::ramsey::output::Output;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// Consumes the aggregate once the pipeline has drained.
pub trait RecordSink {
    fn write_aggregate(&mut self, aggregate: &ResultAggregate) -> RamseyResult<()>;
}

/// One persisted row, as read back from the store.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredRow {
    pub graph_id: i64,
    pub k_red_count: i64,
    pub k_red: String,
    pub k_blue_count: i64,
    pub k_blue: String,
    pub red_edges: Option<String>,
    pub blue_edges: Option<String>,
}

/// SQLite-backed sink. Each run owns one table (`r<red><blue>`), which is
/// emptied before the run's records are written.
pub struct SqliteStore {
    conn: Connection,
    table: String,
}

impl SqliteStore {
    pub fn open(db_path: impl AsRef<Path>, table: &str) -> RamseyResult<Self> {
        let conn = Connection::open(db_path)?;
        Self::with_connection(conn, table)
    }

    /// In-memory store, for tests.
    pub fn in_memory(table: &str) -> RamseyResult<Self> {
        Self::with_connection(Connection::open_in_memory()?, table)
    }

    fn with_connection(conn: Connection, table: &str) -> RamseyResult<Self> {
        if table.is_empty() || !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(RamseyError::from(format!("Invalid table name: {:?}", table)));
        }
        let store = Self {
            conn,
            table: table.to_string(),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> RamseyResult<()> {
        self.conn.execute_batch(
            "PRAGMA synchronous = OFF;
             PRAGMA journal_mode = MEMORY;
             PRAGMA temp_store = MEMORY;",
        )?;
        self.conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    graph_id INTEGER NOT NULL,
                    k_red_count INTEGER NOT NULL,
                    k_red TEXT NOT NULL,
                    k_blue_count INTEGER NOT NULL,
                    k_blue TEXT NOT NULL,
                    red_edges TEXT,
                    blue_edges TEXT
                )",
                self.table
            ),
            [],
        )?;
        self.add_missing_columns()
    }

    // Tables written by the C++ generator have no graph_id column.
    fn add_missing_columns(&self) -> RamseyResult<()> {
        let columns = self.column_names()?;
        if !columns.iter().any(|name| name == "graph_id") {
            debug!(table = %self.table, "Adding graph_id column");
            self.conn.execute(
                &format!("ALTER TABLE {} ADD COLUMN graph_id INTEGER", self.table),
                [],
            )?;
        }
        Ok(())
    }

    pub fn column_names(&self) -> RamseyResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({})", self.table))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    // drops rows from earlier runs and restarts the row id sequence
    fn clear(conn: &Connection, table: &str) -> RamseyResult<()> {
        conn.execute(&format!("DELETE FROM {}", table), [])?;
        conn.execute(
            "DELETE FROM sqlite_sequence WHERE name = ?1",
            params![table],
        )?;
        Ok(())
    }

    pub fn count_rows(&self) -> RamseyResult<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", self.table),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn fetch_row(&self, graph_id: GraphId) -> RamseyResult<Option<StoredRow>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT graph_id, k_red_count, k_red, k_blue_count, k_blue, red_edges, blue_edges
                     FROM {} WHERE graph_id = ?1 ORDER BY id LIMIT 1",
                    self.table
                ),
                params![graph_id.value()],
                |row| {
                    Ok(StoredRow {
                        graph_id: row.get(0)?,
                        k_red_count: row.get(1)?,
                        k_red: row.get(2)?,
                        k_blue_count: row.get(3)?,
                        k_blue: row.get(4)?,
                        red_edges: row.get(5)?,
                        blue_edges: row.get(6)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// graph_id of every row in row id order.
    pub fn graph_ids(&self) -> RamseyResult<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT graph_id FROM {} ORDER BY id", self.table))?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
    }
}

impl RecordSink for SqliteStore {
    fn write_aggregate(&mut self, aggregate: &ResultAggregate) -> RamseyResult<()> {
        let tx = self.conn.transaction()?;
        Self::clear(&tx, &self.table)?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} (graph_id, k_red_count, k_red, k_blue_count, k_blue, red_edges, blue_edges)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                self.table
            ))?;
            for record in aggregate.sorted() {
                stmt.execute(params![
                    record.graph_id.value(),
                    record.red.count as i64,
                    record.red_witness_string(),
                    record.blue.count as i64,
                    record.blue_witness_string(),
                    record.red_edges_string(),
                    record.blue_edges_string(),
                ])?;
            }
        }
        tx.commit()?;
        debug!(table = %self.table, num_rows = aggregate.len(), "Wrote records");
        Ok(())
    }
}

/// Writes records as TSV or JSON lines, in identity order.
pub struct TextSink<'a> {
    output: Output<'a>,
    format: OutputFormat,
}

impl<'a> TextSink<'a> {
    pub fn new(output: Output<'a>, format: OutputFormat) -> RamseyResult<Self> {
        match format {
            OutputFormat::Tsv | OutputFormat::Json => Ok(Self { output, format }),
            OutputFormat::Sqlite => Err(RamseyError::new("TextSink cannot write sqlite output")),
        }
    }
}

impl<'a> RecordSink for TextSink<'a> {
    fn write_aggregate(&mut self, aggregate: &ResultAggregate) -> RamseyResult<()> {
        for record in aggregate.sorted() {
            let line = match self.format {
                OutputFormat::Json => serde_json::to_string(&record.as_json())?,
                _ => record.as_tsv_line(),
            };
            self.output.write_line(&line)?;
        }
        self.output.flush()
    }
}
