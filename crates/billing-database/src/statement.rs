//! Prepared statement wrapper.
//!
//! A `Statement` owns exactly one prepared statement for exactly one SQL
//! string, borrowed against a connection it does not own. Malformed SQL is
//! caught here, at prepare time. Binding and execution failures are
//! operational: they are logged and reported as `false` or an empty row set.

use rusqlite::types::ValueRef;
use tracing::debug;

use crate::error::{DatabaseError, DatabaseResult};
use crate::value::{ColumnValue, ParamValue, Row, Rows};

/// Wrapper around one prepared statement.
pub struct Statement<'conn> {
    stmt: rusqlite::Statement<'conn>,
}

impl<'conn> Statement<'conn> {
    /// Prepare a statement for the given SQL text.
    ///
    /// Fails on empty SQL or a prepare error (e.g. a syntax error). This is
    /// the earliest point at which malformed SQL can be rejected.
    pub fn prepare(conn: &'conn rusqlite::Connection, sql: &str) -> DatabaseResult<Self> {
        if sql.is_empty() {
            return Err(DatabaseError::InvalidInput("SQL text is empty".to_string()));
        }
        let stmt = conn.prepare(sql)?;
        Ok(Self { stmt })
    }

    /// Number of placeholders declared in the SQL text.
    pub fn parameter_count(&self) -> usize {
        self.stmt.parameter_count()
    }

    /// Bind a parameter list in 1-based positional order.
    ///
    /// Returns false if the list is empty, if its length does not equal the
    /// statement's placeholder count, or if the engine rejects an individual
    /// bind. Nothing executes on a false return.
    pub fn bind_params(&mut self, params: &[ParamValue]) -> bool {
        if params.is_empty() {
            debug!("bind called with an empty parameter list");
            return false;
        }
        let expected = self.stmt.parameter_count();
        if params.len() != expected {
            debug!(
                supplied = params.len(),
                expected, "parameter count does not match placeholder count"
            );
            return false;
        }

        for (i, param) in params.iter().enumerate() {
            let index = i + 1;
            let result = match param {
                ParamValue::Null => self.stmt.raw_bind_parameter(index, rusqlite::types::Null),
                ParamValue::Integer(v) => self.stmt.raw_bind_parameter(index, v),
                ParamValue::Real(v) => self.stmt.raw_bind_parameter(index, v),
                ParamValue::Text(v) => self.stmt.raw_bind_parameter(index, v.as_str()),
                ParamValue::Blob(v) => self.stmt.raw_bind_parameter(index, v.as_slice()),
            };
            if let Err(e) = result {
                debug!(index, kind = param.type_name(), error = %e, "parameter bind failed");
                return false;
            }
        }
        true
    }

    /// Advance the statement one step.
    ///
    /// Returns true only if that step completed with no row produced. Used
    /// for INSERT/UPDATE/UPSERT/DELETE statements.
    pub fn single_execute(&mut self) -> bool {
        match self.stmt.raw_execute() {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "statement execution failed");
                false
            }
        }
    }

    /// Drain every result row, converting each column into its value variant.
    ///
    /// A step error ends the drain; whatever was collected up to that point
    /// is returned, so a mid-stream failure is indistinguishable from a clean
    /// end by the return value alone.
    pub fn multi_execute(&mut self) -> Rows {
        let column_count = self.stmt.column_count();
        let mut out = Rows::new();
        let mut rows = self.stmt.raw_query();
        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut converted = Row::with_capacity(column_count);
                    for index in 0..column_count {
                        match convert_column_value(row, index) {
                            Ok(value) => converted.push(value),
                            Err(e) => {
                                debug!(index, error = %e, "column conversion failed");
                                converted.push(ColumnValue::Null);
                            }
                        }
                    }
                    out.push(converted);
                }
                Ok(None) => break,
                Err(e) => {
                    debug!(error = %e, "row step failed");
                    break;
                }
            }
        }
        out
    }

    /// Finalize the statement. A finalize failure is logged, not escalated.
    pub fn finalize(self) {
        if let Err(e) = self.stmt.finalize() {
            debug!(error = %e, "statement finalize failed");
        }
    }
}

/// Convert one column of the current row into its value variant.
///
/// Text and blob bytes are copied out: the engine reuses its buffers between
/// steps, so the returned value must not borrow from the statement.
pub fn convert_column_value(row: &rusqlite::Row<'_>, index: usize) -> DatabaseResult<ColumnValue> {
    let value = match row.get_ref(index)? {
        ValueRef::Null => ColumnValue::Null,
        ValueRef::Integer(v) => ColumnValue::Integer(v),
        ValueRef::Real(v) => ColumnValue::Real(v),
        ValueRef::Text(v) => ColumnValue::Text(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => ColumnValue::Blob(v.to_vec()),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> rusqlite::Connection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE samples (
                id INTEGER PRIMARY KEY,
                label TEXT NOT NULL,
                weight REAL,
                payload BLOB
            );",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_prepare_rejects_empty_sql() {
        let conn = test_conn();
        let result = Statement::prepare(&conn, "");
        assert!(matches!(result, Err(DatabaseError::InvalidInput(_))));
    }

    #[test]
    fn test_prepare_rejects_bad_sql() {
        let conn = test_conn();
        let result = Statement::prepare(&conn, "SELEKT * FROM samples");
        assert!(matches!(result, Err(DatabaseError::Sqlite(_))));
    }

    #[test]
    fn test_bind_rejects_empty_params() {
        let conn = test_conn();
        let mut stmt =
            Statement::prepare(&conn, "INSERT INTO samples (id, label) VALUES (?1, ?2)").unwrap();
        assert!(!stmt.bind_params(&[]));
    }

    #[test]
    fn test_bind_rejects_count_mismatch() {
        let conn = test_conn();
        let mut stmt =
            Statement::prepare(&conn, "INSERT INTO samples (id, label) VALUES (?1, ?2)").unwrap();
        assert_eq!(stmt.parameter_count(), 2);

        // Too few
        assert!(!stmt.bind_params(&[ParamValue::Integer(1)]));
        // Too many
        assert!(!stmt.bind_params(&[
            ParamValue::Integer(1),
            ParamValue::Text("a".to_string()),
            ParamValue::Text("b".to_string()),
        ]));
    }

    #[test]
    fn test_single_execute_insert() {
        let conn = test_conn();
        let mut stmt =
            Statement::prepare(&conn, "INSERT INTO samples (id, label) VALUES (?1, ?2)").unwrap();
        assert!(stmt.bind_params(&[ParamValue::Integer(1), ParamValue::Text("one".to_string())]));
        assert!(stmt.single_execute());
        stmt.finalize();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM samples", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_single_execute_reports_constraint_failure() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO samples (id, label) VALUES (1, 'one')",
            [],
        )
        .unwrap();

        let mut stmt =
            Statement::prepare(&conn, "INSERT INTO samples (id, label) VALUES (?1, ?2)").unwrap();
        assert!(stmt.bind_params(&[ParamValue::Integer(1), ParamValue::Text("dup".to_string())]));
        assert!(!stmt.single_execute());
    }

    #[test]
    fn test_multi_execute_converts_all_variants() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO samples (id, label, weight, payload) VALUES (1, 'one', 2.5, x'0102')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO samples (id, label, weight, payload) VALUES (2, 'two', NULL, NULL)",
            [],
        )
        .unwrap();

        let mut stmt = Statement::prepare(
            &conn,
            "SELECT id, label, weight, payload FROM samples ORDER BY id",
        )
        .unwrap();
        let rows = stmt.multi_execute();
        stmt.finalize();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], ColumnValue::Integer(1));
        assert_eq!(rows[0][1], ColumnValue::Text("one".to_string()));
        assert_eq!(rows[0][2], ColumnValue::Real(2.5));
        assert_eq!(rows[0][3], ColumnValue::Blob(vec![0x01, 0x02]));
        assert_eq!(rows[1][2], ColumnValue::Null);
        assert_eq!(rows[1][3], ColumnValue::Null);
    }

    #[test]
    fn test_blob_values_are_copies() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO samples (id, label, payload) VALUES (1, 'one', x'DEADBEEF')",
            [],
        )
        .unwrap();

        let rows = {
            let mut stmt =
                Statement::prepare(&conn, "SELECT payload FROM samples WHERE id = 1").unwrap();
            let rows = stmt.multi_execute();
            stmt.finalize();
            rows
        };

        // The statement is gone; the blob must still be intact.
        assert_eq!(rows[0][0], ColumnValue::Blob(vec![0xDE, 0xAD, 0xBE, 0xEF]));
    }

    #[test]
    fn test_bind_then_requery_each_cycle_is_independent() {
        let conn = test_conn();
        for id in 1..=3i64 {
            let mut stmt =
                Statement::prepare(&conn, "INSERT INTO samples (id, label) VALUES (?1, ?2)")
                    .unwrap();
            assert!(stmt.bind_params(&[
                ParamValue::Integer(id),
                ParamValue::Text(format!("row-{id}")),
            ]));
            assert!(stmt.single_execute());
            stmt.finalize();
        }

        let mut stmt =
            Statement::prepare(&conn, "SELECT label FROM samples WHERE id = ?1").unwrap();
        assert!(stmt.bind_params(&[ParamValue::Integer(2)]));
        let rows = stmt.multi_execute();
        stmt.finalize();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], ColumnValue::Text("row-2".to_string()));
    }
}
