//! Encrypted database connection wrapper.
//!
//! One `Connection` owns one SQLCipher handle for one (path, passphrase)
//! pair. Every entry point runs a fresh prepare/bind/execute/finalize cycle,
//! so no partially-bound statement state survives between calls. A single
//! instance must not be shared across threads; the handle is not `Sync`, so
//! the compiler enforces one-connection-per-thread use.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{DatabaseError, DatabaseResult};
use crate::statement::Statement;
use crate::value::{ParamValue, Rows};

/// Schema bootstrap batch. Idempotent: safe to run on every open.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS business_details (
    business_name TEXT PRIMARY KEY,
    address TEXT NOT NULL,
    area_code TEXT NOT NULL,
    town TEXT NOT NULL,
    cellphone TEXT NOT NULL,
    email TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admin (
    business_name TEXT PRIMARY KEY,
    address TEXT NOT NULL,
    area_code TEXT NOT NULL,
    town TEXT NOT NULL,
    cellphone TEXT NOT NULL,
    email TEXT NOT NULL,
    bank_name TEXT NOT NULL,
    branch_code TEXT NOT NULL,
    account_number TEXT NOT NULL,
    client_message TEXT NOT NULL,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS client (
    business_name TEXT PRIMARY KEY,
    address TEXT NOT NULL,
    area_code TEXT NOT NULL,
    town TEXT NOT NULL,
    cellphone TEXT NOT NULL,
    email TEXT NOT NULL,
    vat_number TEXT NOT NULL,
    statement_schedule TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS invoice (
    invoice_id INTEGER PRIMARY KEY,
    business_name TEXT NOT NULL,
    job_card_number TEXT NOT NULL,
    order_number TEXT NOT NULL,
    invoice_date TEXT NOT NULL,
    paid INTEGER NOT NULL DEFAULT 0,
    description_total REAL NOT NULL,
    material_total REAL NOT NULL,
    grand_total REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS labor (
    invoice_id INTEGER NOT NULL,
    row_number INTEGER NOT NULL,
    quantity INTEGER NOT NULL,
    description TEXT NOT NULL,
    amount REAL NOT NULL,
    is_description INTEGER NOT NULL,
    PRIMARY KEY (invoice_id, is_description, row_number),
    FOREIGN KEY (invoice_id) REFERENCES invoice(invoice_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS statement (
    statement_id INTEGER PRIMARY KEY,
    business_name TEXT NOT NULL,
    statement_date TEXT NOT NULL,
    paid INTEGER NOT NULL DEFAULT 0,
    period_start TEXT NOT NULL,
    period_end TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_invoice_business ON invoice(business_name);
CREATE INDEX IF NOT EXISTS idx_labor_invoice ON labor(invoice_id);
CREATE INDEX IF NOT EXISTS idx_statement_period ON statement(business_name, period_start, period_end);
"#;

/// Wrapper around one encrypted database connection.
pub struct Connection {
    conn: rusqlite::Connection,
}

impl Connection {
    /// Open the encrypted database at the given path.
    ///
    /// Fails if the path or passphrase is empty, if the file cannot be
    /// opened, if the decryption key is rejected, if foreign-key enforcement
    /// cannot be enabled, or if the pragma configuration fails. On any
    /// failure the partially-opened handle is closed before the error is
    /// returned.
    pub fn open(path: &Path, passphrase: &str) -> DatabaseResult<Self> {
        if path.as_os_str().is_empty() {
            return Err(DatabaseError::InvalidInput(
                "database path is empty".to_string(),
            ));
        }
        if passphrase.is_empty() {
            return Err(DatabaseError::InvalidInput(
                "database passphrase is empty".to_string(),
            ));
        }

        let conn = rusqlite::Connection::open(path).map_err(|e| {
            DatabaseError::Connection(format!("failed to open {}: {e}", path.display()))
        })?;

        if let Err(e) = Self::configure(&conn, passphrase) {
            close_discarding(conn);
            return Err(e);
        }

        debug!(path = %path.display(), "database opened");
        Ok(Self { conn })
    }

    /// Open an unencrypted in-memory database for testing.
    pub fn open_in_memory() -> DatabaseResult<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        // Note: WAL mode doesn't apply to in-memory databases
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA cache_size = -64000;
            PRAGMA temp_store = MEMORY;
        ",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Apply the key, verify it, and configure the session.
    fn configure(conn: &rusqlite::Connection, passphrase: &str) -> DatabaseResult<()> {
        conn.pragma_update(None, "key", passphrase).map_err(|e| {
            DatabaseError::Connection(format!("failed to apply decryption key: {e}"))
        })?;

        // The key pragma always succeeds; the first read proves it was right.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| DatabaseError::Connection(format!("passphrase rejected: {e}")))?;

        conn.pragma_update(None, "foreign_keys", true).map_err(|e| {
            DatabaseError::Connection(format!("failed to enable foreign keys: {e}"))
        })?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            PRAGMA cache_size = -64000;
            PRAGMA temp_store = MEMORY;
        ",
        )
        .map_err(|e| DatabaseError::Connection(format!("failed to configure pragmas: {e}")))?;

        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &rusqlite::Connection {
        &self.conn
    }

    /// Execute a single write statement (INSERT/UPDATE/UPSERT/DELETE).
    ///
    /// Returns false, without erroring, on empty SQL, an empty parameter
    /// list, a prepare failure, a bind failure, or an execution failure.
    pub fn usert(&self, sql: &str, params: &[ParamValue]) -> bool {
        if sql.is_empty() || params.is_empty() {
            debug!("usert called with empty SQL or parameter list");
            return false;
        }
        let mut stmt = match Statement::prepare(&self.conn, sql) {
            Ok(stmt) => stmt,
            Err(e) => {
                debug!(error = %e, "usert preparation failed");
                return false;
            }
        };
        if !stmt.bind_params(params) {
            stmt.finalize();
            return false;
        }
        let done = stmt.single_execute();
        stmt.finalize();
        done
    }

    /// Execute a parameterized read and drain every result row.
    ///
    /// Returns an empty row set, without erroring, on empty SQL, an empty
    /// parameter list, a prepare failure, or a bind failure.
    pub fn select(&self, sql: &str, params: &[ParamValue]) -> Rows {
        if sql.is_empty() || params.is_empty() {
            debug!("select called with empty SQL or parameter list");
            return Rows::new();
        }
        let mut stmt = match Statement::prepare(&self.conn, sql) {
            Ok(stmt) => stmt,
            Err(e) => {
                debug!(error = %e, "select preparation failed");
                return Rows::new();
            }
        };
        if !stmt.bind_params(params) {
            stmt.finalize();
            return Rows::new();
        }
        let rows = stmt.multi_execute();
        stmt.finalize();
        rows
    }

    /// Execute a read with no placeholders and drain every result row.
    pub fn select_all(&self, sql: &str) -> Rows {
        if sql.is_empty() {
            debug!("select_all called with empty SQL");
            return Rows::new();
        }
        let mut stmt = match Statement::prepare(&self.conn, sql) {
            Ok(stmt) => stmt,
            Err(e) => {
                debug!(error = %e, "select_all preparation failed");
                return Rows::new();
            }
        };
        let rows = stmt.multi_execute();
        stmt.finalize();
        rows
    }

    /// Execute a raw transaction-control statement.
    ///
    /// Intended for `BEGIN IMMEDIATE;`, `COMMIT;`, and `ROLLBACK;` literals;
    /// no parameters are bound.
    pub fn transaction(&self, sql: &str) -> bool {
        if sql.is_empty() {
            debug!("transaction called with empty SQL");
            return false;
        }
        match self.conn.execute_batch(sql) {
            Ok(()) => true,
            Err(e) => {
                debug!(sql, error = %e, "transaction statement failed");
                false
            }
        }
    }

    /// Close the connection. A close failure is logged, not escalated.
    pub fn close(self) {
        if let Err((_, e)) = self.conn.close() {
            warn!(error = %e, "failed to close database connection");
        }
    }
}

/// Best-effort close for a handle that failed mid-setup.
fn close_discarding(conn: rusqlite::Connection) {
    if let Err((_, e)) = conn.close() {
        warn!(error = %e, "failed to close connection after setup failure");
    }
}
