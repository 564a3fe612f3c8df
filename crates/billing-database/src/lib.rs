//! Encrypted SQLite access layer for the billing application.
//!
//! This crate provides:
//! - `ColumnValue`/`ParamValue` variants covering the five SQLite storage classes
//! - A prepared `Statement` wrapper with positional binding and two execution modes
//! - A SQLCipher `Connection` wrapper with pragma configuration at open time
//! - Schema bootstrap for the billing tables
//!
//! # Error model
//!
//! Construction fails loudly: opening a connection with a bad path or
//! passphrase, or preparing malformed SQL, returns a `DatabaseError`.
//! Operational failures (empty inputs, bind mismatches, execution errors)
//! are logged and reported as `false` or an empty row set so callers branch
//! on return values, not on errors.

mod connection;
mod error;
mod statement;
mod value;

pub use connection::Connection;
pub use error::{DatabaseError, DatabaseResult};
pub use statement::{convert_column_value, Statement};
pub use value::{ColumnValue, ParamValue, Row, Rows};
