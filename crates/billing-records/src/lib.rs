//! Self-validating domain records for the billing workspace.
//!
//! Every record starts empty and invalid. Setters validate their input,
//! store it on success, and track the outcome in a populated-field set;
//! `is_valid()` reports whether exactly the required fields have been
//! populated. A rejected value clears the field, so a record that once
//! validated goes invalid again the moment a bad value is written.

mod admin;
mod business;
mod client;
mod composite;
mod fields;
mod invoice;
mod line_item;
mod statement;
mod validate;

pub use admin::Admin;
pub use business::Business;
pub use client::Client;
pub use composite::{PdfInvoice, PdfStatement};
pub use fields::{Field, FieldSet};
pub use invoice::Invoice;
pub use line_item::LineItem;
pub use statement::Statement;
