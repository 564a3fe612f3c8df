//! Catalogue-driven persistence for the billing records.
//!
//! Three layers: [`catalog`] holds every SQL operation with its placeholder
//! count and result column order, [`serialize`] moves rows and parameter
//! lists between the database and the domain records, and [`assembly`]
//! composes both into the load and save operations the rest of the
//! application calls.

pub mod assembly;
pub mod catalog;
pub mod serialize;

#[cfg(test)]
pub(crate) mod fixtures;
