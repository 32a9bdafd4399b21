//! Lower-level components used throughout tabelle.

pub mod data_table;
