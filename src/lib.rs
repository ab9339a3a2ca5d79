//! Normalize IR spectra exported as vendor CSV files and view them.
//!
//! Each export carries metadata around a numeric block delimited by the
//! `XYDATA` and `##### Extended Information` rows. The [`batch`] pipeline
//! cuts that block out, rescales it to a maximum of 1.0, and writes it next
//! to the input as `<name>_normalized.csv`.

pub mod app;
pub mod batch;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
