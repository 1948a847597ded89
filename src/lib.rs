//! Chantier Ciment Library
//!
//! Cement-bag consumption ledger for a construction site. Records persist
//! in full under one storage key after every mutation and render as a
//! table sorted by date descending with a running total.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;
