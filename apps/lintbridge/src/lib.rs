//! lintbridge core library.
//!
//! This crate plugs pylint's Python 3 compatibility checker (`pylint
//! --py3k`) into a small tool contract: build one command for a batch of
//! files, run it, and turn its line-oriented output into findings.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `tools`: The `Tool` contract and the `pylint3k` adapter.
//! - `lint`: Runs one tool over a file list and summarizes the result.
//! - `problems`: Collector that tools report findings into.
//! - `process`: External process execution and `PATH` lookup.
//! - `options`: Layered tool option maps.
//! - `models`: Finding and result structs.
//! - `output`: Human/JSON printers.
//! - `error`: Error types.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod models;
pub mod options;
pub mod output;
pub mod problems;
pub mod process;
pub mod tools;
pub mod utils;
