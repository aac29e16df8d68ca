//! Promptsmith command-line interface
//!
//! `promptsmith serve` starts the web UI; `optimize` and `status` run the same
//! operations once and print the result.

pub mod cli;
pub mod commands;
pub mod logging;
