//! Command-line front end
//!
//! Contains the argument definitions and the run loop of the `ig-client`
//! binary.

pub mod commands;

pub use commands::{Cli, Command, run};
