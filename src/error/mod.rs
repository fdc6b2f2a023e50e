//! Error handling for the Instagram client
//!
//! This module defines the error taxonomy shared by the facade, the transport
//! and every feature module.

pub mod types;

pub use types::{Error, Result};
