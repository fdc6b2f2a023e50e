//! Client facade
//!
//! [`ClientGeneric`] is the composition root: it binds one transport, one
//! device identity, at most one session and the result mode, and hands out
//! the feature modules that operate on that shared state.

pub mod facade;
pub mod mode;

pub use facade::{AuthState, Client, ClientGeneric};
pub use mode::{Outcome, ResultMode};
