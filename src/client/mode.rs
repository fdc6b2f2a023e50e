//! Result mode and the shape of operation results

use crate::{Result, transport::Response};
use serde::Serialize;

/// Whether operations decode responses or hand them back untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ResultMode {
    /// Decode into typed domain objects
    #[default]
    Normalized,
    /// Return the transport response unchanged
    Raw,
}

impl From<bool> for ResultMode {
    fn from(normalized: bool) -> Self {
        if normalized {
            Self::Normalized
        } else {
            Self::Raw
        }
    }
}

impl From<ResultMode> for bool {
    fn from(mode: ResultMode) -> Self {
        mode == ResultMode::Normalized
    }
}

/// Result of a feature operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<N> {
    Normalized(N),
    Raw(Response),
}

impl<N> Outcome<N> {
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    pub fn normalized(&self) -> Option<&N> {
        match self {
            Self::Normalized(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&Response> {
        match self {
            Self::Normalized(_) => None,
            Self::Raw(response) => Some(response),
        }
    }

    pub fn into_normalized(self) -> Option<N> {
        match self {
            Self::Normalized(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn into_raw(self) -> Option<Response> {
        match self {
            Self::Normalized(_) => None,
            Self::Raw(response) => Some(response),
        }
    }
}

impl<N: Serialize> Outcome<N> {
    /// JSON view of the result
    ///
    /// Raw bodies that are not JSON become a string value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Self::Normalized(value) => Ok(serde_json::to_value(value)?),
            Self::Raw(response) => Ok(serde_json::from_str(&response.body)
                .unwrap_or_else(|_| serde_json::Value::String(response.body.clone()))),
        }
    }
}
