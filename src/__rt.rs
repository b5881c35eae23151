//! Utility functions used by generated code; this is *not* part of the
//! crate's public API!
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Converts one call-time argument into its wire value.
pub fn encode_arg<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(Error::EncodeError)
}
