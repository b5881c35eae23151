//! The transport boundary consumed by generated clients.
//!
//! A [`Connector`] executes one named remote operation and hands back the raw
//! JSON result. Everything transport-level lives behind this trait: framing,
//! timeouts, retries, connection management. The binding core treats a call
//! as an opaque blocking operation and propagates connector failures to the
//! caller unchanged.
use std::sync::Arc;

use serde_json::{Map, Value};

/// Executes named remote operations.
///
/// The two call forms are distinct on purpose: a call without parameters and
/// a call with an empty parameter set may serialize differently on the wire,
/// so the core never collapses one into the other.
pub trait Connector: Send + Sync {
    /// Invoke a remote operation that takes no parameters.
    fn execute(&self, method: &str) -> anyhow::Result<Value>;

    /// Invoke a remote operation with named parameters.
    fn execute_with_params(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> anyhow::Result<Value>;
}

impl<C: Connector + ?Sized> Connector for &C {
    fn execute(&self, method: &str) -> anyhow::Result<Value> {
        (**self).execute(method)
    }

    fn execute_with_params(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> anyhow::Result<Value> {
        (**self).execute_with_params(method, params)
    }
}

impl<C: Connector + ?Sized> Connector for Arc<C> {
    fn execute(&self, method: &str) -> anyhow::Result<Value> {
        (**self).execute(method)
    }

    fn execute_with_params(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> anyhow::Result<Value> {
        (**self).execute_with_params(method, params)
    }
}

impl<C: Connector + ?Sized> Connector for Box<C> {
    fn execute(&self, method: &str) -> anyhow::Result<Value> {
        (**self).execute(method)
    }

    fn execute_with_params(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> anyhow::Result<Value> {
        (**self).execute_with_params(method, params)
    }
}
