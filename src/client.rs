//! The generated client: a frozen dispatch table over a connector.
use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::call::CallDescriptor;
use crate::connector::Connector;
use crate::error::{Error, Result};

/// Per-client mapping from method identity to its call descriptor.
///
/// Built once per generated client and read-only thereafter, which is what
/// makes a client safe to share across threads (provided its connector is).
pub type DispatchTable = HashMap<&'static str, Arc<CallDescriptor>>;

/// A generated client for one service contract.
///
/// Traits produced by [`rpc_service!`](crate::rpc_service) are implemented
/// for this type, so a `RpcClient<C>` obtained from
/// [`Introspector::create_client`](crate::introspector::Introspector::create_client)
/// can be used through the typed trait directly. The dynamic entry points
/// ([`invoke`](Self::invoke), [`call`](Self::call)) are also public for
/// callers that work from contract values instead of generated traits.
pub struct RpcClient<C> {
    connector: C,
    calls: DispatchTable,
}

impl<C: Connector> RpcClient<C> {
    pub(crate) fn new(connector: C, calls: DispatchTable) -> Self {
        Self { connector, calls }
    }

    /// Executes the descriptor registered for `method` and returns the
    /// decoded raw result.
    ///
    /// Methods that were not part of the contract, or were skipped as
    /// ineligible, have no descriptor and fail with
    /// [`Error::UnknownMethod`].
    pub fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        let call = self
            .calls
            .get(method)
            .ok_or_else(|| Error::UnknownMethod(method.to_string()))?;
        call.execute(&self.connector, args)
    }

    /// Typed variant of [`invoke`](Self::invoke): deserializes the decoded
    /// result into `R`.
    pub fn call<R: DeserializeOwned>(&self, method: &str, args: Vec<Value>) -> Result<R> {
        let raw = self.invoke(method, args)?;
        serde_json::from_value(raw).map_err(Error::DecodeError)
    }

    /// Names of all methods with a bound descriptor.
    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.calls.keys().copied()
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }
}
