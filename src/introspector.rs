//! The descriptor builder: turns service contracts into dispatch tables and
//! generated clients, consulting the encoder/decoder registries.
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::call::{BoundEncoder, CallDescriptor};
use crate::client::{DispatchTable, RpcClient};
use crate::connector::Connector;
use crate::contract::{MethodContract, ServiceContract, ServiceContractProvider};
use crate::error::{Error, Result};
use crate::module;
use crate::registry::{DecoderRegistry, EncoderRegistry};

/// Builds clients for service contracts.
///
/// Owns the two type-indexed registries. Registration is expected to finish
/// before any client is built; descriptors bind their encoders and decoders
/// at build time, so later registrations never affect already-built clients.
pub struct Introspector {
    encoders: EncoderRegistry,
    decoders: DecoderRegistry,
}

impl std::fmt::Debug for Introspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Introspector").finish_non_exhaustive()
    }
}

impl Introspector {
    /// An introspector with empty registries.
    pub fn new() -> Self {
        Self {
            encoders: EncoderRegistry::new(),
            decoders: DecoderRegistry::new(),
        }
    }

    /// A fresh introspector pre-populated by every discovered
    /// [`ClientModule`](crate::module::ClientModule).
    ///
    /// Each call yields an independent instance initialized from the same
    /// module set; a failing module aborts with [`Error::ModuleInit`].
    pub fn create_default() -> Result<Self> {
        module::initialize_with(module::discovered_modules())
    }

    /// Registers an encoder for parameters declared as `T`, replacing any
    /// previous registration for exactly `T`.
    pub fn register_parameter_encoder<T: 'static>(
        &mut self,
        encoder: impl Fn(&str, Value, &mut Map<String, Value>) + Send + Sync + 'static,
    ) {
        self.encoders.register::<T>(encoder);
    }

    /// Registers a decoder for results declared as `T`, replacing any
    /// previous registration for exactly `T`.
    pub fn register_result_decoder<T: 'static>(
        &mut self,
        decoder: impl Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) {
        self.decoders.register::<T>(decoder);
    }

    pub fn parameter_encoders(&self) -> &EncoderRegistry {
        &self.encoders
    }

    pub fn result_decoders(&self) -> &DecoderRegistry {
        &self.decoders
    }

    /// Builds the descriptor for one method, or `None` if the method is not
    /// marked as a remote call.
    pub fn build_descriptor(&self, method: &MethodContract) -> Option<CallDescriptor> {
        let name = method.operation_name()?;

        let mut encoders: Vec<BoundEncoder> = Vec::with_capacity(method.params().len());
        for param in method.params() {
            let target = param.target_name();
            let encoder = self.encoders.lookup(param.type_id());
            encoders.push(Box::new(move |value, params: &mut Map<String, Value>| {
                encoder(target, value, params)
            }));
        }

        let decoder = self.decoders.lookup(method.result_type());

        Some(CallDescriptor::new(name, encoders, decoder))
    }

    /// Builds the full dispatch table for a contract. Methods without
    /// remote-call metadata are skipped entirely.
    pub fn build_dispatch_table(&self, contract: &ServiceContract) -> Result<DispatchTable> {
        let mut calls = DispatchTable::new();
        for method in contract.methods() {
            let Some(descriptor) = self.build_descriptor(method) else {
                continue;
            };
            tracing::debug!(
                service = contract.name(),
                method = method.name(),
                operation = descriptor.name(),
                "bound rpc call"
            );
            if calls.insert(method.name(), Arc::new(descriptor)).is_some() {
                return Err(Error::DuplicateMethod(format!(
                    "{}.{}",
                    contract.name(),
                    method.name()
                )));
            }
        }
        Ok(calls)
    }

    /// Builds a client for the contract carried by `I` (usually `dyn Trait`
    /// for a trait generated by [`rpc_service!`](crate::rpc_service)).
    pub fn create_client<I, C>(&self, connector: C) -> Result<RpcClient<C>>
    where
        I: ServiceContractProvider + ?Sized,
        C: Connector,
    {
        self.create_client_for(&I::contract(), connector)
    }

    /// Builds a client for an explicit contract value.
    pub fn create_client_for<C: Connector>(
        &self,
        contract: &ServiceContract,
        connector: C,
    ) -> Result<RpcClient<C>> {
        let calls = self.build_dispatch_table(contract)?;
        Ok(RpcClient::new(connector, calls))
    }
}

impl Default for Introspector {
    fn default() -> Self {
        Self::new()
    }
}
