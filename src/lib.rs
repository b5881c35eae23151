//! Client-side RPC binding generator.
//!
//! Given a service contract describing remote operations and a [`Connector`]
//! able to execute named remote calls, this crate builds a concrete client
//! with no per-method plumbing: at setup time an [`Introspector`] resolves
//! every eligible method into an immutable call descriptor (operation name,
//! ordered bound parameter encoders, bound result decoder), and the
//! resulting [`RpcClient`] routes each invocation through its descriptor to
//! the connector.
//!
//! The crate does not define the wire protocol, perform network I/O, retry
//! or cache calls; all of that belongs to the connector implementation.
//!
//! ```
//! use jsonrpc_binder::{rpc_service, Connector, Introspector};
//! use serde_json::{json, Map, Value};
//!
//! rpc_service! {
//!     pub trait Library {
//!         rpc fn version(&self) -> String;
//!         rpc "search.v2" fn search(&self, term: String) -> Vec<String>;
//!     }
//! }
//!
//! struct FixedConnector;
//!
//! impl Connector for FixedConnector {
//!     fn execute(&self, _method: &str) -> anyhow::Result<Value> {
//!         Ok(json!("1.0.0"))
//!     }
//!
//!     fn execute_with_params(
//!         &self,
//!         _method: &str,
//!         _params: Map<String, Value>,
//!     ) -> anyhow::Result<Value> {
//!         Ok(json!(["cat pictures"]))
//!     }
//! }
//!
//! let introspector = Introspector::create_default()?;
//! let client = introspector.create_client::<dyn Library, _>(FixedConnector)?;
//!
//! assert_eq!(client.version()?, "1.0.0");
//! assert_eq!(client.search("cat".to_string())?, vec!["cat pictures".to_string()]);
//! # Ok::<(), jsonrpc_binder::Error>(())
//! ```
pub mod __rt;
pub mod call;
pub mod client;
pub mod connector;
pub mod contract;
pub mod datetime;
pub mod error;
pub mod introspector;
mod macros;
pub mod module;
pub mod registry;

pub use call::CallDescriptor;
pub use client::{DispatchTable, RpcClient};
pub use connector::Connector;
pub use contract::{
    MethodContract, ParamContract, RpcCallSpec, ServiceContract, ServiceContractProvider,
};
pub use error::{Error, Result};
pub use introspector::Introspector;
pub use module::{ClientModule, ClientModuleEntry};
