//! Extension-module discovery.
//!
//! Extension crates register encoders/decoders by submitting a
//! [`ClientModuleEntry`] through [`inventory`]; the discovered set is
//! collected once per process, deduplicated by identity, and read-only
//! thereafter. [`Introspector::create_default`] runs every discovered module
//! against a fresh introspector.
//!
//! ```
//! use jsonrpc_binder::module::{ClientModule, ClientModuleEntry};
//! use jsonrpc_binder::Introspector;
//!
//! struct PagingModule;
//!
//! impl ClientModule for PagingModule {
//!     fn name(&self) -> &'static str {
//!         "paging"
//!     }
//!
//!     fn initialize_introspector(&self, introspector: &mut Introspector) -> anyhow::Result<()> {
//!         introspector.register_parameter_encoder::<u32>(|name, value, params| {
//!             params.insert(name.to_string(), value);
//!         });
//!         Ok(())
//!     }
//! }
//!
//! inventory::submit! { ClientModuleEntry(&PagingModule) }
//! ```
use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::introspector::Introspector;

/// An independently packaged unit that pre-registers encoders/decoders
/// before any client is built.
pub trait ClientModule: Send + Sync {
    /// Module name, used in logs and error reports.
    fn name(&self) -> &'static str;

    /// Registers this module's encoders/decoders into the introspector.
    /// Called exactly once per introspector created through
    /// [`Introspector::create_default`].
    fn initialize_introspector(&self, introspector: &mut Introspector) -> anyhow::Result<()>;
}

/// Inventory entry wrapping a module reference; submit one per module.
pub struct ClientModuleEntry(pub &'static dyn ClientModule);

inventory::collect!(ClientModuleEntry);

// The only process-wide shared state in the crate: populated on first use,
// read-only afterwards. Deduplicated by module identity (the same static
// submitted twice counts once).
static MODULES: Lazy<Vec<&'static dyn ClientModule>> = Lazy::new(|| {
    let mut seen = HashSet::new();
    let mut modules = Vec::new();
    for entry in inventory::iter::<ClientModuleEntry>() {
        let identity = entry.0 as *const dyn ClientModule as *const ();
        if seen.insert(identity) {
            tracing::debug!(module = entry.0.name(), "discovered client module");
            modules.push(entry.0);
        }
    }
    modules
});

/// All modules discovered in this process.
pub fn discovered_modules() -> &'static [&'static dyn ClientModule] {
    &MODULES
}

/// Runs the given modules against a fresh introspector.
///
/// A module failure is startup-fatal: it is surfaced as
/// [`Error::ModuleInit`], never skipped or retried.
pub(crate) fn initialize_with(modules: &[&dyn ClientModule]) -> Result<Introspector> {
    let mut introspector = Introspector::new();
    for module in modules {
        tracing::debug!(module = module.name(), "initializing introspector");
        module
            .initialize_introspector(&mut introspector)
            .map_err(|source| Error::ModuleInit {
                module: module.name().to_string(),
                source,
            })?;
    }
    Ok(introspector)
}
