//! Type-indexed registries for parameter encoders and result decoders.
//!
//! Lookups match the declared type exactly — there is no supertype or trait
//! based fallback — and fall back to the module-level defaults: the default
//! encoder writes the raw value under the target name, the default decoder
//! is identity. Registries only grow; registering twice for the same type
//! overwrites the previous entry.
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

/// Writes one named value into an outgoing parameter set.
pub type Encoder = Arc<dyn Fn(&str, Value, &mut Map<String, Value>) + Send + Sync>;

/// Converts one raw remote result. `Err` surfaces as
/// [`Error::DecoderFailure`](crate::error::Error::DecoderFailure) at the
/// call site.
pub type Decoder = Arc<dyn Fn(Value) -> anyhow::Result<Value> + Send + Sync>;

static DEFAULT_ENCODER: Lazy<Encoder> = Lazy::new(|| {
    Arc::new(|name, value, params| {
        params.insert(name.to_string(), value);
    })
});

static IDENTITY_DECODER: Lazy<Decoder> = Lazy::new(|| Arc::new(|value| Ok(value)));

pub struct EncoderRegistry {
    table: HashMap<TypeId, Encoder>,
}

impl EncoderRegistry {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn register<T: 'static>(
        &mut self,
        encoder: impl Fn(&str, Value, &mut Map<String, Value>) + Send + Sync + 'static,
    ) {
        tracing::debug!(param_type = type_name::<T>(), "registering parameter encoder");
        self.table.insert(TypeId::of::<T>(), Arc::new(encoder));
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.table.contains_key(&TypeId::of::<T>())
    }

    /// The encoder registered for the given declared type, or the default
    /// encoder if none is registered.
    pub fn lookup(&self, type_id: TypeId) -> Encoder {
        self.table
            .get(&type_id)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENCODER.clone())
    }
}

impl Default for EncoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DecoderRegistry {
    table: HashMap<TypeId, Decoder>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn register<T: 'static>(
        &mut self,
        decoder: impl Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) {
        tracing::debug!(result_type = type_name::<T>(), "registering result decoder");
        self.table.insert(TypeId::of::<T>(), Arc::new(decoder));
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.table.contains_key(&TypeId::of::<T>())
    }

    /// The decoder registered for the given declared type, or the identity
    /// decoder if none is registered.
    pub fn lookup(&self, type_id: TypeId) -> Decoder {
        self.table
            .get(&type_id)
            .cloned()
            .unwrap_or_else(|| IDENTITY_DECODER.clone())
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_encoder_writes_raw_value() {
        let registry = EncoderRegistry::new();
        let encoder = registry.lookup(TypeId::of::<String>());

        let mut params = Map::new();
        encoder("keyword", json!("cat"), &mut params);
        assert_eq!(params.get("keyword"), Some(&json!("cat")));
    }

    #[test]
    fn test_registered_encoder_replaces_default() {
        let mut registry = EncoderRegistry::new();
        registry.register::<u32>(|name, value, params| {
            params.insert(format!("{name}_wrapped"), json!({ "v": value }));
        });

        let encoder = registry.lookup(TypeId::of::<u32>());
        let mut params = Map::new();
        encoder("page", json!(2), &mut params);
        assert_eq!(params.get("page_wrapped"), Some(&json!({ "v": 2 })));
    }

    #[test]
    fn test_lookup_is_exact_type_match() {
        let mut registry = EncoderRegistry::new();
        registry.register::<u32>(|name, _, params| {
            params.insert(name.to_string(), json!("registered"));
        });

        // no fallback across numeric types or anything else
        let encoder = registry.lookup(TypeId::of::<u64>());
        let mut params = Map::new();
        encoder("page", json!(2), &mut params);
        assert_eq!(params.get("page"), Some(&json!(2)));
    }

    #[test]
    fn test_register_overwrites_previous_entry() {
        let mut registry = DecoderRegistry::new();
        registry.register::<String>(|_| Ok(json!("first")));
        registry.register::<String>(|_| Ok(json!("second")));

        let decoder = registry.lookup(TypeId::of::<String>());
        assert_eq!(decoder(json!(null)).unwrap(), json!("second"));
    }

    #[test]
    fn test_identity_decoder_is_default() {
        let registry = DecoderRegistry::new();
        let decoder = registry.lookup(TypeId::of::<Vec<String>>());
        assert_eq!(decoder(json!(["a", "b"])).unwrap(), json!(["a", "b"]));
    }
}
