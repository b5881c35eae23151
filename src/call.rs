//! Resolved call descriptors and their execution against a connector.
use serde_json::{Map, Value};

use crate::connector::Connector;
use crate::error::{Error, Result};
use crate::registry::Decoder;

/// A parameter encoder bound to its encode-target name.
pub type BoundEncoder = Box<dyn Fn(Value, &mut Map<String, Value>) + Send + Sync>;

/// The resolved, immutable description of one remote operation: its name,
/// one bound encoder per parameter position (in declaration order) and the
/// bound result decoder.
///
/// Built exactly once per eligible method at client-generation time and
/// owned by the client's dispatch table; never mutated afterwards, so it is
/// safe to share across concurrent invocations.
pub struct CallDescriptor {
    name: &'static str,
    encoders: Vec<BoundEncoder>,
    decoder: Decoder,
}

impl std::fmt::Debug for CallDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CallDescriptor {
    pub(crate) fn new(name: &'static str, encoders: Vec<BoundEncoder>, decoder: Decoder) -> Self {
        Self {
            name,
            encoders,
            decoder,
        }
    }

    /// The remote operation name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The number of parameters this call takes.
    pub fn arity(&self) -> usize {
        self.encoders.len()
    }

    /// Executes the call on the given connector.
    ///
    /// Arguments are encoded strictly in declaration order. A call whose
    /// parameter set ends up empty uses the connector's no-parameter form —
    /// never the parameterized form with an empty set, the two may differ on
    /// the wire.
    pub fn execute<C: Connector + ?Sized>(&self, connector: &C, args: Vec<Value>) -> Result<Value> {
        if args.len() != self.encoders.len() {
            return Err(Error::ArityMismatch {
                method: self.name.to_string(),
                expected: self.encoders.len(),
                actual: args.len(),
            });
        }

        let mut params = Map::new();
        for (encoder, value) in self.encoders.iter().zip(args) {
            encoder(value, &mut params);
        }

        let raw = if params.is_empty() {
            connector.execute(self.name)?
        } else {
            connector.execute_with_params(self.name, params)?
        };

        (self.decoder)(raw).map_err(|source| Error::DecoderFailure {
            method: self.name.to_string(),
            source,
        })
    }
}
