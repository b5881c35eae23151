//! Service contract definitions describing remote operations.
//!
//! These types are built on the assumption that some form of code generation
//! is being used (e.g. using only `&'static str`s for names) — the
//! [`rpc_service!`](crate::rpc_service) macro produces them — but it's of
//! course possible to build contracts manually.
use std::any::{type_name, TypeId};

/// Operation-name override attached to an eligible method.
///
/// An empty override name means "unset": the method's own name is used as
/// the remote operation name, unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RpcCallSpec {
    name: Option<&'static str>,
}

impl RpcCallSpec {
    /// A remote call that uses the method's own name.
    pub fn unnamed() -> Self {
        Self { name: None }
    }

    /// A remote call with an explicit operation name.
    pub fn named(name: &'static str) -> Self {
        Self {
            name: if name.is_empty() { None } else { Some(name) },
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

/// One declared parameter of a remote operation.
#[derive(Clone, Debug)]
pub struct ParamContract {
    name: &'static str,
    rename: Option<&'static str>,
    type_id: TypeId,
    type_name: &'static str,
}

impl ParamContract {
    /// Declares a parameter of type `T` with the given name.
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Overrides the name the value is encoded under. An empty name leaves
    /// the declared name in effect.
    pub fn renamed(mut self, name: &'static str) -> Self {
        self.rename = if name.is_empty() { None } else { Some(name) };
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The name this parameter is encoded under: the override if set, else
    /// the declared name.
    pub fn target_name(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// One method of a service contract.
///
/// A method is eligible for binding iff it carries an [`RpcCallSpec`];
/// methods without one are skipped by the descriptor builder and invoking
/// them on a generated client fails with
/// [`Error::UnknownMethod`](crate::error::Error::UnknownMethod).
#[derive(Clone, Debug)]
pub struct MethodContract {
    name: &'static str,
    rpc: Option<RpcCallSpec>,
    params: Vec<ParamContract>,
    result_type: TypeId,
    result_type_name: &'static str,
}

impl MethodContract {
    /// Declares a method with result type `R`. The method starts out
    /// ineligible; mark it remote with [`with_rpc`](Self::with_rpc).
    pub fn new<R: 'static>(name: &'static str) -> Self {
        Self {
            name,
            rpc: None,
            params: Vec::new(),
            result_type: TypeId::of::<R>(),
            result_type_name: type_name::<R>(),
        }
    }

    pub fn with_rpc(mut self, spec: RpcCallSpec) -> Self {
        self.rpc = Some(spec);
        self
    }

    /// Appends a parameter. Declaration order is load-bearing: call-time
    /// arguments are zipped against parameters by position.
    pub fn with_param(mut self, param: ParamContract) -> Self {
        self.params.push(param);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_eligible(&self) -> bool {
        self.rpc.is_some()
    }

    /// The remote operation name, or `None` for ineligible methods: the
    /// override if set and non-empty, else the method's own name unchanged.
    pub fn operation_name(&self) -> Option<&'static str> {
        self.rpc.map(|spec| spec.name().unwrap_or(self.name))
    }

    pub fn params(&self) -> &[ParamContract] {
        &self.params
    }

    pub fn result_type(&self) -> TypeId {
        self.result_type
    }

    pub fn result_type_name(&self) -> &'static str {
        self.result_type_name
    }
}

/// A whole interface: the source of truth for descriptor construction.
#[derive(Clone, Debug)]
pub struct ServiceContract {
    name: &'static str,
    methods: Vec<MethodContract>,
}

impl ServiceContract {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodContract) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn methods(&self) -> &[MethodContract] {
        &self.methods
    }
}

/// Types that carry a service contract, usually `dyn Trait` for a trait
/// generated by [`rpc_service!`](crate::rpc_service).
pub trait ServiceContractProvider {
    fn contract() -> ServiceContract;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_name_means_unset() {
        assert_eq!(RpcCallSpec::named("").name(), None);
        assert_eq!(RpcCallSpec::named("search.v2").name(), Some("search.v2"));
    }

    #[test]
    fn test_param_target_name_prefers_override() {
        let param = ParamContract::of::<String>("keyword");
        assert_eq!(param.target_name(), "keyword");

        let param = ParamContract::of::<String>("keyword").renamed("q");
        assert_eq!(param.target_name(), "q");

        let param = ParamContract::of::<String>("keyword").renamed("");
        assert_eq!(param.target_name(), "keyword");
    }

    #[test]
    fn test_operation_name_resolution() {
        let method = MethodContract::new::<String>("version");
        assert!(!method.is_eligible());
        assert_eq!(method.operation_name(), None);

        let method = MethodContract::new::<String>("version").with_rpc(RpcCallSpec::unnamed());
        assert_eq!(method.operation_name(), Some("version"));

        let method =
            MethodContract::new::<String>("search").with_rpc(RpcCallSpec::named("search.v2"));
        assert_eq!(method.operation_name(), Some("search.v2"));
    }

    #[test]
    fn test_params_keep_declaration_order() {
        let method = MethodContract::new::<Vec<String>>("find")
            .with_rpc(RpcCallSpec::unnamed())
            .with_param(ParamContract::of::<String>("keyword"))
            .with_param(ParamContract::of::<u32>("page"));
        let names: Vec<_> = method.params().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["keyword", "page"]);
    }
}
