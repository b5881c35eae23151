//! The `rpc_service!` macro: compile-time generation of typed bindings.

/// Generates the typed bindings for one remote service.
///
/// Produces three things from a single declaration:
///
/// 1. the service trait, with every method returning [`Result`](crate::Result),
/// 2. a [`ServiceContract`](crate::contract::ServiceContract) exposed through
///    [`ServiceContractProvider`](crate::contract::ServiceContractProvider)
///    implemented for `dyn Trait`,
/// 3. `impl<C: Connector> Trait for RpcClient<C>`, routing every call through
///    the client's dispatch table.
///
/// Each method is declared with a leading `rpc` keyword, an optional
/// operation-name override, and optional per-parameter encode-target
/// overrides:
///
/// ```
/// use jsonrpc_binder::rpc_service;
///
/// rpc_service! {
///     pub trait Library {
///         rpc fn version(&self) -> String;
///         rpc "search.v2" fn search(&self, term: String as "q", page: u32) -> Vec<String>;
///     }
/// }
/// ```
#[macro_export]
macro_rules! rpc_service {
    (
        $(#[$attr:meta])*
        $vis:vis trait $name:ident {
            $(
                $(#[$method_attr:meta])*
                rpc $($operation:literal)? fn $method:ident(
                    &self
                    $(, $param:ident : $param_ty:ty $(as $target:literal)? )*
                    $(,)?
                ) $(-> $ret:ty)? ;
            )*
        }
    ) => {
        $(#[$attr])*
        $vis trait $name {
            $(
                $(#[$method_attr])*
                fn $method(&self, $($param: $param_ty),*)
                    -> $crate::error::Result<$crate::rpc_service!(@ret $($ret)?)>;
            )*
        }

        impl $crate::contract::ServiceContractProvider for dyn $name {
            fn contract() -> $crate::contract::ServiceContract {
                $crate::contract::ServiceContract::new(stringify!($name))
                $(
                    .with_method(
                        $crate::contract::MethodContract::new::<$crate::rpc_service!(@ret $($ret)?)>(
                            stringify!($method),
                        )
                        .with_rpc($crate::rpc_service!(@spec $($operation)?))
                        $(
                            .with_param($crate::rpc_service!(@param $param : $param_ty $(as $target)?))
                        )*
                    )
                )*
            }
        }

        impl<C: $crate::connector::Connector> $name for $crate::client::RpcClient<C> {
            $(
                fn $method(&self, $($param: $param_ty),*)
                    -> $crate::error::Result<$crate::rpc_service!(@ret $($ret)?)>
                {
                    let args = ::std::vec![
                        $( $crate::__rt::encode_arg($param)? ),*
                    ];
                    self.call(stringify!($method), args)
                }
            )*
        }
    };

    (@ret) => { () };
    (@ret $ret:ty) => { $ret };

    (@spec) => { $crate::contract::RpcCallSpec::unnamed() };
    (@spec $operation:literal) => { $crate::contract::RpcCallSpec::named($operation) };

    (@param $param:ident : $param_ty:ty) => {
        $crate::contract::ParamContract::of::<$param_ty>(stringify!($param))
    };
    (@param $param:ident : $param_ty:ty as $target:literal) => {
        $crate::contract::ParamContract::of::<$param_ty>(stringify!($param)).renamed($target)
    };
}
