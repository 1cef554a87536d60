//! Call payloads and the typed builders that produce them.
//!
//! A [`Payload`] is the call-intent record handed to a transaction submitter:
//!
//! ```json
//! {
//!   "type": "script_function_payload",
//!   "function": "0x1::coin::transfer",
//!   "type_arguments": ["0x1::test_coin::TestCoin"],
//!   "arguments": ["0x1", "500"]
//! }
//! ```
//!
//! Typed builders are declared with [`entry_function!`](crate::entry_function),
//! which generates the argument structs, the builder function and a
//! [`FunctionBinding`] describing its shape.

use move_bindings_types::ArgKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminant of every payload produced by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    #[default]
    ScriptFunctionPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    /// `<address>::<module>::<function>`
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}

impl Payload {
    pub fn new(
        function: impl Into<String>,
        type_arguments: Vec<String>,
        arguments: Vec<Value>,
    ) -> Self {
        Self {
            kind: PayloadKind::ScriptFunctionPayload,
            function: function.into(),
            type_arguments,
            arguments,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Static shape of one typed builder, used to check it against its descriptor.
#[derive(Debug, Clone, Copy)]
pub struct FunctionBinding {
    /// Fully-qualified module name.
    pub module: &'static str,
    pub name: &'static str,
    pub arguments: &'static [&'static str],
    /// Encoding class of each argument field, in the order of `arguments`.
    pub argument_kinds: fn() -> Vec<ArgKind>,
    pub type_parameters: &'static [&'static str],
}

impl FunctionBinding {
    pub fn function_id(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }
}

/// Declare a typed builder for one entry function.
///
/// Must be invoked in a module that defines `FULL_NAME` (the module's
/// `<address>::<module>` name), which `module_bindings!` provides. Each
/// declaration generates:
/// - `<Args>`: one public field per argument, in declared order
/// - `<TypeArgs>`: one `String` field per type parameter
/// - `pub fn <name>(..) -> Payload`, taking only the bundles the function declares
/// - `pub const <BINDING>: FunctionBinding`
///
/// Argument field types pick the payload encoding through
/// [`MoveArg`](crate::MoveArg): `u64`/`u128` become decimal text,
/// `AccountAddress` becomes short hex, `HexBytes` becomes hex text and
/// `Vec<T>` maps element-wise.
#[macro_export]
macro_rules! entry_function {
    // Arguments and type arguments.
    (
        $(#[$meta:meta])*
        $binding:ident: fn $name:ident(
            args: $args:ident { $( $arg:ident : $arg_ty:ty ),+ $(,)? },
            type_args: $targs:ident { $( $tparam:ident => $tfield:ident ),+ $(,)? } $(,)?
        );
    ) => {
        $crate::entry_function!(@args $args { $( $arg : $arg_ty ),+ });
        $crate::entry_function!(@type_args $targs { $( $tfield ),+ });
        $crate::entry_function!(
            @binding $binding $name [$( $arg : $arg_ty ),+] [$( $tparam ),+]
        );

        $(#[$meta])*
        pub fn $name(args: $args, type_args: $targs) -> $crate::payload::Payload {
            $crate::payload::Payload::new(
                $binding.function_id(),
                vec![$( type_args.$tfield ),+],
                vec![$( $crate::MoveArg::to_move_arg(&args.$arg) ),+],
            )
        }
    };

    // Arguments only.
    (
        $(#[$meta:meta])*
        $binding:ident: fn $name:ident(
            args: $args:ident { $( $arg:ident : $arg_ty:ty ),+ $(,)? } $(,)?
        );
    ) => {
        $crate::entry_function!(@args $args { $( $arg : $arg_ty ),+ });
        $crate::entry_function!(@binding $binding $name [$( $arg : $arg_ty ),+] []);

        $(#[$meta])*
        pub fn $name(args: $args) -> $crate::payload::Payload {
            $crate::payload::Payload::new(
                $binding.function_id(),
                vec![],
                vec![$( $crate::MoveArg::to_move_arg(&args.$arg) ),+],
            )
        }
    };

    // Type arguments only.
    (
        $(#[$meta:meta])*
        $binding:ident: fn $name:ident(
            type_args: $targs:ident { $( $tparam:ident => $tfield:ident ),+ $(,)? } $(,)?
        );
    ) => {
        $crate::entry_function!(@type_args $targs { $( $tfield ),+ });
        $crate::entry_function!(@binding $binding $name [] [$( $tparam ),+]);

        $(#[$meta])*
        pub fn $name(type_args: $targs) -> $crate::payload::Payload {
            $crate::payload::Payload::new(
                $binding.function_id(),
                vec![$( type_args.$tfield ),+],
                vec![],
            )
        }
    };

    // No arguments at all.
    (
        $(#[$meta:meta])*
        $binding:ident: fn $name:ident();
    ) => {
        $crate::entry_function!(@binding $binding $name [] []);

        $(#[$meta])*
        pub fn $name() -> $crate::payload::Payload {
            $crate::payload::Payload::new($binding.function_id(), vec![], vec![])
        }
    };

    (@args $args:ident { $( $arg:ident : $arg_ty:ty ),+ }) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $args {
            $( pub $arg: $arg_ty, )+
        }
    };

    (@type_args $targs:ident { $( $tfield:ident ),+ }) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $targs {
            $( pub $tfield: String, )+
        }
    };

    (@binding $binding:ident $name:ident
        [$( $arg:ident : $arg_ty:ty ),*] [$( $tparam:ident ),*]) => {
        pub const $binding: $crate::payload::FunctionBinding = $crate::payload::FunctionBinding {
            module: FULL_NAME,
            name: stringify!($name),
            arguments: &[$( stringify!($arg) ),*],
            argument_kinds: || vec![$( <$arg_ty as $crate::MoveArg>::arg_kind() ),*],
            type_parameters: &[$( stringify!($tparam) ),*],
        };
    };
}
