//! Schema-driven payload building.
//!
//! Where the typed builders fix the argument shape at compile time, this path
//! takes named JSON arguments and encodes each one according to the type its
//! descriptor declares. It is what tooling uses when the function to call is
//! only known at runtime.

use move_bindings_types::{encode_json_arg, parse_type_tag, EncodingError};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::descriptor::FunctionSignature;
use crate::payload::Payload;
use crate::registry::Registry;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("missing argument '{0}'")]
    MissingArgument(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("expected {expected} type arguments, got {found}")]
    TypeArgumentCount { expected: usize, found: usize },

    #[error("invalid type argument '{0}'")]
    InvalidTypeArgument(String),

    #[error("argument '{name}' has unsupported type '{ty}'")]
    UnsupportedType { name: String, ty: String },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl FunctionSignature {
    /// Build a payload for this function of module `module_full_name`.
    ///
    /// `args` is keyed by argument name and may be omitted when the function
    /// takes no arguments. Type arguments are positional and must be concrete
    /// type tags.
    pub fn build_payload(
        &self,
        module_full_name: &str,
        args: Option<&Map<String, Value>>,
        type_args: &[String],
    ) -> Result<Payload, BuildError> {
        if type_args.len() != self.type_parameters.len() {
            return Err(BuildError::TypeArgumentCount {
                expected: self.type_parameters.len(),
                found: type_args.len(),
            });
        }
        let type_arguments = type_args
            .iter()
            .map(|t| {
                parse_type_tag(t)
                    .map(|_| t.trim().to_string())
                    .ok_or_else(|| BuildError::InvalidTypeArgument(t.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let empty = Map::new();
        let args = args.unwrap_or(&empty);
        if let Some(extra) = args
            .keys()
            .find(|k| !self.argument_names().any(|name| name == k.as_str()))
        {
            return Err(BuildError::UnexpectedArgument(extra.clone()));
        }

        let kinds = self
            .argument_kinds()
            .map_err(|(name, ty)| BuildError::UnsupportedType {
                name: name.to_string(),
                ty: ty.to_string(),
            })?;

        let mut arguments = Vec::with_capacity(self.arguments.len());
        for (arg, kind) in self.arguments.iter().zip(&kinds) {
            let value = args
                .get(&arg.name)
                .ok_or_else(|| BuildError::MissingArgument(arg.name.clone()))?;
            arguments.push(encode_json_arg(kind, value)?);
        }

        Ok(Payload::new(
            format!("{}::{}", module_full_name, self.name),
            type_arguments,
            arguments,
        ))
    }
}

/// Build a payload for `function_id` (`<module>::<function>`) through `registry`.
///
/// The module part accepts every form [`Registry::module`] does.
pub fn build_payload(
    registry: &Registry,
    function_id: &str,
    args: Option<&Map<String, Value>>,
    type_args: &[String],
) -> Result<Payload, BuildError> {
    let (entry, signature) = registry
        .function(function_id)
        .ok_or_else(|| BuildError::UnknownFunction(function_id.to_string()))?;
    signature.build_payload(entry.full_name(), args, type_args)
}
