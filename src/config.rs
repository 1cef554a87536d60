//! Runtime configuration read from `MOVE_BINDINGS_*` environment variables.

use std::path::PathBuf;

use anyhow::Result;
use move_bindings_types::env_utils::{env_bool, env_path, env_string_or};
use tracing::debug;

use crate::registry::{Registry, RegistryBuilder};

pub const SCHEMA_DIR_ENV: &str = "MOVE_BINDINGS_SCHEMA_DIR";
pub const STRICT_ENV: &str = "MOVE_BINDINGS_STRICT";
pub const LOG_ENV: &str = "MOVE_BINDINGS_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingsConfig {
    /// Extra schemas layered over the builtin ones.
    pub schema_dir: Option<PathBuf>,
    /// Treat builder/descriptor mismatches as errors.
    pub strict: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            schema_dir: None,
            strict: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BindingsConfig {
    pub fn from_env() -> Self {
        Self {
            schema_dir: env_path(SCHEMA_DIR_ENV),
            strict: env_bool(STRICT_ENV),
            log_filter: env_string_or(LOG_ENV, DEFAULT_LOG_FILTER),
        }
    }

    pub fn with_schema_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.schema_dir = dir;
        }
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict |= strict;
        self
    }

    /// Builtin modules plus everything under `schema_dir`.
    pub fn load_registry(&self) -> Result<Registry> {
        let mut builder = RegistryBuilder::new().with_builtin();
        if let Some(dir) = &self.schema_dir {
            let count = builder.load_schema_dir(dir)?;
            debug!(dir = %dir.display(), count, "layered extra schemas");
        }
        Ok(builder.build())
    }
}
