//! move-bindings: inspect the bundled module bindings from the command line.
//!
//! ```bash
//! # List modules
//! move-bindings modules --package aptos_framework
//!
//! # Show a module's descriptor
//! move-bindings describe 0x1::coin
//!
//! # Decode an abort code
//! move-bindings abort 0x1::coin 0x10005
//!
//! # Build a payload from JSON arguments
//! move-bindings payload 0x1::coin::transfer \
//!     --args '{"to": "0x1", "amount": 500}' --type-arg 0x1::test_coin::TestCoin
//!
//! # Check typed builders against their descriptors
//! move-bindings verify
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use move_bindings::{BindingsConfig, Registry};

#[derive(Parser)]
#[command(
    name = "move-bindings",
    author,
    version,
    about = "Inspect Move module bindings and build call payloads"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of extra module schemas (overrides MOVE_BINDINGS_SCHEMA_DIR)
    #[arg(long, global = true)]
    schema_dir: Option<PathBuf>,

    /// Fail when a typed builder disagrees with its descriptor
    #[arg(long, global = true)]
    strict: bool,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered modules
    Modules {
        /// Only modules of this package
        #[arg(long)]
        package: Option<String>,
    },

    /// Print a module's descriptor as JSON
    Describe {
        /// Module name: "0x1::coin", "aptos_framework::coin" or a legacy name
        module: String,
    },

    /// Decode an abort code raised by a module
    Abort {
        module: String,
        /// Decimal or 0x-prefixed hex
        code: String,
    },

    /// Build a call payload for an entry function
    Payload {
        /// "<module>::<function>"
        function: String,

        /// Arguments as a JSON object keyed by argument name
        #[arg(long)]
        args: Option<String>,

        /// Type argument, repeated in declared order
        #[arg(long = "type-arg")]
        type_args: Vec<String>,
    },

    /// Check every typed builder against its module descriptor
    Verify,
}

fn main() -> Result<()> {
    let Cli {
        command,
        schema_dir,
        strict,
        json,
        verbose,
    } = Cli::parse();

    let config = BindingsConfig::from_env()
        .with_schema_dir(schema_dir)
        .with_strict(strict);
    init_tracing(&config, verbose);
    debug!(?config, "starting");

    let registry = config.load_registry()?;
    if config.strict && !matches!(command, Commands::Verify) {
        let mismatches = registry.verify_bindings();
        if !mismatches.is_empty() {
            bail!(
                "{} binding mismatch(es) in strict mode; run `move-bindings verify` for details",
                mismatches.len()
            );
        }
    }

    match command {
        Commands::Modules { package } => list_modules(&registry, package.as_deref(), json),
        Commands::Describe { module } => describe(&registry, &module),
        Commands::Abort { module, code } => decode_abort(&registry, &module, &code, json),
        Commands::Payload {
            function,
            args,
            type_args,
        } => build_payload(&registry, &function, args.as_deref(), &type_args),
        Commands::Verify => verify(&registry, json),
    }
}

/// `RUST_LOG` wins, then `-v`, then the configured filter.
fn init_tracing(config: &BindingsConfig, verbose: u8) {
    let fallback = match verbose {
        0 => config.log_filter.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[derive(Serialize)]
struct ModuleSummary<'a> {
    module: &'a str,
    package: &'a str,
    functions: usize,
    structs: usize,
    error_codes: usize,
}

fn list_modules(registry: &Registry, package: Option<&str>, json_output: bool) -> Result<()> {
    let summaries: Vec<ModuleSummary> = registry
        .modules()
        .filter(|e| package.map_or(true, |p| e.package == p))
        .map(|e| ModuleSummary {
            module: e.full_name(),
            package: &e.package,
            functions: e.descriptor.functions().len(),
            structs: e.descriptor.structs().len(),
            error_codes: e.descriptor.error_codes().len(),
        })
        .collect();

    if let Some(p) = package {
        if summaries.is_empty() {
            bail!("unknown package '{}'", p);
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for s in &summaries {
        println!(
            "{:<28} {:<16} {} functions, {} structs, {} error codes",
            s.module, s.package, s.functions, s.structs, s.error_codes
        );
    }
    Ok(())
}

fn describe(registry: &Registry, module: &str) -> Result<()> {
    let descriptor = registry
        .descriptor(module)
        .ok_or_else(|| anyhow!("unknown module '{}'", module))?;
    println!("{}", descriptor.to_json_pretty()?);
    Ok(())
}

fn parse_code(code: &str) -> Result<u64> {
    let code = code.trim();
    match code.strip_prefix("0x").or_else(|| code.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => code.parse(),
    }
    .with_context(|| format!("invalid abort code '{}'", code))
}

fn decode_abort(registry: &Registry, module: &str, code: &str, json_output: bool) -> Result<()> {
    let entry = registry
        .module(module)
        .ok_or_else(|| anyhow!("unknown module '{}'", module))?;
    let code = parse_code(code)?;
    let info = entry
        .descriptor
        .decode_abort(code)
        .ok_or_else(|| anyhow!("{} declares no error for code {}", entry.full_name(), code))?;

    if json_output {
        let mut value = serde_json::to_value(&info)?;
        if let Value::Object(map) = &mut value {
            map.insert("module".to_string(), Value::from(entry.full_name()));
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut line = format!("{}: {}", entry.full_name(), info.error.name);
    if let Some(category) = info.category {
        line.push_str(&format!(
            " (category {} {:#x}, reason {})",
            info.category_name.unwrap_or("UNKNOWN"),
            category,
            info.reason
        ));
    }
    if let Some(doc) = &info.error.doc {
        line.push_str(&format!(": {}", doc));
    }
    println!("{}", line);
    Ok(())
}

fn build_payload(
    registry: &Registry,
    function: &str,
    args: Option<&str>,
    type_args: &[String],
) -> Result<()> {
    let args: Option<Map<String, Value>> = args
        .map(|raw| {
            serde_json::from_str::<Map<String, Value>>(raw)
                .context("--args must be a JSON object keyed by argument name")
        })
        .transpose()?;
    let payload = registry.build_payload(function, args.as_ref(), type_args)?;
    println!("{}", payload.to_json_pretty()?);
    Ok(())
}

fn verify(registry: &Registry, json_output: bool) -> Result<()> {
    let mismatches = registry.verify_bindings();
    if json_output {
        println!("{}", serde_json::to_string_pretty(&mismatches)?);
    } else if mismatches.is_empty() {
        println!("{} modules verified", registry.len());
    } else {
        for m in &mismatches {
            println!("{}", m);
        }
    }
    if !mismatches.is_empty() {
        bail!("{} binding mismatch(es)", mismatches.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("5").unwrap(), 5);
        assert_eq!(parse_code("0x10005").unwrap(), 0x10005);
        assert_eq!(parse_code(" 0XA ").unwrap(), 10);
        assert!(parse_code("0xzz").is_err());
        assert!(parse_code("-1").is_err());
    }
}
