//! Thin CLI over the malscope library: load a sample's decoded view, optionally
//! neutralize its debugger checks, and print the statically resolved field values
//! as a flat JSON object.

use std::{path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use malscope::{
    analysis::{patcher, resolver},
    metadata::Assembly,
    Error,
};

/// malscope - static field value extraction and anti-debug patching for .NET samples
#[derive(Debug, Parser)]
#[command(name = "malscope", version, about, long_about = None)]
struct Cli {
    /// Path to the sample's decoded assembly view (.json) or managed binary.
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Only extract fields declared on this type (exact simple name).
    #[arg(short = 't', long = "type", value_name = "NAME")]
    type_filter: Option<String>,

    /// Invert the branch after every debugger-presence check and write the patched
    /// view to this path before extracting.
    #[arg(long, value_name = "OUT")]
    patch: Option<PathBuf>,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // malscope info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("malscope", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let mut assembly = match Assembly::from_file(&cli.path) {
        Ok(assembly) => assembly,
        Err(Error::MissingDependency { backend }) => {
            eprintln!("Unable to find the '{backend}' backend.");
            eprintln!("Please follow the installation instructions, or supply the decoded assembly view (.json) instead.");
            process::exit(1);
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("failed to load {}", cli.path.display())))
        }
    };

    if let Some(out) = &cli.patch {
        let patched = patcher::neutralize_debug_checks(&mut assembly);
        log::info!("inverted {patched} debugger check branch(es)");
        assembly
            .save(out)
            .with_context(|| format!("failed to write patched view to {}", out.display()))?;
    }

    let values = resolver::extract_statics(&assembly, cli.type_filter.as_deref());
    println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(values))?);

    Ok(())
}
