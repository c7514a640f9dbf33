use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Repo automation for labnote")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// (Re)generate JSON Schemas for trials, snapshots and config.
    Schema {
        /// Output directory
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },

    /// Validate `*.trial.json` and `*.snapshot.json` fixtures against the
    /// generated schemas.
    Validate {
        #[arg(long, default_value = "schemas")]
        schema_dir: PathBuf,

        #[arg(long, default_value = "fixtures/**/*.json")]
        pattern: String,
    },

    /// Run the "usual" repo checks (fmt, clippy, test, schema, validate).
    Ci,

    /// Run mutation testing via cargo-mutants (must be installed).
    Mutants {
        /// Extra args forwarded to cargo-mutants
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
}

const TRIAL_SCHEMA_FILE: &str = "labnote.trial.v1.schema.json";
const SNAPSHOT_SCHEMA_FILE: &str = "labnote.snapshot.v1.schema.json";
const CONFIG_SCHEMA_FILE: &str = "labnote.config.v1.schema.json";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Schema { out_dir } => cmd_schema(&out_dir),
        Command::Validate {
            schema_dir,
            pattern,
        } => cmd_validate(&schema_dir, &pattern),
        Command::Ci => cmd_ci(),
        Command::Mutants { args } => cmd_mutants(args),
    }
}

fn cmd_ci() -> anyhow::Result<()> {
    run("cargo", ["fmt", "--all", "--", "--check"])?;
    run(
        "cargo",
        ["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"],
    )?;
    run("cargo", ["test", "--all"])?;
    run("cargo", ["run", "-p", "xtask", "--", "schema"])?;
    run("cargo", ["run", "-p", "xtask", "--", "validate"])?;
    Ok(())
}

fn cmd_mutants(args: Vec<String>) -> anyhow::Result<()> {
    // Typical usage: `cargo install cargo-mutants` then `cargo run -p xtask -- mutants`.
    let mut cmd = std::process::Command::new("cargo");
    cmd.arg("mutants");
    for a in args {
        cmd.arg(a);
    }
    let status = cmd.status().context("running cargo mutants")?;
    if !status.success() {
        anyhow::bail!("cargo mutants failed: {status}");
    }
    Ok(())
}

fn run<const N: usize>(bin: &str, args: [&str; N]) -> anyhow::Result<()> {
    let status = std::process::Command::new(bin)
        .args(args)
        .status()
        .with_context(|| format!("running {bin}"))?;
    if !status.success() {
        anyhow::bail!("{bin} failed: {status}");
    }
    Ok(())
}

fn cmd_schema(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create dir {}", out_dir.display()))?;

    write_schema(
        out_dir,
        TRIAL_SCHEMA_FILE,
        schema_for!(labnote_types::TrialRecord),
    )?;

    write_schema(
        out_dir,
        SNAPSHOT_SCHEMA_FILE,
        schema_for!(labnote_types::ExperimentSnapshot),
    )?;

    write_schema(
        out_dir,
        CONFIG_SCHEMA_FILE,
        schema_for!(labnote_types::ConfigFile),
    )?;

    Ok(())
}

fn write_schema<T: serde::Serialize>(out_dir: &Path, name: &str, schema: T) -> anyhow::Result<()> {
    let path = out_dir.join(name);
    let json = serde_json::to_vec_pretty(&schema)?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn cmd_validate(schema_dir: &Path, pattern: &str) -> anyhow::Result<()> {
    let kind = Regex::new(r"\.(trial|snapshot)\.json$")?;
    let mut checked = 0usize;
    let mut failures = Vec::new();

    for entry in glob::glob(pattern).with_context(|| format!("bad glob {pattern}"))? {
        let path = entry?;
        let name = path.to_string_lossy();
        let Some(caps) = kind.captures(&name) else {
            continue;
        };
        let schema_file = match &caps[1] {
            "trial" => TRIAL_SCHEMA_FILE,
            _ => SNAPSHOT_SCHEMA_FILE,
        };

        let schema = read_json(&schema_dir.join(schema_file))?;
        let instance = read_json(&path)?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| anyhow::anyhow!("invalid schema {schema_file}: {e}"))?;

        let errors: Vec<String> = validator
            .iter_errors(&instance)
            .map(|e| format!("{}: {e}", e.instance_path))
            .collect();
        if !errors.is_empty() {
            failures.push(format!("{}:\n  {}", path.display(), errors.join("\n  ")));
        }
        checked += 1;
    }

    if !failures.is_empty() {
        anyhow::bail!("{} fixture(s) failed validation:\n{}", failures.len(), failures.join("\n"));
    }
    println!("validated {checked} fixture(s)");
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}
