//! # Keyring CLI
//!
//! Command-line host for the key derivation subsystem.
//!
//! ## Usage
//!
//! ```text
//! keyring-cli algorithms
//! echo "<mnemonic>" | keyring-cli derive --algo secp256k1 --hd-path "m/44'/60'/0'/0/0"
//! ```
//!
//! ## Configuration
//!
//! Defaults come from `KeyringConfig`, then environment overrides, then flags:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `KEYRING_ALGO` | default algorithm tag |
//! | `KEYRING_HD_PATH` | default HD path |
//! | `KEYRING_COIN_TYPE` | coin type used by `--index` |
//! | `KEYRING_PASSPHRASE` | BIP-39 passphrase (empty if unset) |
//! | `RUST_LOG` | log filter (default `info`) |
//!
//! Logs go to stderr; stdout carries only the report.

use std::env::VarError;
use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zeroize::Zeroizing;

use key_derivation::{AlgorithmRegistry, AlgorithmTag, KeyringConfig, KeyringService};

const ENV_ALGO: &str = "KEYRING_ALGO";
const ENV_HD_PATH: &str = "KEYRING_HD_PATH";
const ENV_COIN_TYPE: &str = "KEYRING_COIN_TYPE";
const ENV_PASSPHRASE: &str = "KEYRING_PASSPHRASE";

/// Keyring CLI: derive secp256k1 keys from BIP-39 mnemonics
#[derive(Parser, Debug)]
#[command(name = "keyring-cli")]
#[command(about = "Derive secp256k1 keys from BIP-39 mnemonics by signing algorithm")]
struct Args {
    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported signing algorithms in registration order
    Algorithms,

    /// Derive a key from a mnemonic read on stdin
    Derive(DeriveArgs),
}

#[derive(clap::Args, Debug)]
struct DeriveArgs {
    /// Signing algorithm tag (defaults to the configured algorithm)
    #[arg(long)]
    algo: Option<String>,

    /// HD path (ignored by eth_secp256k1)
    #[arg(long, conflicts_with = "index")]
    hd_path: Option<String>,

    /// Address index on the configured coin type, account 0
    #[arg(long)]
    index: Option<u32>,

    /// Also print the private key as hex
    #[arg(long)]
    unsafe_export_key: bool,
}

/// Load configuration from environment.
fn load_config() -> KeyringConfig {
    load_config_from(|key| std::env::var(key).ok())
}

fn load_config_from(var: impl Fn(&str) -> Option<String>) -> KeyringConfig {
    let mut config = KeyringConfig::default();

    if let Some(algo) = var(ENV_ALGO) {
        info!(algorithm = %algo, "Loaded default algorithm from environment");
        config.default_algorithm = AlgorithmTag::new(algo);
    }

    if let Some(path) = var(ENV_HD_PATH) {
        config.default_hd_path = path;
    }

    if let Some(coin) = var(ENV_COIN_TYPE) {
        match coin.parse() {
            Ok(c) => config.coin_type = c,
            Err(_) => warn!("{} must be an unsigned integer, got {:?}", ENV_COIN_TYPE, coin),
        }
    }

    config
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let registry = Arc::new(AlgorithmRegistry::ethermint());

    let report = match args.command {
        Command::Algorithms => algorithms_report(&registry),
        Command::Derive(derive) => {
            let service = KeyringService::new(Arc::clone(&registry), load_config())
                .context("invalid keyring configuration")?;
            let mnemonic = read_mnemonic(io::stdin().lock())?;
            let passphrase = read_passphrase(|key| std::env::var(key))?;
            derive_report(&service, &derive, &mnemonic, &passphrase)?
        }
    };

    print_report(&report, args.json)
}

fn read_mnemonic(mut input: impl Read) -> Result<Zeroizing<String>> {
    let mut mnemonic = Zeroizing::new(String::new());
    input
        .read_to_string(&mut mnemonic)
        .context("failed to read mnemonic from stdin")?;
    if mnemonic.trim().is_empty() {
        bail!("no mnemonic on stdin");
    }
    Ok(mnemonic)
}

/// Passphrase from `KEYRING_PASSPHRASE`; unset means empty.
fn read_passphrase(var: impl Fn(&str) -> Result<String, VarError>) -> Result<Zeroizing<String>> {
    match var(ENV_PASSPHRASE) {
        Ok(passphrase) => Ok(Zeroizing::new(passphrase)),
        Err(VarError::NotPresent) => Ok(Zeroizing::new(String::new())),
        Err(e) => Err(e).context("KEYRING_PASSPHRASE is not valid UTF-8"),
    }
}

fn algorithms_report(registry: &AlgorithmRegistry) -> Vec<(&'static str, Value)> {
    let tags = |list: &[AlgorithmTag]| {
        Value::Array(list.iter().map(|t| Value::from(t.as_str())).collect())
    };
    vec![
        ("supported", tags(registry.supported_algorithms())),
        ("ledger", tags(registry.supported_algorithms_ledger())),
    ]
}

fn derive_report(
    service: &KeyringService,
    args: &DeriveArgs,
    mnemonic: &str,
    passphrase: &str,
) -> Result<Vec<(&'static str, Value)>> {
    let config = service.config();
    let tag = args
        .algo
        .clone()
        .map(AlgorithmTag::new)
        .unwrap_or_else(|| config.default_algorithm.clone());
    let hd_path = match (&args.hd_path, args.index) {
        (Some(path), _) => path.clone(),
        (None, Some(index)) => config.hd_path_for(0, index),
        (None, None) => config.default_hd_path.clone(),
    };

    let hierarchical = service
        .registry()
        .resolve(&tag)
        .with_context(|| format!("cannot derive with algorithm {}", tag))?
        .strategy()
        .is_hierarchical();
    debug!(algorithm = %tag, hierarchical, "resolved algorithm");

    let key = service
        .derive_typed(mnemonic, passphrase, &hd_path, &tag)
        .with_context(|| format!("key derivation failed for {}", tag))?;
    let public_key = key.public_key().context("derived key has no public key")?;

    let mut report = vec![
        ("algorithm", Value::from(tag.as_str())),
        ("hd_path", Value::from(hd_path)),
        ("hd_path_applied", Value::from(hierarchical)),
        ("key_type", key.type_name().map_or(Value::Null, Value::from)),
        ("public_key", Value::from(hex::encode(public_key.as_bytes()))),
    ];
    if args.unsafe_export_key {
        warn!("exporting unencrypted private key");
        report.push(("private_key", Value::from(hex::encode(key.as_bytes()))));
    }
    Ok(report)
}

fn print_report(report: &[(&'static str, Value)], json: bool) -> Result<()> {
    if json {
        let object: Map<String, Value> = report
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&Value::Object(object))?);
        return Ok(());
    }

    for (key, value) in report {
        let rendered = match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Null => "-".to_string(),
            other => other.to_string(),
        };
        println!("{:<16} {}", format!("{}:", key), rendered);
    }
    Ok(())
}
