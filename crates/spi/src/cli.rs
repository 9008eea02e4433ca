//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `spi types` | Provider types linked into the binary |
//! | `spi resources <contract>` | Registry resources for a contract identity |
//! | `spi demo` | Discover `Logger` providers and log through the first one |

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use spi_application::{FaultPolicy, ResolutionContext, TypeCatalog};
use spi_domain::{ContractId, Error, ProviderName, RegistryKey};
use spi_infrastructure::config::AppConfig;
use spi_infrastructure::logging::init_logging;
use spi_infrastructure::ConfigLoader;
use spi_providers::Logger;
use tracing::warn;

/// Message logged by `spi demo`
pub const DEMO_MESSAGE: &str = "Testing a hand-written service loader: the SPI mechanism at work";

/// Command line interface for SPI
#[derive(Parser, Debug)]
#[command(name = "spi")]
#[command(about = "SPI - Service provider discovery")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to search before the configured load path (repeatable)
    #[arg(long = "load-path", global = true)]
    pub load_path: Vec<PathBuf>,

    /// Fault policy: skip-entry, skip-resource or abort
    #[arg(long, global = true)]
    pub fault_policy: Option<FaultPolicy>,

    /// Print listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List provider types linked into the binary
    Types,
    /// List registry resources and their entries for a contract identity
    Resources {
        /// Contract identity, e.g. spi.facade.Logger
        contract: String,
    },
    /// Discover Logger providers and log a message through the first one
    Demo,
}

/// One linked provider type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeListing {
    pub name: &'static str,
    pub description: &'static str,
    pub contracts: Vec<&'static str>,
    pub constructible: bool,
}

/// One registry resource (or a location that failed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceListing {
    pub location: String,
    pub entries: Vec<EntryListing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One entry of a registry resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryListing {
    pub line: usize,
    pub name: String,
    pub known: bool,
}

impl Cli {
    /// Load configuration and apply command line overrides
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load().context("Failed to load configuration")?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Command line load-path entries go first; the policy replaces the configured one
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if !self.load_path.is_empty() {
            let configured = std::mem::take(&mut config.discovery.load_path);
            config.discovery.load_path = self.load_path.iter().cloned().chain(configured).collect();
        }
        if let Some(policy) = self.fault_policy {
            config.discovery.fault_policy = policy;
        }
    }
}

/// Describe every type in `catalog`
pub fn type_listings(catalog: &TypeCatalog) -> Vec<TypeListing> {
    catalog
        .iter()
        .map(|provider_type| TypeListing {
            name: provider_type.name,
            description: provider_type.description,
            contracts: provider_type.contracts().collect(),
            constructible: provider_type.factory.is_some(),
        })
        .collect()
}

/// Read every registry resource under `key`, marking entries the catalog knows
pub fn resource_listings(
    context: &dyn ResolutionContext,
    key: &RegistryKey,
    catalog: &TypeCatalog,
) -> Vec<ResourceListing> {
    context
        .locate(key)
        .into_iter()
        .map(|located| match located {
            Ok(source) => {
                let location = source.location().to_string();
                match read_entries(source.open(), catalog) {
                    Ok(entries) => ResourceListing {
                        location,
                        entries,
                        error: None,
                    },
                    Err(error) => ResourceListing {
                        location,
                        entries: Vec::new(),
                        error: Some(error),
                    },
                }
            }
            Err(error) => ResourceListing {
                location: match &error {
                    Error::ResourceResolution { location, .. } => location.clone(),
                    _ => context.describe(),
                },
                entries: Vec::new(),
                error: Some(error.to_string()),
            },
        })
        .collect()
}

fn read_entries(
    reader: spi_domain::Result<Box<dyn BufRead + '_>>,
    catalog: &TypeCatalog,
) -> Result<Vec<EntryListing>, String> {
    let reader = reader.map_err(|error| error.to_string())?;
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| format!("line {}: {error}", index + 1))?;
        if let Some(name) = ProviderName::parse_line(&line) {
            entries.push(EntryListing {
                line: index + 1,
                known: catalog.resolve(name.as_str()).is_some(),
                name: name.to_string(),
            });
        }
    }
    Ok(entries)
}

/// Run a parsed command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    init_logging(&config.logging)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Types => print_types(&mut out, cli.json),
        Command::Resources { contract } => print_resources(&mut out, &config, contract, cli.json),
        Command::Demo => {
            run_demo(&config);
            Ok(())
        }
    }
}

fn print_types(out: &mut dyn Write, json: bool) -> anyhow::Result<()> {
    let listings = type_listings(&TypeCatalog::linked());
    if json {
        serde_json::to_writer_pretty(&mut *out, &listings)?;
        writeln!(out)?;
        return Ok(());
    }
    for listing in &listings {
        let marker = if listing.constructible { "" } else { " (no factory)" };
        writeln!(out, "{}{}", listing.name, marker)?;
        writeln!(out, "    {}", listing.description)?;
        writeln!(out, "    implements: {}", listing.contracts.join(", "))?;
    }
    Ok(())
}

fn print_resources(
    out: &mut dyn Write,
    config: &AppConfig,
    contract: &str,
    json: bool,
) -> anyhow::Result<()> {
    let contract = ContractId::new(contract)?;
    let key = RegistryKey::new(&config.discovery.registry_root, contract)?;
    let context = config.discovery.build_context();
    let listings = resource_listings(context.as_ref(), &key, &TypeCatalog::linked());

    if json {
        serde_json::to_writer_pretty(&mut *out, &listings)?;
        writeln!(out)?;
        return Ok(());
    }
    if listings.is_empty() {
        writeln!(out, "No registry resources for {key} in {}", context.describe())?;
    }
    for listing in &listings {
        if let Some(error) = &listing.error {
            writeln!(out, "{} error: {error}", listing.location)?;
            continue;
        }
        writeln!(out, "{}", listing.location)?;
        for entry in &listing.entries {
            let marker = if entry.known { "" } else { " (unknown type)" };
            writeln!(out, "  {:>4}  {}{}", entry.line, entry.name, marker)?;
        }
    }
    Ok(())
}

/// Log [`DEMO_MESSAGE`] through the first discovered `Logger`
///
/// Returns the name of the logger used, `None` when discovery found none.
pub fn run_demo(config: &AppConfig) -> Option<&'static str> {
    let mut registry = config.discovery.registry::<dyn Logger>();
    let result = registry.discover();
    for fault in result.faults() {
        warn!("{fault}");
    }
    let Some(logger) = result.providers().first() else {
        warn!("No Logger providers were discovered");
        return None;
    };
    logger.info(DEMO_MESSAGE);
    Some(logger.name())
}
