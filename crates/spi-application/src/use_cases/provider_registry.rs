//! Provider Registry
//!
//! Discovers the providers of one contract:
//!
//! 1. build the registry key `<registry-root>/<contract identity>`
//! 2. ask the resolution context for every resource under that key
//! 3. read each resource line by line, skipping blank lines
//! 4. resolve each name in the [`TypeCatalog`], check it against the
//!    contract, run its zero-argument factory
//!
//! Discovery never fails as a whole. Faults are logged, recorded as
//! [`Diagnostic`]s and handled according to the [`FaultPolicy`].

use std::io::BufRead;
use std::sync::Arc;

use spi_domain::constants::DEFAULT_REGISTRY_ROOT;
use spi_domain::{Error, ErrorKind, ProviderName, RegistryKey, Result};
use tracing::{debug, info, warn};

use crate::ports::registry::TypeCatalog;
use crate::ports::{Contract, RegistrySource, ResolutionContext};
use crate::use_cases::diagnostics::{Diagnostic, DiscoveryResult, FaultPolicy};

/// Lifecycle of a [`ProviderRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Created, `discover` not yet called
    Created,
    /// A discovery run is in progress
    Discovering,
    /// At least one discovery run has completed
    Discovered,
}

/// Whether the discovery loop keeps going after handling a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Abort,
}

/// Discovers and instantiates the providers registered for contract `C`
///
/// `discover` takes `&mut self`, so one registry runs at most one discovery
/// at a time. Registries for different contracts share nothing but the
/// (read-only) resolution context.
///
/// ```ignore
/// let mut registry = ProviderRegistry::<dyn Logger>::create(context);
/// registry.discover();
/// for logger in registry.providers() {
///     logger.info("hello");
/// }
/// ```
pub struct ProviderRegistry<C: Contract + ?Sized> {
    context: Arc<dyn ResolutionContext>,
    catalog: TypeCatalog,
    registry_root: String,
    policy: FaultPolicy,
    state: RegistryState,
    result: DiscoveryResult<C>,
}

impl<C: Contract + ?Sized> ProviderRegistry<C> {
    /// Bind contract `C` to a resolution context
    ///
    /// Performs no I/O. Uses the linked type catalog, the default registry
    /// root and [`FaultPolicy::SkipEntry`].
    pub fn create(context: Arc<dyn ResolutionContext>) -> Self {
        Self {
            context,
            catalog: TypeCatalog::linked(),
            registry_root: DEFAULT_REGISTRY_ROOT.to_string(),
            policy: FaultPolicy::default(),
            state: RegistryState::Created,
            result: DiscoveryResult::empty(),
        }
    }

    /// Look for registry resources under another root directory
    pub fn with_registry_root(mut self, root: impl Into<String>) -> Self {
        self.registry_root = root.into();
        self
    }

    /// Change how faults are handled
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve provider names against another catalog
    pub fn with_catalog(mut self, catalog: TypeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Current lifecycle state
    pub fn state(&self) -> RegistryState {
        self.state
    }

    /// Configured fault policy
    pub fn fault_policy(&self) -> FaultPolicy {
        self.policy
    }

    /// Registry key for this contract
    pub fn registry_key(&self) -> Result<RegistryKey> {
        RegistryKey::new(&self.registry_root, C::contract_id()?)
    }

    /// Run discovery, replacing the result of any previous run
    ///
    /// Every call re-reads every resource and constructs fresh instances.
    pub fn discover(&mut self) -> &DiscoveryResult<C> {
        self.state = RegistryState::Discovering;
        let mut result = DiscoveryResult::empty();

        debug!(
            contract = C::IDENTITY,
            context = %self.context.describe(),
            policy = %self.policy,
            "Discovering providers"
        );
        match self.registry_key() {
            Ok(key) => self.discover_key(&key, &mut result),
            Err(error) => self.fault(&mut result, Diagnostic::new(error)),
        };

        info!(
            contract = C::IDENTITY,
            providers = result.len(),
            faults = result.faults().count(),
            "Provider discovery finished"
        );
        self.result = result;
        self.state = RegistryState::Discovered;
        &self.result
    }

    /// Providers from the latest `discover` run; empty before the first run
    pub fn providers(&self) -> &[Box<C>] {
        self.result.providers()
    }

    /// Diagnostics from the latest `discover` run
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.result.diagnostics()
    }

    /// Full result of the latest `discover` run
    pub fn result(&self) -> &DiscoveryResult<C> {
        &self.result
    }

    /// Number of providers from the latest run
    pub fn len(&self) -> usize {
        self.result.len()
    }

    /// Whether the latest run produced no provider
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Iterate over the providers from the latest run
    pub fn iter(&self) -> std::slice::Iter<'_, Box<C>> {
        self.result.iter()
    }

    /// Consume the registry, keeping the providers from the latest run
    pub fn into_providers(self) -> Vec<Box<C>> {
        self.result.into_providers()
    }

    fn discover_key(&self, key: &RegistryKey, result: &mut DiscoveryResult<C>) -> Flow {
        for located in self.context.locate(key) {
            let flow = match located {
                Ok(source) => self.load_source(source.as_ref(), result),
                Err(error) => self.fault(result, Diagnostic::new(error)),
            };
            if flow == Flow::Abort {
                return Flow::Abort;
            }
        }
        Flow::Continue
    }

    fn load_source(&self, source: &dyn RegistrySource, result: &mut DiscoveryResult<C>) -> Flow {
        let location = source.location();
        let reader = match source.open() {
            Ok(reader) => reader,
            Err(error) => return self.fault(result, Diagnostic::at_source(location, error)),
        };
        debug!(contract = C::IDENTITY, source = location, "Reading registry resource");

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    let error = Error::resource_resolution_with_source(
                        location,
                        format!("failed to read line {number}"),
                        error,
                    );
                    return self.fault(result, Diagnostic::at_line(location, number, error));
                }
            };
            let Some(name) = ProviderName::parse_line(&line) else {
                continue;
            };

            match self.load_entry(&name) {
                Ok(provider) => {
                    debug!(
                        contract = C::IDENTITY,
                        source = location,
                        line = number,
                        provider = %name,
                        "Provider instantiated"
                    );
                    result.providers.push(provider);
                }
                Err(error) if error.kind() == ErrorKind::IncompatibleProvider => {
                    debug!(
                        contract = C::IDENTITY,
                        source = location,
                        line = number,
                        provider = %name,
                        "Skipping provider that does not implement the contract"
                    );
                    result
                        .diagnostics
                        .push(Diagnostic::at_line(location, number, error));
                }
                Err(error) => {
                    if self.fault(result, Diagnostic::at_line(location, number, error))
                        == Flow::Abort
                    {
                        return Flow::Abort;
                    }
                    if self.policy == FaultPolicy::SkipResource {
                        return Flow::Continue;
                    }
                }
            }
        }
        Flow::Continue
    }

    fn load_entry(&self, name: &ProviderName) -> Result<Box<C>> {
        let provider_type = self
            .catalog
            .resolve(name.as_str())
            .ok_or_else(|| Error::type_resolution(name.as_str()))?;
        provider_type.instantiate::<C>()
    }

    /// Log and record a fault; tells the caller whether to stop everything
    fn fault(&self, result: &mut DiscoveryResult<C>, diagnostic: Diagnostic) -> Flow {
        warn!(
            contract = C::IDENTITY,
            policy = %self.policy,
            "Provider discovery fault: {}",
            diagnostic
        );
        result.diagnostics.push(diagnostic);
        match self.policy {
            FaultPolicy::Abort => Flow::Abort,
            FaultPolicy::SkipEntry | FaultPolicy::SkipResource => Flow::Continue,
        }
    }
}

impl<C: Contract + ?Sized> std::fmt::Debug for ProviderRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("contract", &C::IDENTITY)
            .field("context", &self.context.describe())
            .field("registry_root", &self.registry_root)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .field("providers", &self.result.len())
            .finish()
    }
}
