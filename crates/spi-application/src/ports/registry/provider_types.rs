//! Provider Type Registry
//!
//! Replaces reflective "load class by name" with a catalog of provider types
//! registered at link time. Resolving a name is a pure lookup: no factory
//! runs until the type has been checked against the requested contract.

use std::any::{Any, TypeId};

use spi_domain::{Error, Result};

use crate::ports::contract::Contract;

/// Type-erased provider instance as produced by a factory
pub type ProviderObject = Box<dyn Any>;

/// Zero-argument constructor of a provider type
pub type ProviderFactory = fn() -> std::result::Result<ProviderObject, String>;

/// Declares that a provider type implements one contract
///
/// Built with the [`implementation!`](crate::implementation) macro.
pub struct Implementation {
    /// Identity of the implemented contract
    pub contract: &'static str,
    /// `TypeId` of the contract's trait object type
    pub contract_type: fn() -> TypeId,
    /// Turns the factory output into a boxed `Box<dyn Contract>`
    ///
    /// Returns `None` when the object is not of the declaring provider type.
    pub upcast: fn(ProviderObject) -> Option<ProviderObject>,
}

/// Registry entry for a provider type
///
/// Each provider type registers itself with this entry using
/// `#[linkme::distributed_slice(PROVIDER_TYPES)]`.
pub struct ProviderType {
    /// Fully-qualified provider type name, as written in registry resources
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Zero-argument constructor; `None` for types that cannot be built
    /// without arguments
    pub factory: Option<ProviderFactory>,
    /// Contracts this type can be used as
    pub implements: &'static [Implementation],
}

// Auto-collection via linkme distributed slices - provider types submit entries at link time
#[linkme::distributed_slice]
pub static PROVIDER_TYPES: [ProviderType] = [..];

/// Build a [`ProviderFactory`] from a `Default` implementation
pub fn default_factory<T: Default + 'static>() -> std::result::Result<ProviderObject, String> {
    Ok(Box::new(T::default()))
}

/// Build an [`Implementation`] for `provider => dyn Contract`
///
/// ```
/// use spi_application::{Contract, ProviderType, default_factory, implementation};
///
/// pub trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// impl Contract for dyn Greeter {
///     const IDENTITY: &'static str = "demo.Greeter";
/// }
///
/// #[derive(Default)]
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// static ENGLISH: ProviderType = ProviderType {
///     name: "demo.English",
///     description: "English greeter",
///     factory: Some(default_factory::<English>),
///     implements: &[implementation!(English => dyn Greeter)],
/// };
///
/// let greeter = ENGLISH.instantiate::<dyn Greeter>().unwrap();
/// assert_eq!(greeter.greet(), "hello");
/// ```
#[macro_export]
macro_rules! implementation {
    ($provider:ty => $contract:ty) => {
        $crate::ports::registry::Implementation {
            contract: <$contract as $crate::ports::Contract>::IDENTITY,
            contract_type: ::std::any::TypeId::of::<$contract>,
            upcast: |object| {
                object.downcast::<$provider>().ok().map(|concrete| {
                    let contract: ::std::boxed::Box<$contract> = concrete;
                    ::std::boxed::Box::new(contract) as ::std::boxed::Box<dyn ::std::any::Any>
                })
            },
        }
    };
}

impl ProviderType {
    /// The declared implementation of contract `C`, if any
    pub fn implementation_of<C: Contract + ?Sized>(&self) -> Option<&'static Implementation> {
        let wanted = TypeId::of::<C>();
        self.implements
            .iter()
            .find(|implementation| (implementation.contract_type)() == wanted)
    }

    /// Whether this type can be used as contract `C`
    pub fn is_compatible_with<C: Contract + ?Sized>(&self) -> bool {
        self.implementation_of::<C>().is_some()
    }

    /// Identities of every contract this type implements
    pub fn contracts(&self) -> impl Iterator<Item = &'static str> {
        self.implements
            .iter()
            .map(|implementation| implementation.contract)
    }

    /// Check compatibility with `C`, then run the zero-argument factory
    ///
    /// A panicking factory is reported as an instantiation error.
    pub fn instantiate<C: Contract + ?Sized>(&self) -> Result<Box<C>> {
        let implementation = self
            .implementation_of::<C>()
            .ok_or_else(|| Error::incompatible_provider(self.name, C::IDENTITY))?;
        let factory = self
            .factory
            .ok_or_else(|| Error::instantiation(self.name, "no zero-argument factory"))?;

        let object = std::panic::catch_unwind(factory)
            .map_err(|_| Error::instantiation(self.name, "factory panicked"))?
            .map_err(|message| Error::instantiation(self.name, message))?;
        let upcast = (implementation.upcast)(object).ok_or_else(|| {
            Error::instantiation(self.name, "factory produced an object of another type")
        })?;
        upcast
            .downcast::<Box<C>>()
            .map(|boxed| *boxed)
            .map_err(|_| Error::instantiation(self.name, "contract upcast produced a foreign type"))
    }
}

/// Name-indexed view over a set of provider types
///
/// [`TypeCatalog::linked`] covers every type registered in
/// [`PROVIDER_TYPES`]; [`TypeCatalog::from_types`] builds an explicit
/// catalog, e.g. for tests. When two entries share a name the first one wins.
#[derive(Clone, Default)]
pub struct TypeCatalog {
    types: Vec<&'static ProviderType>,
}

impl TypeCatalog {
    /// Catalog of every provider type linked into the binary
    pub fn linked() -> Self {
        Self::from_types(PROVIDER_TYPES.iter())
    }

    /// Catalog of the given provider types
    pub fn from_types(types: impl IntoIterator<Item = &'static ProviderType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// Look up a provider type by name without constructing anything
    pub fn resolve(&self, name: &str) -> Option<&'static ProviderType> {
        self.types
            .iter()
            .copied()
            .find(|provider_type| provider_type.name == name)
    }

    /// All provider types in the catalog
    pub fn iter(&self) -> impl Iterator<Item = &'static ProviderType> + '_ {
        self.types.iter().copied()
    }

    /// Provider types that declare an implementation of `C`
    pub fn implementors_of<C: Contract + ?Sized>(&self) -> Vec<&'static ProviderType> {
        self.iter()
            .filter(|provider_type| provider_type.is_compatible_with::<C>())
            .collect()
    }

    /// Number of provider types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl std::fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.types.iter().map(|provider_type| provider_type.name))
            .finish()
    }
}

/// List all linked provider types
///
/// Returns `(name, description)` tuples. Useful for CLI help.
pub fn list_provider_types() -> Vec<(&'static str, &'static str)> {
    PROVIDER_TYPES
        .iter()
        .map(|provider_type| (provider_type.name, provider_type.description))
        .collect()
}
