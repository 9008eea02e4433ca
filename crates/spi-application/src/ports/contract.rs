//! Contract port

use spi_domain::{ContractId, Result};

/// A capability that providers can be discovered for
///
/// Implemented for the trait object type of the capability, so that
/// discovery yields `Box<dyn Trait>` instances:
///
/// ```
/// use spi_application::Contract;
///
/// pub trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// impl Contract for dyn Greeter {
///     const IDENTITY: &'static str = "demo.Greeter";
/// }
///
/// assert_eq!(<dyn Greeter as Contract>::contract_id().unwrap().as_str(), "demo.Greeter");
/// ```
pub trait Contract: 'static {
    /// Unique identity, used as the registry resource file name
    const IDENTITY: &'static str;

    /// Validated identity of this contract
    fn contract_id() -> Result<ContractId> {
        ContractId::new(Self::IDENTITY)
    }
}
