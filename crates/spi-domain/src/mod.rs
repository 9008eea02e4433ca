//! # Domain Layer
//!
//! Core types shared by every layer of the provider discovery workspace.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy for discovery and its ambient concerns |
//! | [`constants`] | Registry conventions |
//! | [`value_objects`] | Contract identities, registry keys, provider names |
//!
//! This crate has no knowledge of how providers are constructed or where
//! registry resources live; those are ports defined in `spi-application`.

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, ErrorKind, Result};
pub use value_objects::{ContractId, ProviderName, RegistryKey};
