//! The registry maps model keys to [`Model`]s. A key is what the user asks for (e.g.
//! "gpt-4-32k"); the model carries the upstream name sent to the provider and a
//! [`ProviderChain`] describing which providers can serve it.
//!
//! The chain is ordered by preference. The first provider is tried first; the others are
//! fallbacks for when an earlier one fails. Executing the chain is left to the caller.
//!
//! Keys are unique but upstream names are not: "gpt-3.5-turbo" and "gpt-3.5-long" both
//! request `gpt-3.5-turbo`, through different chains. Aliases which reuse the chain of
//! another model reference the same chain object, see [`Model::chain_handle`].
//!
//! A registry is assembled once through a [`RegistryBuilder`] and never changes
//! afterwards. Building fails as a whole if any entry is invalid.

pub mod catalog;
pub(crate) mod populate;
#[allow(clippy::module_inception)]
mod registry;

mod chain;
mod model;

pub use chain::ProviderChain;
pub use model::{Model, SharedChain};
pub use registry::{Error, Iter, ModelRegistry, RegistryBuilder};
