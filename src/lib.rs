//! A static registry of chat models and the providers able to serve them.
//!
//! Given a model key such as "gpt-4-32k", the [`ModelRegistry`] returns the [`Model`]:
//! the upstream model name and an ordered [`ProviderChain`] of providers to try. The
//! registry is built once at startup, either from the built-in
//! [`catalog`](registry::catalog) alone or together with models declared in the user's
//! [`config`].
//!
//! ```
//! let registry = modelreg::builtin().unwrap();
//!
//! let model = registry.resolve("gpt-4-32k").unwrap();
//! assert_eq!(model.name(), "gpt-4-32k");
//! assert_eq!(model.best_provider().len(), 1);
//! ```

pub mod config;
pub mod providers;
pub mod registry;
pub mod utils;

pub use providers::ProviderIdentifier;
pub use registry::catalog::builtin;
pub use registry::populate::populated_registry;
pub use registry::{Error, Model, ModelRegistry, ProviderChain, RegistryBuilder, SharedChain};
