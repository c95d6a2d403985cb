use super::catalog;
use super::chain::ProviderChain;
use super::model::Model;
use super::registry::{Error, ModelRegistry};
use crate::config::{ChainSource, Config, ModelEntry};

/// Builds the model for a config entry. Aliases are looked up among the entries
/// registered so far, so an entry may alias the catalog or any earlier entry.
fn entry_model(
    entry: &ModelEntry,
    source: ChainSource<'_>,
    lookup: impl Fn(&str) -> Option<Model>,
) -> Result<Model, Error> {
    match source {
        ChainSource::Providers(providers) => {
            let chain = ProviderChain::new(providers.iter().copied())?;

            let name = entry.name.as_deref().unwrap_or(&entry.key);
            let base_provider = entry.base_provider.as_deref().unwrap_or("");

            Model::new(name, base_provider, chain)
        }
        ChainSource::AliasOf(alias_of) => {
            let aliased =
                lookup(alias_of).ok_or_else(|| Error::UnknownModel(alias_of.to_string()))?;

            let name = entry.name.as_deref().unwrap_or(aliased.name());
            let base_provider = entry
                .base_provider
                .as_deref()
                .unwrap_or(aliased.base_provider());

            Model::new(name, base_provider, aliased.chain_handle())
        }
    }
}

/// Populate a registry with the built-in catalog followed by the models declared in
/// `config`.
pub fn populated_registry(config: &Config) -> Result<ModelRegistry, Error> {
    let mut builder = catalog::builder()?;

    for entry in &config.models {
        let source = entry.chain_source().ok_or(Error::InvalidChain)?;

        let model = entry_model(entry, source, |key| builder.get(key).cloned())?;

        tracing::debug!(key = %entry.key, name = model.name(), "registering configured model");

        builder.register(&entry.key, model);
    }

    builder.build()
}
