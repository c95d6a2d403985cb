use std::collections::HashMap;
use std::slice;

use thiserror::Error;
use tracing::{debug, trace};

use super::model::Model;
use crate::providers::ProviderIdentifier;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A provider chain was built without any providers
    #[error("a provider chain needs at least one provider")]
    InvalidChain,
    /// A model other than the default model has an empty name
    #[error("a model of base provider \"{base_provider}\" has an empty name")]
    InvalidModel { base_provider: String },
    /// Two registry entries claim the same key
    #[error("model \"{0}\" is registered more than once")]
    DuplicateKey(String),
    /// No model is registered under the key
    #[error("model \"{0}\" is not supported")]
    UnknownModel(String),
    /// The default model was requested but the registry has none
    #[error("there is no default model")]
    NoDefaultModel,
}

impl Error {
    /// Returns true for errors raised while assembling the registry. These indicate a
    /// broken catalog or config and should abort startup. Lookup errors are not fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidChain | Error::InvalidModel { .. } | Error::DuplicateKey(_)
        )
    }
}

/// Collects registry entries before the registry is assembled.
///
/// Entries are only validated by [`RegistryBuilder::build`], which either produces the
/// complete registry or nothing.
pub struct RegistryBuilder<P = ProviderIdentifier> {
    entries: Vec<(String, Model<P>)>,
    default_model: Option<Model<P>>,
}

impl<P> RegistryBuilder<P> {
    pub fn new() -> RegistryBuilder<P> {
        RegistryBuilder {
            entries: Vec::new(),
            default_model: None,
        }
    }

    /// Adds `model` under `key`. Declaration order is kept.
    pub fn register(&mut self, key: &str, model: Model<P>) -> &mut Self {
        self.entries.push((key.to_string(), model));

        self
    }

    /// Sets the model returned when no key is given.
    pub fn with_default(&mut self, model: Model<P>) -> &mut Self {
        self.default_model.replace(model);

        self
    }

    /// The model registered first under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Model<P>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, model)| model)
    }

    pub fn build(self) -> Result<ModelRegistry<P>, Error> {
        let mut index = HashMap::with_capacity(self.entries.len());

        for (i, (key, model)) in self.entries.iter().enumerate() {
            // Only the default model may be unnamed
            if model.is_unnamed() {
                return Err(Error::InvalidModel {
                    base_provider: model.base_provider().to_string(),
                });
            }

            if index.insert(key.clone(), i).is_some() {
                return Err(Error::DuplicateKey(key.clone()));
            }
        }

        let (names, models): (Vec<String>, Vec<Model<P>>) = self.entries.into_iter().unzip();

        debug!(
            models = names.len(),
            has_default = self.default_model.is_some(),
            "built model registry"
        );

        Ok(ModelRegistry {
            names,
            models,
            index,
            default_model: self.default_model,
        })
    }
}

impl<P> Default for RegistryBuilder<P> {
    fn default() -> Self {
        RegistryBuilder::new()
    }
}

/// An immutable mapping from model keys to [`Model`]s.
///
/// Keys are the identifiers users ask for and may differ from [`Model::name`]; several
/// keys can denote models with the same upstream name but different chains. The registry
/// cannot be modified once built, so it can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct ModelRegistry<P = ProviderIdentifier> {
    names: Vec<String>,
    models: Vec<Model<P>>,
    index: HashMap<String, usize>,
    default_model: Option<Model<P>>,
}

impl<P> ModelRegistry<P> {
    pub fn builder() -> RegistryBuilder<P> {
        RegistryBuilder::new()
    }

    /// Looks up the model registered under exactly `key`.
    pub fn resolve(&self, key: &str) -> Result<&Model<P>, Error> {
        trace!(key, "resolving model");

        self.get(key).ok_or_else(|| Error::UnknownModel(key.to_string()))
    }

    /// Resolves `key`, or returns the default model when no key is given.
    pub fn resolve_or_default(&self, key: Option<&str>) -> Result<&Model<P>, Error> {
        match key {
            Some(key) => self.resolve(key),
            None => self.default_model.as_ref().ok_or(Error::NoDefaultModel),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Model<P>> {
        self.index.get(key).map(|&i| &self.models[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn default_model(&self) -> Option<&Model<P>> {
        self.default_model.as_ref()
    }

    /// All registered keys in declaration order.
    pub fn list_names(&self) -> Vec<String> {
        self.names.clone()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterates over `(key, model)` pairs in declaration order.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            names: self.names.iter(),
            models: self.models.iter(),
        }
    }

    /// Entries whose chain includes `provider`, in declaration order.
    pub fn models_served_by<'r>(&'r self, provider: &P) -> Vec<(&'r str, &'r Model<P>)>
    where
        P: PartialEq,
    {
        self.iter()
            .filter(|(_, model)| model.best_provider().contains(provider))
            .collect()
    }

    /// Whether the models under `a` and `b` reference the same chain object.
    pub fn shares_chain(&self, a: &str, b: &str) -> Result<bool, Error> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;

        Ok(a.shares_chain_with(b))
    }
}

pub struct Iter<'r, P> {
    names: slice::Iter<'r, String>,
    models: slice::Iter<'r, Model<P>>,
}

impl<'r, P> Iterator for Iter<'r, P> {
    type Item = (&'r str, &'r Model<P>);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        let model = self.models.next()?;

        Some((name.as_str(), model))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.models.size_hint()
    }
}

impl<'r, P> IntoIterator for &'r ModelRegistry<P> {
    type Item = (&'r str, &'r Model<P>);
    type IntoIter = Iter<'r, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
