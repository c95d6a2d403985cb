use std::sync::Arc;

use super::chain::ProviderChain;
use super::registry::Error;
use crate::providers::ProviderIdentifier;

/// A chain which may be referenced by several models at once.
pub type SharedChain<P = ProviderIdentifier> = Arc<ProviderChain<P>>;

/// An upstream chat model and the providers preferred for serving it.
///
/// Two models are equal when their names, base providers and chains are equal. Models
/// which were built from the same [`SharedChain`] additionally point at the same chain
/// object, see [`Model::shares_chain_with`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model<P = ProviderIdentifier> {
    name: String,
    base_provider: String,
    best_provider: SharedChain<P>,
}

impl<P> Model<P> {
    /// Creates a model which can be addressed on its own.
    ///
    /// `best_provider` is either a [`ProviderChain`] or a [`SharedChain`] obtained from
    /// another model through [`Model::chain_handle`]. Fails with [`Error::InvalidModel`]
    /// when `name` is empty.
    pub fn new<C>(name: &str, base_provider: &str, best_provider: C) -> Result<Model<P>, Error>
    where
        C: Into<SharedChain<P>>,
    {
        if name.is_empty() {
            return Err(Error::InvalidModel {
                base_provider: base_provider.to_string(),
            });
        }

        Ok(Model {
            name: name.to_string(),
            base_provider: base_provider.to_string(),
            best_provider: best_provider.into(),
        })
    }

    /// Creates a model served by exactly one provider.
    pub fn with_provider(name: &str, base_provider: &str, provider: P) -> Result<Model<P>, Error> {
        Model::new(name, base_provider, ProviderChain::single(provider))
    }

    /// The default model. Its name is empty, which tells the provider to pick whatever
    /// model it serves by default. Only accepted through [`RegistryBuilder::with_default`];
    /// registering it under a key fails the build with [`Error::InvalidModel`].
    ///
    /// [`RegistryBuilder::with_default`]: super::RegistryBuilder::with_default
    pub fn unnamed<C>(base_provider: &str, best_provider: C) -> Model<P>
    where
        C: Into<SharedChain<P>>,
    {
        Model {
            name: String::new(),
            base_provider: base_provider.to_string(),
            best_provider: best_provider.into(),
        }
    }

    /// The model identifier sent to the provider.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptive family tag (e.g. "openai"). Never used for dispatch.
    pub fn base_provider(&self) -> &str {
        &self.base_provider
    }

    pub fn best_provider(&self) -> &ProviderChain<P> {
        &self.best_provider
    }

    /// A new handle to this model's chain, for defining aliases that reuse it.
    pub fn chain_handle(&self) -> SharedChain<P> {
        Arc::clone(&self.best_provider)
    }

    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether both models reference the same chain object, not merely equal chains.
    pub fn shares_chain_with(&self, other: &Model<P>) -> bool {
        Arc::ptr_eq(&self.best_provider, &other.best_provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let model = Model::with_provider("", "openai", 1u8);

        assert!(matches!(model, Err(Error::InvalidModel { .. })));
    }

    #[test]
    fn unnamed_model_is_allowed() {
        let model: Model<u8> = Model::unnamed("", ProviderChain::new([1, 2, 3]).unwrap());

        assert!(model.is_unnamed());
        assert_eq!(model.best_provider().providers(), &[1, 2, 3]);
    }

    #[test]
    fn bare_provider_is_wrapped() {
        let model = Model::with_provider("gpt-4", "openai", 'a').unwrap();

        assert_eq!(model.best_provider().providers(), &['a']);
        assert_eq!(model.name(), "gpt-4");
        assert_eq!(model.base_provider(), "openai");
    }

    #[test]
    fn structural_equality() {
        let a: Model<u8> = Model::new("m", "f", ProviderChain::new([1, 2]).unwrap()).unwrap();
        let b: Model<u8> = Model::new("m", "f", ProviderChain::new([1, 2]).unwrap()).unwrap();
        let c: Model<u8> = Model::new("m", "g", ProviderChain::new([1, 2]).unwrap()).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.shares_chain_with(&b));
    }

    #[test]
    fn aliases_share_the_chain_object() {
        let base: Model<char> = Model::new("gpt-4", "openai", ProviderChain::single('a')).unwrap();
        let alias = Model::new("gpt-4-32k", "openai", base.chain_handle()).unwrap();

        assert!(alias.shares_chain_with(&base));
        assert_eq!(alias.best_provider(), base.best_provider());
    }
}
