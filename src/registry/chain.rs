//! Ordered provider fallback lists.

use std::fmt;
use std::slice;

use super::registry::Error;
use crate::providers::ProviderIdentifier;

/// An ordered, non-empty list of providers able to serve a model.
///
/// The first provider is the preferred one. The remaining providers are fallbacks which
/// the caller tries, in order, only after an earlier provider has failed. The chain does
/// not execute anything itself; it is the ordering data handed to whoever dispatches
/// requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderChain<P = ProviderIdentifier> {
    providers: Vec<P>,
}

impl<P> ProviderChain<P> {
    /// Builds a chain from providers listed most-preferred first.
    ///
    /// The order is kept exactly as given and duplicates are not removed. Fails with
    /// [`Error::InvalidChain`] when `providers` is empty.
    pub fn new<I>(providers: I) -> Result<ProviderChain<P>, Error>
    where
        I: IntoIterator<Item = P>,
    {
        let providers: Vec<P> = providers.into_iter().collect();

        if providers.is_empty() {
            return Err(Error::InvalidChain);
        }

        Ok(ProviderChain { providers })
    }

    /// A chain consisting of a single provider.
    pub fn single(provider: P) -> ProviderChain<P> {
        ProviderChain {
            providers: vec![provider],
        }
    }

    pub fn providers(&self) -> &[P] {
        &self.providers
    }

    /// The provider which should be tried first.
    pub fn preferred(&self) -> &P {
        // Non-empty by construction
        &self.providers[0]
    }

    /// The providers tried after the preferred one, in order.
    pub fn fallbacks(&self) -> &[P] {
        &self.providers[1..]
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain collapses to a single provider (no fallbacks).
    pub fn is_single(&self) -> bool {
        self.providers.len() == 1
    }

    pub fn contains(&self, provider: &P) -> bool
    where
        P: PartialEq,
    {
        self.providers.contains(provider)
    }

    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.providers.iter()
    }
}

impl<P> From<P> for ProviderChain<P> {
    fn from(provider: P) -> Self {
        ProviderChain::single(provider)
    }
}

impl<'a, P> IntoIterator for &'a ProviderChain<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}

impl<P: fmt::Display> fmt::Display for ProviderChain<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, provider) in self.providers.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }

            write!(f, "{}", provider)?;
        }

        Ok(())
    }
}
