use std::sync::Arc;

use modelreg::{Error, Model, ModelRegistry, ProviderChain};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Provider {
    A,
    B,
    C,
    D,
}

fn two_gpt_4_variants() -> ModelRegistry<Provider> {
    let gpt_4 = Model::with_provider("gpt-4", "openai", Provider::A).unwrap();
    let gpt_4_32k = Model::new("gpt-4-32k", "openai", gpt_4.chain_handle()).unwrap();

    let mut builder = ModelRegistry::builder();
    builder
        .register("gpt-4", gpt_4)
        .register("gpt-4-32k", gpt_4_32k);

    builder.build().unwrap()
}

#[test]
fn aliases_resolve_to_the_same_chain() {
    let registry = two_gpt_4_variants();

    let gpt_4 = registry.resolve("gpt-4").unwrap();
    let gpt_4_32k = registry.resolve("gpt-4-32k").unwrap();

    assert_eq!(gpt_4.best_provider().providers(), &[Provider::A]);
    assert_eq!(gpt_4_32k.best_provider().providers(), &[Provider::A]);
    assert!(gpt_4.shares_chain_with(gpt_4_32k));
    assert!(registry.shares_chain("gpt-4", "gpt-4-32k").unwrap());
    assert_ne!(gpt_4, gpt_4_32k);
}

#[test]
fn chain_iterates_in_declared_order() {
    let chain = ProviderChain::new([Provider::B, Provider::C, Provider::D]).unwrap();

    let tried: Vec<Provider> = chain.iter().copied().collect();
    assert_eq!(tried, vec![Provider::B, Provider::C, Provider::D]);

    let mut tried = Vec::new();
    for provider in &chain {
        tried.push(*provider);
    }
    assert_eq!(tried, vec![Provider::B, Provider::C, Provider::D]);
}

#[test]
fn unknown_key_is_an_error() {
    let registry = two_gpt_4_variants();

    let err = registry.resolve("nonexistent-model-xyz").unwrap_err();

    assert_eq!(err, Error::UnknownModel("nonexistent-model-xyz".to_string()));
    assert!(!err.is_fatal());
    assert_eq!(err.to_string(), "model \"nonexistent-model-xyz\" is not supported");
    assert!(registry.get("nonexistent-model-xyz").is_none());
    assert!(!registry.contains("nonexistent-model-xyz"));
}

#[test]
fn list_names_matches_registration_order() {
    let keys = ["z", "a", "m", "b"];

    let mut builder = ModelRegistry::builder();
    for key in keys {
        builder.register(key, Model::with_provider(key, "", Provider::C).unwrap());
    }
    let registry = builder.build().unwrap();

    assert_eq!(registry.list_names(), keys);
    assert_eq!(registry.list_names(), registry.list_names());
    assert_eq!(registry.len(), keys.len());

    let iterated: Vec<&str> = registry.iter().map(|(key, _)| key).collect();
    assert_eq!(iterated, keys);
}

#[test]
fn list_names_is_a_snapshot() {
    let registry = two_gpt_4_variants();

    let mut names = registry.list_names();
    names.clear();
    names.push("injected".to_string());

    assert_eq!(registry.list_names(), vec!["gpt-4", "gpt-4-32k"]);
    assert!(registry.resolve("injected").is_err());
}

#[test]
fn duplicate_key_builds_nothing() {
    let mut builder = ModelRegistry::builder();
    builder
        .register("gpt-4", Model::with_provider("gpt-4", "openai", Provider::A).unwrap())
        .register("gpt-4", Model::with_provider("gpt-4", "openai", Provider::B).unwrap());

    let err = builder.build().unwrap_err();

    assert_eq!(err, Error::DuplicateKey("gpt-4".to_string()));
    assert!(err.is_fatal());
}

#[test]
fn same_upstream_name_under_different_keys() {
    let short = Model::new(
        "gpt-3.5-turbo",
        "openai",
        ProviderChain::new([Provider::A, Provider::B]).unwrap(),
    )
    .unwrap();
    let long = Model::new(
        "gpt-3.5-turbo",
        "openai",
        ProviderChain::new([Provider::C, Provider::A]).unwrap(),
    )
    .unwrap();

    let mut builder = ModelRegistry::builder();
    builder.register("gpt-3.5-turbo", short).register("gpt-3.5-long", long);
    let registry = builder.build().unwrap();

    let short = registry.resolve("gpt-3.5-turbo").unwrap();
    let long = registry.resolve("gpt-3.5-long").unwrap();

    assert_eq!(short.name(), long.name());
    assert_ne!(short.best_provider(), long.best_provider());
}

#[test]
fn invalid_entries_fail_at_construction() {
    assert_eq!(
        ProviderChain::<Provider>::new(Vec::new()).unwrap_err(),
        Error::InvalidChain
    );
    assert!(matches!(
        Model::with_provider("", "openai", Provider::A),
        Err(Error::InvalidModel { .. })
    ));
}

#[test]
fn served_by_filters_on_chain_membership() {
    let registry = two_gpt_4_variants();

    let served: Vec<&str> = registry
        .models_served_by(&Provider::A)
        .into_iter()
        .map(|(key, _)| key)
        .collect();

    assert_eq!(served, vec!["gpt-4", "gpt-4-32k"]);
    assert!(registry.models_served_by(&Provider::D).is_empty());
}

#[test]
fn registry_is_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelRegistry<Provider>>();

    let registry = Arc::new(two_gpt_4_variants());

    std::thread::scope(|s| {
        for _ in 0..4 {
            let registry = Arc::clone(&registry);

            s.spawn(move || {
                for key in registry.list_names() {
                    assert!(registry.resolve(&key).unwrap().best_provider().len() >= 1);
                }
            });
        }
    });
}
