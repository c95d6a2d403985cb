//! The models known out of the box.
//!
//! Several entries deliberately reuse the chain of an earlier entry (for instance every
//! gpt-4 variant is served through the gpt-4 chain). These share a single chain object
//! instead of carrying copies.

use super::chain::ProviderChain;
use super::model::Model;
use super::registry::{Error, ModelRegistry, RegistryBuilder};
use crate::providers::ProviderIdentifier::{self, *};

fn chain(providers: &[ProviderIdentifier]) -> Result<ProviderChain, Error> {
    ProviderChain::new(providers.iter().copied())
}

/// The default model, used when the caller does not ask for a specific one.
pub fn default_model() -> Result<Model, Error> {
    Ok(Model::unnamed("", chain(&[ChatgptAi, GptGo, You])?))
}

/// A builder holding the built-in entries in declaration order. Additional entries can
/// be registered before building.
pub fn builder() -> Result<RegistryBuilder, Error> {
    // GPT-3.5 too, but every provider in the chain supports long requests and responses
    let gpt_35_long = Model::new("gpt-3.5-turbo", "openai", chain(&[You, ChatgptNext])?)?;

    let gpt_35_turbo = Model::new(
        "gpt-3.5-turbo",
        "openai",
        chain(&[ChatgptNext, Liaobots, GptGo, You])?,
    )?;

    let gpt_4 = Model::with_provider("gpt-4", "openai", Liaobots)?;

    let gpt_35_turbo_0613 =
        Model::new("gpt-3.5-turbo-0613", "openai", gpt_35_turbo.chain_handle())?;
    let gpt_35_turbo_16k = Model::new("gpt-3.5-turbo-16k", "openai", gpt_35_long.chain_handle())?;
    let gpt_35_turbo_16k_0613 =
        Model::new("gpt-3.5-turbo-16k-0613", "openai", gpt_35_long.chain_handle())?;

    let gpt_4_0613 = Model::new("gpt-4-0613", "openai", gpt_4.chain_handle())?;
    let gpt_4_32k = Model::new("gpt-4-32k", "openai", gpt_4.chain_handle())?;
    let gpt_4_32k_0613 = Model::new("gpt-4-32k-0613", "openai", gpt_4.chain_handle())?;

    let mut builder = ModelRegistry::builder();

    builder.with_default(default_model()?);

    // GPT-3.5 / GPT-4
    builder
        .register("gpt-3.5-turbo", gpt_35_turbo)
        .register("gpt-3.5-turbo-0613", gpt_35_turbo_0613)
        .register("gpt-3.5-turbo-16k", gpt_35_turbo_16k)
        .register("gpt-3.5-turbo-16k-0613", gpt_35_turbo_16k_0613)
        .register("gpt-3.5-long", gpt_35_long)
        .register("gpt-4", gpt_4)
        .register("gpt-4-0613", gpt_4_0613)
        .register("gpt-4-32k", gpt_4_32k)
        .register("gpt-4-32k-0613", gpt_4_32k_0613);

    // Llama
    builder
        .register(
            "llama2-7b",
            Model::new(
                "meta-llama/Llama-2-7b-chat-hf",
                "huggingface",
                chain(&[Llama, PerplexityLabs])?,
            )?,
        )
        .register(
            "llama2-13b",
            Model::new(
                "meta-llama/Llama-2-13b-chat-hf",
                "huggingface",
                chain(&[Llama, DeepInfra])?,
            )?,
        )
        .register(
            "llama2-70b",
            Model::new(
                "meta-llama/Llama-2-70b-chat-hf",
                "huggingface",
                chain(&[PerplexityLabs, DeepInfra, Llama])?,
            )?,
        )
        .register(
            "llama3-70b-instruct",
            Model::new(
                "meta-llama/Meta-Llama-3-70b-instruct",
                "meta",
                chain(&[PerplexityLabs, Llama])?,
            )?,
        )
        .register(
            "codellama-34b-instruct",
            Model::new(
                "codellama/CodeLlama-34b-Instruct-hf",
                "huggingface",
                chain(&[PerplexityLabs, DeepInfra])?,
            )?,
        )
        .register(
            "codellama-70b-instruct",
            Model::with_provider("codellama/CodeLlama-70b-Instruct-hf", "huggingface", DeepInfra)?,
        );

    // Mistral
    builder
        .register(
            "mixtral-8x7b",
            Model::new(
                "mistralai/Mixtral-8x7B-Instruct-v0.1",
                "PerplexityLabs",
                chain(&[PerplexityLabs, DeepInfra])?,
            )?,
        )
        .register(
            "mistral-7b",
            Model::with_provider(
                "mistralai/Mistral-7B-Instruct-v0.1",
                "huggingface",
                PerplexityLabs,
            )?,
        );

    // Misc
    builder
        .register(
            "dolphin-mixtral-8x7b",
            Model::with_provider(
                "cognitivecomputations/dolphin-2.6-mixtral-8x7b",
                "huggingface",
                DeepInfra,
            )?,
        )
        .register(
            "lzlv-70b",
            Model::with_provider("lizpreciatior/lzlv_70b_fp16_hf", "huggingface", DeepInfra)?,
        )
        .register(
            "airoboros-70b",
            Model::with_provider("deepinfra/airoboros-70b", "huggingface", DeepInfra)?,
        )
        .register(
            "airoboros-l2-70b",
            Model::with_provider(
                "jondurbin/airoboros-l2-70b-gpt4-1.4.1",
                "huggingface",
                DeepInfra,
            )?,
        )
        .register(
            "openchat_3.5",
            Model::with_provider("openchat/openchat_3.5", "huggingface", DeepInfra)?,
        )
        .register(
            "gemini-pro",
            Model::new("gemini-pro", "google", chain(&[FreeChatgpt, GeminiProChat])?)?,
        )
        .register(
            "claude-v2",
            Model::with_provider("claude-v2", "anthropic", FreeChatgpt)?,
        );

    Ok(builder)
}

/// The registry of built-in models.
pub fn builtin() -> Result<ModelRegistry, Error> {
    builder()?.build()
}
