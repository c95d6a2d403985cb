//! Identities of the backends able to serve chat models.
//!
//! The registry never talks to a backend. It only refers to them by identity so the
//! dispatch layer knows which client to call and in what order. The clients themselves
//! live with whoever performs the requests.

use serde::{Deserialize, Serialize};

/// The `ProviderIdentifier` is a unique per-provider identifier. It is used to
/// differentiate providers in code which is generic over different providers.
///
/// The `to_string` and `FromStr` are part of the CLI and the config file and should
/// remain stable.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProviderIdentifier {
    ChatgptAi,
    ChatgptNext,
    DeepInfra,
    FreeChatgpt,
    GeminiProChat,
    GptGo,
    Liaobots,
    Llama,
    PerplexityLabs,
    You,
}
