use game_core::ConfigError;
use thiserror::Error;

/// Failure surfaced by the host around the simulation core
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("perception payload could not be decoded: {0}")]
    Decode(#[source] postcard::Error),
    #[error("perception payload could not be encoded: {0}")]
    Encode(#[source] postcard::Error),
}
