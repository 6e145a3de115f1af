use config::Config;
use rand::RngCore;
use serde::Deserialize;

use crate::core::error::ConfigError;

const PREFIX: &str = "BOOKSHELF";

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) database_url: String,
    pub(crate) max_connections: u32,
    pub(crate) log_level: String,
    pub(crate) port: u16,
    pub(crate) token_ttl_minutes: i64,
    pub(crate) bcrypt_cost: u32,
}

impl Args {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("max_connections", 5)?
            .set_default("log_level", "info")?
            .set_default("port", 8080)?
            .set_default("token_ttl_minutes", 60)?
            .set_default("bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            .add_source(config::Environment::with_prefix(PREFIX))
            .build()?;

        Ok(config.try_deserialize::<Args>()?)
    }
}

/// Symmetric key used to sign and verify identity tokens.
///
/// Generated once per process; every token issued before a restart stops
/// verifying after it.
pub(crate) struct SigningKey(Vec<u8>);

impl SigningKey {
    const LENGTH: usize = 64;

    pub(crate) fn generate() -> Self {
        let mut bytes = vec![0u8; Self::LENGTH];
        rand::thread_rng().fill_bytes(&mut bytes);

        Self(bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
