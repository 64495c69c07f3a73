// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! by the client. Configuration is loaded from the environment once, at
//! startup, and handed to [`ApiClient`](crate::api::ApiClient) and the
//! [`Session`](crate::session::Session).
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PEZKUWI_BACKEND_URL` | Base URL of the PezkuwiChain backend | `https://citizenpez.preview.emergentagent.com` |
//! | `PEZKUWI_REQUEST_TIMEOUT_SECS` | Per-request timeout in seconds | unset (no timeout) |
//! | `PEZKUWI_NETWORK_MODE` | Initial network mode (`mainnet` or `testnet`) | `testnet` |
//! | `PEZKUWI_LANGUAGE` | Preferred language code sent at signup | `en` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::models::{Language, NetworkMode};

/// Environment variable name for the backend base URL.
pub const BACKEND_URL_ENV: &str = "PEZKUWI_BACKEND_URL";

/// Environment variable name for the optional request timeout.
pub const REQUEST_TIMEOUT_ENV: &str = "PEZKUWI_REQUEST_TIMEOUT_SECS";

/// Environment variable name for the initial network mode.
pub const NETWORK_MODE_ENV: &str = "PEZKUWI_NETWORK_MODE";

/// Environment variable name for the preferred language.
pub const LANGUAGE_ENV: &str = "PEZKUWI_LANGUAGE";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Backend used when `PEZKUWI_BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "https://citizenpez.preview.emergentagent.com";

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub backend_url: String,
    /// Optional per-request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
    /// Network mode the session starts in.
    pub network_mode: NetworkMode,
    /// Language reported to the backend at signup.
    pub language: Language,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
            network_mode: NetworkMode::default(),
            language: Language::default(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `backend_url` with every other value defaulted.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_url = get(BACKEND_URL_ENV).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let request_timeout = match get(REQUEST_TIMEOUT_ENV) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ClientError::Config(format!(
                        "{REQUEST_TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let network_mode = match get(NETWORK_MODE_ENV) {
            Some(raw) => raw.parse().map_err(ClientError::Config)?,
            None => NetworkMode::default(),
        };

        let language = match get(LANGUAGE_ENV) {
            Some(raw) => raw.parse().map_err(ClientError::Config)?,
            None => Language::default(),
        };

        Ok(Self {
            backend_url,
            request_timeout,
            network_mode,
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.network_mode, NetworkMode::Testnet);
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BACKEND_URL_ENV, "http://localhost:8001"),
            (REQUEST_TIMEOUT_ENV, "15"),
            (NETWORK_MODE_ENV, "mainnet"),
            (LANGUAGE_ENV, "ckb"),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "http://localhost:8001");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.network_mode, NetworkMode::Mainnet);
        assert_eq!(config.language, Language::Sorani);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[(BACKEND_URL_ENV, "   "), (LANGUAGE_ENV, "")]))
                .unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = ClientConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[(NETWORK_MODE_ENV, "devnet")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
