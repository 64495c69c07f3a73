// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client error type.
//!
//! Only two failure categories come back from the backend boundary:
//! transport failures and undecodable bodies. Both surface to the user as the
//! same generic message. Logical failures reported by the server travel inside
//! the decoded envelope (`success: false`) and are not errors here.

/// Message shown to the user for any transport or decode failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid JSON from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn decode(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for failures that happened talking to the backend.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Decode { .. })
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) | Self::Decode { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Encode(_) | Self::InvalidBaseUrl(_) | Self::Config(_) => self.to_string(),
            Self::InvalidInput(message) => message.clone(),
        }
    }
}
