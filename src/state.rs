// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::models::Language;
use crate::session::{Session, SessionStore};

/// Everything a screen needs, handed in by whoever builds the screens.
#[derive(Debug, Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub session: Session,
    language: Arc<RwLock<Language>>,
}

impl AppState {
    pub fn new(api: ApiClient, session: Session, language: Language) -> Self {
        Self {
            api,
            session,
            language: Arc::new(RwLock::new(language)),
        }
    }

    /// Fresh client and empty session from configuration.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::new(config)?;
        let session = Session::new(SessionStore::with_network_mode(config.network_mode));
        Ok(Self::new(api, session, config.language))
    }

    /// Interface language currently selected.
    pub async fn language(&self) -> Language {
        *self.language.read().await
    }

    pub async fn set_language(&self, language: Language) {
        *self.language.write().await = language;
    }
}
