// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Language selection, the first screen.

use tracing::info;

use crate::models::Language;
use crate::routes::Route;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeScreen {
    selected: Language,
}

impl WelcomeScreen {
    /// Opens with the language currently in effect highlighted.
    pub async fn open(state: &AppState) -> Self {
        Self {
            selected: state.language().await,
        }
    }

    pub fn languages(&self) -> &'static [Language] {
        &Language::ALL
    }

    pub fn selected(&self) -> Language {
        self.selected
    }

    pub async fn select_language(&mut self, state: &AppState, language: Language) {
        self.selected = language;
        state.set_language(language).await;
        info!(language = %language, "interface language changed");
    }

    pub fn get_started(&self) -> Route {
        Route::Auth
    }
}
