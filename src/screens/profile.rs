// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use tracing::info;

use crate::models::NetworkMode;
use crate::routes::Route;
use crate::session::SessionStore;
use crate::state::AppState;

/// Profile tab. Logout is a two-step confirm.
#[derive(Debug, Clone, Default)]
pub struct ProfileScreen {
    confirming_logout: bool,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn citizen_label(store: &SessionStore) -> &'static str {
        store.user().map_or("Standard User", |u| u.citizen_label())
    }

    pub fn network_label(store: &SessionStore) -> &'static str {
        match store.network_mode() {
            NetworkMode::Mainnet => "Mainnet",
            NetworkMode::Testnet => "Testnet",
        }
    }

    pub async fn toggle_network(&self, state: &AppState) -> NetworkMode {
        let mode = state
            .session
            .update(|store| {
                let mode = store.network_mode().toggled();
                store.set_network_mode(mode);
                mode
            })
            .await;
        info!(network = %mode, "network mode switched");
        mode
    }

    pub fn is_confirming_logout(&self) -> bool {
        self.confirming_logout
    }

    pub fn request_logout(&mut self) {
        self.confirming_logout = true;
    }

    pub fn cancel_logout(&mut self) {
        self.confirming_logout = false;
    }

    pub async fn confirm_logout(&mut self, state: &AppState) -> Route {
        self.confirming_logout = false;
        state.session.logout().await;
        info!("logged out");
        Route::Welcome
    }
}
