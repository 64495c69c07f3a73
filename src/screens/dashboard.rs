// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Home tab: profile summary, trust score and the feature grid.

use tracing::{debug, info};

use super::report_failure;
use crate::features::{Feature, FEATURES};
use crate::routes::Route;
use crate::session::SessionStore;
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    refreshing: bool,
    gating_prompt: Option<&'static Feature>,
    error: Option<String>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn features(&self) -> &'static [Feature] {
        &FEATURES
    }

    /// Whether the grid shows a lock on `feature`.
    pub fn is_locked(&self, store: &SessionStore, feature: &Feature) -> bool {
        !store.can_access(feature)
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Feature whose press raised the citizenship prompt, while it is open.
    pub fn gating_prompt(&self) -> Option<&'static Feature> {
        self.gating_prompt
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch profile and trust breakdown concurrently and store both.
    pub async fn load(&mut self, state: &AppState) {
        let Some(user) = state.session.current_user().await else {
            debug!("dashboard load skipped: no user");
            return;
        };

        let fetched = tokio::try_join!(
            state.api.get_user(&user.user_id),
            state.api.get_trust_score(&user.user_id),
        );

        match fetched {
            Ok((user, breakdown)) => {
                state
                    .session
                    .update(|store| {
                        store.set_user(user);
                        store.set_trust_breakdown(breakdown);
                    })
                    .await;
                self.error = None;
            }
            Err(err) => self.error = Some(report_failure("dashboard.load", &err)),
        }
    }

    pub async fn refresh(&mut self, state: &AppState) {
        self.refreshing = true;
        self.load(state).await;
        self.refreshing = false;
    }

    /// Gated features pressed by a non-citizen open the citizenship prompt,
    /// presented as the [`Route::Gating`] modal, instead of their screen.
    pub async fn press_feature(
        &mut self,
        state: &AppState,
        feature: &'static Feature,
    ) -> Option<Route> {
        if !state.session.can_access(feature).await {
            info!(feature = feature.id, "gated feature blocked");
            self.gating_prompt = Some(feature);
            return Some(Route::Gating);
        }
        feature.route()
    }

    pub fn dismiss_gating_prompt(&mut self) {
        self.gating_prompt = None;
    }

    pub fn become_citizen(&mut self) -> Route {
        self.gating_prompt = None;
        Route::Kyc
    }
}
