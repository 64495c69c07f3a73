// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Trust score overview and per-component progress.

use super::report_failure;
use crate::models::TrustScoreBreakdown;
use crate::session::SessionStore;
use crate::state::AppState;

/// Score the overall progress bar is measured against.
pub const MAX_TOTAL_SCORE: f64 = 1000.0;

/// Score each component bar is measured against.
pub const MAX_COMPONENT_SCORE: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustComponent {
    Base,
    Citizen,
    Education,
    Governance,
    Validator,
}

impl TrustComponent {
    pub const ALL: [TrustComponent; 5] = [
        TrustComponent::Base,
        TrustComponent::Citizen,
        TrustComponent::Education,
        TrustComponent::Governance,
        TrustComponent::Validator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrustComponent::Base => "Base Score",
            TrustComponent::Citizen => "Citizen Bonus",
            TrustComponent::Education => "Education Bonus",
            TrustComponent::Governance => "Governance Bonus",
            TrustComponent::Validator => "Validator Bonus",
        }
    }

    pub fn value(&self, breakdown: &TrustScoreBreakdown) -> i64 {
        match self {
            TrustComponent::Base => breakdown.base_score,
            TrustComponent::Citizen => breakdown.citizen_bonus,
            TrustComponent::Education => breakdown.education_bonus,
            TrustComponent::Governance => breakdown.governance_bonus,
            TrustComponent::Validator => breakdown.validator_bonus,
        }
    }
}

fn fraction(value: i64, max: f64) -> f64 {
    (value as f64 / max).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Default)]
pub struct TrustHubScreen {
    loading: bool,
    error: Option<String>,
}

impl TrustHubScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self, state: &AppState) {
        let Some(user) = state.session.current_user().await else {
            return;
        };
        self.loading = true;
        match state.api.get_trust_score(&user.user_id).await {
            Ok(breakdown) => {
                state.session.set_trust_breakdown(breakdown).await;
                self.error = None;
            }
            Err(err) => self.error = Some(report_failure("trust_hub.load", &err)),
        }
        self.loading = false;
    }

    /// Breakdown total when non-zero, else the profile score, else zero.
    pub fn displayed_total(store: &SessionStore) -> i64 {
        store
            .trust_breakdown()
            .map(|b| b.total_score)
            .filter(|total| *total != 0)
            .or_else(|| store.user().map(|u| u.trust_score))
            .unwrap_or(0)
    }

    pub fn total_progress(store: &SessionStore) -> f64 {
        let total = store.trust_breakdown().map_or(0, |b| b.total_score);
        fraction(total, MAX_TOTAL_SCORE)
    }

    pub fn component_progress(store: &SessionStore, component: TrustComponent) -> f64 {
        let value = store.trust_breakdown().map_or(0, |b| component.value(b));
        fraction(value, MAX_COMPONENT_SCORE)
    }
}
