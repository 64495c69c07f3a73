// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Dashboard feature catalog and the citizenship gate.
//!
//! Gating here is cosmetic: it decides whether to show the "become a citizen"
//! prompt. The backend enforces access independently
//! (see [`ApiClient::check_feature_access`](crate::api::ApiClient::check_feature_access)).

use crate::models::User;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Chain and community features.
    General,
    /// Government institutions.
    Government,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    /// Restricted to Digital Citizens.
    pub gated: bool,
    pub kind: FeatureKind,
}

impl Feature {
    const fn general(id: &'static str, gated: bool) -> Self {
        Self {
            id,
            gated,
            kind: FeatureKind::General,
        }
    }

    const fn government(id: &'static str) -> Self {
        Self {
            id,
            gated: false,
            kind: FeatureKind::Government,
        }
    }

    /// False exactly when the feature is gated and `user` is not a citizen.
    /// No user counts as a non-citizen.
    pub fn is_accessible_by(&self, user: Option<&User>) -> bool {
        !is_blocked(self.gated, user.is_some_and(|u| u.is_citizen))
    }

    /// Screen the feature opens, when it has one.
    pub fn route(&self) -> Option<Route> {
        match (self.kind, self.id) {
            (FeatureKind::Government, "government") => Some(Route::Ministries),
            (FeatureKind::Government, "president") => Some(Route::President),
            (FeatureKind::Government, "parliament") => Some(Route::Parliament),
            (FeatureKind::Government, "council") => Some(Route::Council),
            (FeatureKind::General, "governance" | "proposals") => Some(Route::Governance),
            (FeatureKind::General, "perwerde") => Some(Route::Education),
            _ => None,
        }
    }
}

/// The gating predicate.
pub fn is_blocked(gated: bool, is_citizen: bool) -> bool {
    gated && !is_citizen
}

/// Dashboard grid, row by row (three per row).
pub static FEATURES: [Feature; 28] = [
    Feature::general("governance", true),
    Feature::general("delegation", false),
    Feature::general("validator", true),
    Feature::general("stake", false),
    Feature::general("liquidity", false),
    Feature::general("bridge", false),
    Feature::general("proposals", true),
    Feature::general("treasury", true),
    Feature::general("mev", false),
    Feature::general("identity", false),
    Feature::general("panel", true),
    Feature::general("analytics", false),
    Feature::government("president"),
    Feature::government("government"),
    Feature::government("parliament"),
    Feature::government("council"),
    Feature::general("foundation", false),
    Feature::general("projects", false),
    Feature::general("business", false),
    Feature::general("social", true),
    Feature::general("health", true),
    Feature::general("diaspora", false),
    Feature::general("kurdistan", false),
    Feature::general("language", false),
    Feature::general("culture", false),
    Feature::general("history", false),
    Feature::general("welati", true),
    Feature::general("perwerde", true),
];

/// Look a feature up by id.
pub fn feature(id: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|f| f.id == id)
}
