// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Profile, balance and trust-score lookups.

use super::ApiClient;
use crate::error::ClientResult;
use crate::models::{TrustScoreBreakdown, User, WalletBalance};

impl ApiClient {
    /// `GET /api/user/{id}`
    pub async fn get_user(&self, user_id: &str) -> ClientResult<User> {
        let url = self.endpoint(&["api", "user", user_id], &[])?;
        self.get_json(url).await
    }

    /// `GET /api/user/{id}/wallet`
    pub async fn get_wallet(&self, user_id: &str) -> ClientResult<WalletBalance> {
        let url = self.endpoint(&["api", "user", user_id, "wallet"], &[])?;
        self.get_json(url).await
    }

    /// `GET /api/trust-score/{id}`
    pub async fn get_trust_score(&self, user_id: &str) -> ClientResult<TrustScoreBreakdown> {
        let url = self.endpoint(&["api", "trust-score", user_id], &[])?;
        self.get_json(url).await
    }
}
