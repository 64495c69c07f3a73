// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use super::ApiClient;
use crate::error::ClientResult;
use crate::models::FeatureAccess;

impl ApiClient {
    /// `GET /api/features/check/{id}?feature=`
    ///
    /// The server's answer is authoritative; the client-side predicate in
    /// [`crate::features`] is cosmetic.
    pub async fn check_feature_access(
        &self,
        user_id: &str,
        feature: &str,
    ) -> ClientResult<FeatureAccess> {
        let url = self.endpoint(&["api", "features", "check", user_id], &[("feature", feature)])?;
        self.get_json(url).await
    }
}
