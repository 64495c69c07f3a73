// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use tracing::info;

use super::ApiClient;
use crate::error::ClientResult;
use crate::models::{KycResponse, KycSubmission};

impl ApiClient {
    /// `POST /api/kyc/submit/{id}`
    ///
    /// The approval decision is the backend's; the response carries the new
    /// trust score when citizenship was granted.
    pub async fn submit_kyc(
        &self,
        user_id: &str,
        submission: &KycSubmission,
    ) -> ClientResult<KycResponse> {
        let url = self.endpoint(&["api", "kyc", "submit", user_id], &[])?;
        let response: KycResponse = self.post_json(url, submission).await?;
        info!(
            user_id = %user_id,
            success = response.success,
            new_trust_score = ?response.new_trust_score,
            "KYC submitted"
        );
        Ok(response)
    }
}
