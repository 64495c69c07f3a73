// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Proposals and voting.

use tracing::info;

use super::ApiClient;
use crate::error::ClientResult;
use crate::models::{Proposal, VoteResponse, VoteType};

impl ApiClient {
    /// `GET /api/governance/proposals`
    pub async fn get_proposals(&self) -> ClientResult<Vec<Proposal>> {
        let url = self.endpoint(&["api", "governance", "proposals"], &[])?;
        self.get_json(url).await
    }

    /// `POST /api/governance/vote/{id}?proposal_id=&vote_type=`
    pub async fn vote(
        &self,
        user_id: &str,
        proposal_id: &str,
        vote_type: VoteType,
    ) -> ClientResult<VoteResponse> {
        let url = self.endpoint(
            &["api", "governance", "vote", user_id],
            &[("proposal_id", proposal_id), ("vote_type", vote_type.as_str())],
        )?;
        let response: VoteResponse = self.post_empty(url).await?;
        info!(
            user_id = %user_id,
            proposal_id = %proposal_id,
            vote_type = %vote_type,
            success = response.success,
            "vote cast"
        );
        Ok(response)
    }
}
