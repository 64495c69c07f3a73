// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Proposal list and voting.

use tracing::{debug, info};

use super::report_failure;
use crate::models::{ActionOutcome, Proposal, VoteType};
use crate::state::AppState;

/// Share of `for` and `against` votes on a proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoteTally {
    pub total: i64,
    pub for_share: f64,
    pub against_share: f64,
}

impl VoteTally {
    /// Negative counts are treated as zero; the total saturates.
    pub fn of(proposal: &Proposal) -> Self {
        let votes_for = proposal.votes_for.max(0);
        let votes_against = proposal.votes_against.max(0);
        let total = votes_for.saturating_add(votes_against);
        if total == 0 {
            return Self {
                total: 0,
                for_share: 0.0,
                against_share: 0.0,
            };
        }
        Self {
            total,
            for_share: (votes_for as f64 / total as f64).clamp(0.0, 1.0),
            against_share: (votes_against as f64 / total as f64).clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GovernanceScreen {
    proposals: Vec<Proposal>,
    loading: bool,
    error: Option<String>,
}

impl Default for GovernanceScreen {
    fn default() -> Self {
        Self {
            proposals: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl GovernanceScreen {
    /// Starts in the loading state until the first [`load`](Self::load).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn can_vote(&self, state: &AppState) -> bool {
        state
            .session
            .read()
            .await
            .user()
            .is_some_and(|u| u.is_citizen)
    }

    pub async fn load(&mut self, state: &AppState) {
        self.loading = true;
        match state.api.get_proposals().await {
            Ok(proposals) => {
                self.proposals = proposals;
                self.error = None;
            }
            Err(err) => self.error = Some(report_failure("governance.load", &err)),
        }
        self.loading = false;
    }

    /// Cast one vote and reload. Does nothing for non-citizens.
    pub async fn vote(&mut self, state: &AppState, proposal_id: &str, vote_type: VoteType) {
        let Some(user) = state.session.current_user().await.filter(|u| u.is_citizen) else {
            debug!(proposal_id, "vote ignored: not a citizen");
            return;
        };

        let failure = match state.api.vote(&user.user_id, proposal_id, vote_type).await {
            Ok(response) if response.succeeded() => {
                info!(proposal_id, vote = %vote_type, "vote recorded");
                None
            }
            Ok(response) => Some(
                response
                    .failure_reason()
                    .unwrap_or_else(|| "Vote failed".to_string()),
            ),
            Err(err) => {
                self.error = Some(report_failure("governance.vote", &err));
                return;
            }
        };
        self.load(state).await;
        if failure.is_some() {
            self.error = failure;
        }
    }
}
