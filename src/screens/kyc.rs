// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Citizenship application.
//!
//! A linear flow: the form is submitted, the screen sits in `Processing`
//! while the backend answers and for a short pause after, then shows
//! `Success` before routing back to the dashboard. Any failure returns to the
//! form with a message.

use std::time::Duration;

use tracing::{info, warn};

use super::report_failure;
use crate::models::{ActionOutcome, KycSubmission};
use crate::routes::Route;
use crate::state::AppState;

/// Pause before the success step is shown.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Pause on the success step before returning to the dashboard.
pub const SUCCESS_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KycStep {
    #[default]
    Form,
    Processing,
    Success,
}

#[derive(Debug, Clone)]
pub struct KycScreen {
    pub form: KycSubmission,
    step: KycStep,
    loading: bool,
    error: Option<String>,
    processing_delay: Duration,
    success_delay: Duration,
}

impl Default for KycScreen {
    fn default() -> Self {
        Self::with_delays(PROCESSING_DELAY, SUCCESS_DELAY)
    }
}

impl KycScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delays(processing_delay: Duration, success_delay: Duration) -> Self {
        Self {
            form: KycSubmission::default(),
            step: KycStep::Form,
            loading: false,
            error: None,
            processing_delay,
            success_delay,
        }
    }

    pub fn step(&self) -> KycStep {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the application. Resolves to the dashboard route once the
    /// success step has been shown.
    pub async fn submit(&mut self, state: &AppState) -> Option<Route> {
        if self.form.full_name.trim().is_empty() || self.form.date_of_birth.trim().is_empty() {
            self.error = Some("Please fill all required fields".to_string());
            return None;
        }
        let user = state.session.current_user().await?;

        self.error = None;
        self.loading = true;
        self.step = KycStep::Processing;
        let result = state.api.submit_kyc(&user.user_id, &self.form).await;
        self.loading = false;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                report_failure("kyc.submit", &err);
                self.error = Some("Failed to submit KYC".to_string());
                self.step = KycStep::Form;
                return None;
            }
        };

        if !response.succeeded() {
            let reason = response
                .failure_reason()
                .unwrap_or_else(|| "KYC was not approved".to_string());
            warn!(user_id = %user.user_id, reason = %reason, "kyc rejected");
            self.error = Some(reason);
            self.step = KycStep::Form;
            return None;
        }

        let trust_score = response.new_trust_score.unwrap_or(user.trust_score);
        tokio::time::sleep(self.processing_delay).await;
        self.step = KycStep::Success;
        state.session.update_user_status(true, trust_score).await;
        info!(user_id = %user.user_id, trust_score, "citizenship granted");

        tokio::time::sleep(self.success_delay).await;
        Some(Route::Dashboard)
    }
}
