// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Screen Controllers
//!
//! Headless counterparts of the app's screens. Each controller owns the
//! screen's local state, performs its network orchestration through
//! [`AppState::api`](crate::state::AppState) and writes results to the
//! session or to its own fields. Navigation is returned as a
//! [`Route`](crate::routes::Route), never performed.
//!
//! Common rules:
//! - actions call one API function, then re-fetch what they changed;
//!   nothing is updated optimistically;
//! - a failed request is logged and leaves prior state untouched;
//! - screens that need a user do nothing when the session has none.

use tracing::error;

use crate::error::ClientError;

pub mod auth;
pub mod dashboard;
pub mod education;
pub mod governance;
pub mod kyc;
pub mod ministries;
pub mod profile;
pub mod trust_hub;
pub mod wallet;
pub mod welcome;

pub use auth::{AuthScreen, AuthTab, SignInForm, SignupForm};
pub use dashboard::DashboardScreen;
pub use education::EducationScreen;
pub use governance::{GovernanceScreen, VoteTally};
pub use kyc::{KycScreen, KycStep};
pub use ministries::{ministry, Ministry, MINISTRIES};
pub use profile::ProfileScreen;
pub use trust_hub::{TrustComponent, TrustHubScreen};
pub use wallet::{HistoryRow, SendForm, TxDirection, WalletScreen, WalletTab};
pub use welcome::WelcomeScreen;

/// Log a failed action and return the message to show the user.
pub(crate) fn report_failure(action: &'static str, err: &ClientError) -> String {
    error!(action, error = %err, "screen action failed");
    err.user_message()
}
