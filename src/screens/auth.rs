// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sign-up, sign-in and guest start.
//!
//! All three paths end the same way: the profile is fetched (or taken from
//! the login response), stored in the session, and the user is routed to the
//! dashboard.

use tracing::info;

use super::report_failure;
use crate::error::ClientResult;
use crate::models::{ActionOutcome, SignupResponse, WalletAddress};
use crate::routes::Route;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    SignIn,
    #[default]
    SignUp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Collected for display; the backend does not take it yet.
    pub referral_code: String,
}

impl SignupForm {
    fn validate(&self) -> Result<(), &'static str> {
        if self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err("Please fill all required fields");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}

/// The backend's login takes a wallet address as the only credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub wallet_address: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AuthScreen {
    pub tab: AuthTab,
    pub signup: SignupForm,
    pub signin: SignInForm,
    show_password: bool,
    loading: bool,
    error: Option<String>,
}

impl AuthScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Switching tabs clears any error from the other tab.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.error = None;
    }

    pub async fn submit_signup(&mut self, state: &AppState) -> Option<Route> {
        if let Err(message) = self.signup.validate() {
            self.error = Some(message.to_string());
            return None;
        }
        let email = self.signup.email.trim().to_string();
        self.run(state, "auth.signup", "Signup failed", |state| async move {
            let language = state.language().await;
            let response = state.api.signup(Some(email.as_str()), language).await?;
            finish_signup(&state, response).await
        })
        .await
    }

    pub async fn submit_signin(&mut self, state: &AppState) -> Option<Route> {
        let address = self.signin.wallet_address.trim().to_string();
        if address.is_empty() {
            self.error = Some("Please enter your wallet address".to_string());
            return None;
        }
        self.run(state, "auth.signin", "Login failed", |state| async move {
            let response = state.api.login(&WalletAddress::from(address)).await?;
            match response.user {
                Some(user) if response.success => {
                    info!(user_id = %user.user_id, "signed in");
                    state.session.set_user(user).await;
                    Ok(true)
                }
                _ => {
                    info!(reason = ?response.failure_reason(), "sign-in rejected");
                    Ok(false)
                }
            }
        })
        .await
    }

    /// Creates an anonymous account without an email.
    pub async fn continue_as_guest(&mut self, state: &AppState) -> Option<Route> {
        self.run(state, "auth.guest", "Signup failed", |state| async move {
            let language = state.language().await;
            let response = state.api.signup(None, language).await?;
            finish_signup(&state, response).await
        })
        .await
    }

    /// Shared loading/error bookkeeping. `action` resolves to whether the
    /// session now holds a user.
    async fn run<F, Fut>(
        &mut self,
        state: &AppState,
        name: &'static str,
        rejected: &'static str,
        action: F,
    ) -> Option<Route>
    where
        F: FnOnce(AppState) -> Fut,
        Fut: std::future::Future<Output = ClientResult<bool>>,
    {
        self.loading = true;
        self.error = None;

        let outcome = action(state.clone()).await;
        self.loading = false;

        match outcome {
            Ok(true) => Some(Route::Dashboard),
            Ok(false) => {
                self.error = Some(rejected.to_string());
                None
            }
            Err(err) => {
                self.error = Some(report_failure(name, &err));
                None
            }
        }
    }
}

async fn finish_signup(state: &AppState, response: SignupResponse) -> ClientResult<bool> {
    let user_id = match response.user_id {
        Some(user_id) if response.success => user_id,
        _ => return Ok(false),
    };
    let user = state.api.get_user(&user_id).await?;
    info!(user_id = %user.user_id, wallet = %user.wallet_address.truncated(), "account created");
    state.session.set_user(user).await;
    Ok(true)
}
