// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account creation and login.

use tracing::info;

use super::ApiClient;
use crate::error::ClientResult;
use crate::models::{Language, LoginRequest, LoginResponse, SignupRequest, SignupResponse, WalletAddress};

impl ApiClient {
    /// `POST /api/auth/signup`
    ///
    /// Creates an account and a custodial wallet. `email` may be omitted for a
    /// guest account.
    pub async fn signup(
        &self,
        email: Option<&str>,
        preferred_language: Language,
    ) -> ClientResult<SignupResponse> {
        let url = self.endpoint(&["api", "auth", "signup"], &[])?;
        let body = SignupRequest {
            email: email.map(str::to_string),
            preferred_language,
        };
        let response: SignupResponse = self.post_json(url, &body).await?;
        info!(
            success = response.success,
            user_id = response.user_id.as_deref().unwrap_or(""),
            "signup completed"
        );
        Ok(response)
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, wallet_address: &WalletAddress) -> ClientResult<LoginResponse> {
        let url = self.endpoint(&["api", "auth", "login"], &[])?;
        let body = LoginRequest {
            wallet_address: wallet_address.clone(),
        };
        self.post_json(url, &body).await
    }
}
