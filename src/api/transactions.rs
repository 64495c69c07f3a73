// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token transfers.

use tracing::info;

use super::ApiClient;
use crate::error::ClientResult;
use crate::models::{CreateTransactionRequest, Transaction, TransactionResponse};

impl ApiClient {
    /// `POST /api/transactions/{id}`
    ///
    /// Balance checks happen server-side; an insufficient balance comes back
    /// as a failed envelope.
    pub async fn create_transaction(
        &self,
        user_id: &str,
        request: &CreateTransactionRequest,
    ) -> ClientResult<TransactionResponse> {
        let url = self.endpoint(&["api", "transactions", user_id], &[])?;
        let response: TransactionResponse = self.post_json(url, request).await?;
        info!(
            user_id = %user_id,
            to = %request.to_address,
            amount = request.amount,
            token = %request.token_type,
            success = response.success,
            "transaction submitted"
        );
        Ok(response)
    }

    /// `GET /api/transactions/{id}`
    ///
    /// Most recent first, as ordered by the backend.
    pub async fn get_transactions(&self, user_id: &str) -> ClientResult<Vec<Transaction>> {
        let url = self.endpoint(&["api", "transactions", user_id], &[])?;
        self.get_json(url).await
    }
}
