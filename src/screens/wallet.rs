// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet tab: send form, receive address and transaction history.

use tracing::{debug, info};

use super::report_failure;
use crate::error::ClientError;
use crate::models::{
    ActionOutcome, CreateTransactionRequest, TokenType, Transaction, User, WalletAddress,
};
use crate::state::AppState;

/// Characters of the counterparty address shown in a history row.
const COUNTERPARTY_PREFIX_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletTab {
    #[default]
    Send,
    Receive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendForm {
    pub to_address: String,
    pub amount: String,
    pub token: TokenType,
}

impl SendForm {
    fn to_request(&self) -> Result<CreateTransactionRequest, ClientError> {
        let to_address = self.to_address.trim();
        if to_address.is_empty() {
            return Err(ClientError::invalid_input("Recipient address is required"));
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .ok_or_else(|| ClientError::invalid_input("Invalid amount"))?;

        Ok(CreateTransactionRequest {
            to_address: WalletAddress::from(to_address),
            amount,
            token_type: self.token,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxDirection {
    Sent,
    Received,
}

impl TxDirection {
    /// A transfer is "sent" when it originates from the user's own address.
    pub fn of(tx: &Transaction, user: &User) -> Self {
        if tx.from_address == user.wallet_address {
            Self::Sent
        } else {
            Self::Received
        }
    }
}

/// One rendered history row.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub direction: TxDirection,
    pub counterparty: String,
    pub amount: f64,
    pub token: TokenType,
    pub status: String,
}

impl HistoryRow {
    pub fn new(tx: &Transaction, user: &User) -> Self {
        let direction = TxDirection::of(tx, user);
        let counterparty = match direction {
            TxDirection::Sent => &tx.to_address,
            TxDirection::Received => &tx.from_address,
        };
        Self {
            direction,
            counterparty: counterparty.prefix(COUNTERPARTY_PREFIX_LEN),
            amount: tx.amount,
            token: tx.token_type,
            status: tx.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WalletScreen {
    pub tab: WalletTab,
    pub form: SendForm,
    transactions: Vec<Transaction>,
    sending: bool,
    error: Option<String>,
}

impl WalletScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn history(&self, user: &User) -> Vec<HistoryRow> {
        self.transactions
            .iter()
            .map(|tx| HistoryRow::new(tx, user))
            .collect()
    }

    /// Full address for the receive tab.
    pub fn receive_address<'a>(&self, user: &'a User) -> &'a str {
        user.wallet_address.as_str()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load_transactions(&mut self, state: &AppState) {
        let Some(user) = state.session.current_user().await else {
            debug!("wallet load skipped: no user");
            return;
        };
        match state.api.get_transactions(&user.user_id).await {
            Ok(transactions) => self.transactions = transactions,
            Err(err) => self.error = Some(report_failure("wallet.transactions", &err)),
        }
    }

    /// Submit the send form. On acceptance the profile is re-fetched so the
    /// balances update, the form resets and the history reloads.
    ///
    /// Returns whether the backend accepted the transfer.
    pub async fn send(&mut self, state: &AppState) -> bool {
        let Some(user) = state.session.current_user().await else {
            return false;
        };
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.user_message());
                return false;
            }
        };

        self.sending = true;
        self.error = None;
        let result = state.api.create_transaction(&user.user_id, &request).await;
        self.sending = false;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.error = Some(report_failure("wallet.send", &err));
                return false;
            }
        };
        if !response.succeeded() {
            let reason = response
                .failure_reason()
                .unwrap_or_else(|| "Transaction failed".to_string());
            info!(user_id = %user.user_id, reason = %reason, "transfer rejected");
            self.error = Some(reason);
            return false;
        }

        match state.api.get_user(&user.user_id).await {
            Ok(fresh) => state.session.set_user(fresh).await,
            Err(err) => self.error = Some(report_failure("wallet.refresh_user", &err)),
        }
        self.form = SendForm::default();
        self.load_transactions(state).await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_transaction, sample_user, WALLET};

    const OTHER: &str = "0xabcdef0123456789abcdef0123456789abcdef01";

    #[test]
    fn form_rejects_bad_amounts() {
        let mut form = SendForm {
            to_address: OTHER.into(),
            amount: "abc".into(),
            token: TokenType::Pez,
        };
        assert_eq!(form.to_request().unwrap_err().user_message(), "Invalid amount");

        form.amount = "-5".into();
        assert!(form.to_request().is_err());
        form.amount = "0".into();
        assert!(form.to_request().is_err());

        form.amount = " 12.5 ".into();
        let request = form.to_request().unwrap();
        assert_eq!(request.amount, 12.5);
        assert_eq!(request.token_type, TokenType::Pez);
        assert_eq!(request.to_address.as_str(), OTHER);
    }

    #[test]
    fn form_requires_recipient() {
        let form = SendForm {
            amount: "1".into(),
            ..SendForm::default()
        };
        assert_eq!(
            form.to_request().unwrap_err().user_message(),
            "Recipient address is required"
        );
    }

    #[test]
    fn history_rows_show_direction_and_counterparty() {
        let user = sample_user("u1", false);
        let sent = HistoryRow::new(&sample_transaction(WALLET, OTHER, 10.0), &user);
        assert_eq!(sent.direction, TxDirection::Sent);
        assert_eq!(sent.counterparty, "0xabcdef01");

        let received = HistoryRow::new(&sample_transaction(OTHER, WALLET, 3.0), &user);
        assert_eq!(received.direction, TxDirection::Received);
        assert_eq!(received.counterparty, "0xabcdef01");
        assert_eq!(received.amount, 3.0);
    }

    #[test]
    fn default_form_uses_hez() {
        assert_eq!(SendForm::default().token, TokenType::Hez);
        assert_eq!(WalletScreen::new().tab, WalletTab::Send);
    }
}
