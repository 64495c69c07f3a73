// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fixtures shared by unit tests.

use chrono::{TimeZone, Utc};

use crate::models::{KycStatus, TokenType, Transaction, TrustScoreBreakdown, User, WalletAddress};

pub(crate) const WALLET: &str = "0x742d35cc6634c0532925a3b844bc9e7595f4ab12";

pub(crate) fn sample_user(user_id: &str, is_citizen: bool) -> User {
    let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    User {
        user_id: user_id.to_string(),
        email: None,
        wallet_address: WalletAddress::from(WALLET),
        hez_balance: 1000.0,
        pez_balance: 100.0,
        trust_score: if is_citizen { 500 } else { 100 },
        is_citizen,
        kyc_status: if is_citizen {
            KycStatus::Approved
        } else {
            KycStatus::NotStarted
        },
        kyc_hash: None,
        created_at: created,
        updated_at: created,
    }
}

pub(crate) fn breakdown(total_score: i64) -> TrustScoreBreakdown {
    TrustScoreBreakdown {
        base_score: 100,
        citizen_bonus: total_score - 100,
        total_score,
        ..Default::default()
    }
}

pub(crate) fn sample_transaction(from: &str, to: &str, amount: f64) -> Transaction {
    Transaction {
        transaction_id: format!("tx-{from}-{to}"),
        from_address: WalletAddress::from(from),
        to_address: WalletAddress::from(to),
        amount,
        token_type: TokenType::Hez,
        status: "completed".to_string(),
        timestamp: Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
    }
}
