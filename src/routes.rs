// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Navigation targets.
//!
//! Screens return a [`Route`] instead of navigating; the presentation layer
//! decides how to get there.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Language selection, the entry point.
    Welcome,
    Auth,
    Dashboard,
    Wallet,
    QrScanner,
    TrustHub,
    Profile,
    Kyc,
    /// Modal asking a non-citizen to become one.
    Gating,
    Ministries,
    President,
    Parliament,
    Council,
    Governance,
    Education,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Auth => "/auth/signup",
            Route::Dashboard => "/(tabs)",
            Route::Wallet => "/(tabs)/wallet",
            Route::QrScanner => "/(tabs)/qr-scanner",
            Route::TrustHub => "/(tabs)/trust-hub",
            Route::Profile => "/(tabs)/profile",
            Route::Kyc => "/citizenship/kyc",
            Route::Gating => "/modals/gating",
            Route::Ministries => "/features/ministries",
            Route::President => "/features/president",
            Route::Parliament => "/features/parliament",
            Route::Council => "/features/council",
            Route::Governance => "/features/governance",
            Route::Education => "/features/education",
        }
    }

    /// Tabs shown in the bottom bar, in order.
    pub const TABS: [Route; 5] = [
        Route::Dashboard,
        Route::Wallet,
        Route::QrScanner,
        Route::TrustHub,
        Route::Profile,
    ];

    pub fn is_tab(&self) -> bool {
        Self::TABS.contains(self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
