// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client-side session store.
//!
//! Holds at most one logged-in user, the most recently fetched trust
//! breakdown, the network-mode display flag and loading/error flags.
//! Mutators accept whatever the API returned without validation; the store
//! never talks to the network itself.
//!
//! [`SessionStore`] is the plain state. [`Session`] is the shared handle the
//! screens receive: it serializes writes and notifies observers after each
//! mutation by bumping a revision counter.

use std::sync::Arc;

use tokio::sync::{watch, RwLock, RwLockReadGuard};
use tracing::debug;

use crate::features::Feature;
use crate::models::{NetworkMode, TrustScoreBreakdown, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    user: Option<User>,
    trust_breakdown: Option<TrustScoreBreakdown>,
    is_loading: bool,
    error: Option<String>,
    network_mode: NetworkMode,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network_mode(network_mode: NetworkMode) -> Self {
        Self {
            network_mode,
            ..Self::default()
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn trust_breakdown(&self) -> Option<&TrustScoreBreakdown> {
        self.trust_breakdown.as_ref()
    }

    pub fn network_mode(&self) -> NetworkMode {
        self.network_mode
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when no user and no breakdown are held.
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.trust_breakdown.is_none()
    }

    /// Replace the stored profile wholesale.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Replace the stored breakdown wholesale.
    pub fn set_trust_breakdown(&mut self, breakdown: TrustScoreBreakdown) {
        self.trust_breakdown = Some(breakdown);
    }

    /// Patch citizenship and trust score on the current profile.
    ///
    /// Every other field is left as-is. Does nothing when no user is set.
    pub fn update_user_status(&mut self, is_citizen: bool, trust_score: i64) {
        if let Some(user) = self.user.as_mut() {
            user.is_citizen = is_citizen;
            user.trust_score = trust_score;
        }
    }

    pub fn set_network_mode(&mut self, mode: NetworkMode) {
        self.network_mode = mode;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Drop the user and the breakdown. The network mode survives.
    pub fn logout(&mut self) {
        self.user = None;
        self.trust_breakdown = None;
    }

    /// Cosmetic gate: see [`Feature::is_accessible_by`].
    pub fn can_access(&self, feature: &Feature) -> bool {
        feature.is_accessible_by(self.user())
    }
}

/// Shared, injectable handle to a [`SessionStore`].
///
/// Clones refer to the same store. Writes are serialized; the last write wins.
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<RwLock<SessionStore>>,
    changes: Arc<watch::Sender<u64>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionStore::new())
    }
}

impl Session {
    pub fn new(store: SessionStore) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            store: Arc::new(RwLock::new(store)),
            changes: Arc::new(changes),
        }
    }

    /// Read access to the current state.
    pub async fn read(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.store.read().await
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> SessionStore {
        self.store.read().await.clone()
    }

    /// Copy of the current user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.store.read().await.user().cloned()
    }

    /// Apply `mutate` under the write lock, then notify observers.
    pub async fn update<R>(&self, mutate: impl FnOnce(&mut SessionStore) -> R) -> R {
        let result = {
            let mut store = self.store.write().await;
            mutate(&mut store)
        };
        self.changes.send_modify(|revision| *revision += 1);
        debug!(revision = *self.changes.borrow(), "session updated");
        result
    }

    /// Receiver that observes the revision counter; it changes after every
    /// mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Number of mutations applied so far.
    pub fn revision(&self) -> u64 {
        *self.changes.borrow()
    }

    pub async fn set_user(&self, user: User) {
        self.update(|store| store.set_user(user)).await
    }

    pub async fn set_trust_breakdown(&self, breakdown: TrustScoreBreakdown) {
        self.update(|store| store.set_trust_breakdown(breakdown)).await
    }

    pub async fn update_user_status(&self, is_citizen: bool, trust_score: i64) {
        self.update(|store| store.update_user_status(is_citizen, trust_score))
            .await
    }

    pub async fn set_network_mode(&self, mode: NetworkMode) {
        self.update(|store| store.set_network_mode(mode)).await
    }

    pub async fn set_loading(&self, is_loading: bool) {
        self.update(|store| store.set_loading(is_loading)).await
    }

    pub async fn set_error(&self, error: Option<String>) {
        self.update(|store| store.set_error(error)).await
    }

    pub async fn logout(&self) {
        self.update(SessionStore::logout).await
    }

    pub async fn can_access(&self, feature: &Feature) -> bool {
        self.store.read().await.can_access(feature)
    }
}
