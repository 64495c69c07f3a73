// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Pezkuwi Wallet Client - headless PezkuwiChain civic wallet
//!
//! Typed bindings for the PezkuwiChain backend, a shared session store, and
//! screen controllers that drive signup, citizenship verification, transfers,
//! governance and education against them.
//!
//! ## Modules
//!
//! - `api` - REST client, one method per backend endpoint (reqwest)
//! - `config` - environment-driven configuration
//! - `error` - client error type
//! - `features` - feature catalog and the citizenship gate
//! - `models` - wire types
//! - `routes` - navigation targets
//! - `screens` - per-screen controllers
//! - `session` - shared session store with change notification
//! - `state` - dependency container handed to screens
//! - `telemetry` - tracing setup

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod models;
pub mod routes;
pub mod screens;
pub mod session;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod testing;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{Session, SessionStore};
pub use state::AppState;
