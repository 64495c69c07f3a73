// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Backend API Client
//!
//! One method per backend endpoint, grouped by resource:
//!
//! - `auth` - signup and login
//! - `users` - profile, wallet balance, trust score
//! - `kyc` - identity verification submission
//! - `transactions` - token transfers and history
//! - `governance` - proposals and voting
//! - `education` - courses and enrollments
//! - `features` - server-side feature access check
//!
//! Every call issues exactly one request and decodes the body whatever the
//! status code. There is no retry and no caching; a timeout applies only when
//! [`ClientConfig::request_timeout`] is set.

use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

pub mod auth;
pub mod education;
pub mod features;
pub mod governance;
pub mod kyc;
pub mod transactions;
pub mod users;

/// Stateless client for the PezkuwiChain backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    /// Build a client for the configured backend.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut base_url = Url::parse(config.backend_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "backend URL {} cannot carry a path",
                config.backend_url
            )));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { base_url, http })
    }

    /// Build a client from `PEZKUWI_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `segments` (percent-encoded individually) and `query` against
    /// the base URL. A path prefix on the base URL is preserved.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Config(format!("backend URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http.get(url.clone());
        self.execute(Method::GET, url, request).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(url.clone()).json(body);
        self.execute(Method::POST, url, request).await
    }

    /// POST with parameters in the query string and no body.
    async fn post_empty<T>(&self, url: Url) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http.post(url.clone());
        self.execute(Method::POST, url, request).await
    }

    async fn execute<T>(&self, method: Method, url: Url, request: RequestBuilder) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(method = %method, path = url.path(), "backend request");

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(
            method = %method,
            path = url.path(),
            status = status.as_u16(),
            bytes = body.len(),
            "backend response"
        );

        serde_json::from_slice(&body).map_err(|e| ClientError::decode(url.path(), e))
    }
}
