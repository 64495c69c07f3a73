// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wire Data Models
//!
//! Local mirrors of the backend's JSON documents, plus the request bodies the
//! client sends. Authoritative state lives server-side; these types only carry
//! what the backend returned.
//!
//! ## Decoding rules
//!
//! - Unknown fields (e.g. the database `_id`) are ignored.
//! - Timestamps are ISO-8601 strings. Values without an offset are read as UTC.
//! - Action envelopes default `success` to `false`, so an error body such as
//!   `{"detail": "User not found"}` still decodes and reads as a failure.
//!
//! ## Model Categories
//!
//! - **Identity**: [`User`], [`WalletAddress`], [`KycStatus`]
//! - **Trust**: [`TrustScoreBreakdown`]
//! - **Ledger**: [`Transaction`], [`WalletBalance`], [`TokenType`]
//! - **Governance**: [`Proposal`], [`Vote`], [`VoteType`]
//! - **Education**: [`Course`], [`Enrollment`]
//! - **Envelopes**: `*Response` types implementing [`ActionOutcome`]

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Wallet Address Type
// =============================================================================

/// Wallet address wrapper.
///
/// The backend issues `0x`-prefixed 40-hex-character addresses, but the client
/// never validates the format; whatever the server returns is carried as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(transparent)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: first 6 characters, `...`, last 4 characters.
    ///
    /// Addresses too short to abbreviate are returned unchanged.
    pub fn truncated(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }

    /// First `n` characters, used for compact history rows.
    pub fn prefix(&self, n: usize) -> String {
        self.0.chars().take(n).collect()
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(value: String) -> Self {
        WalletAddress(value)
    }
}

impl From<&str> for WalletAddress {
    fn from(value: &str) -> Self {
        WalletAddress(value.to_string())
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Progress of a user's identity verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    NotStarted,
    Pending,
    Approved,
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KycStatus::NotStarted => "not_started",
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
        })
    }
}

/// The two currencies every wallet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    #[default]
    Hez,
    Pez,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenType::Hez => "HEZ",
            TokenType::Pez => "PEZ",
        })
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEZ" => Ok(TokenType::Hez),
            "PEZ" => Ok(TokenType::Pez),
            other => Err(format!("unknown token type {other:?} (expected HEZ or PEZ)")),
        }
    }
}

/// Direction of a governance vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    For,
    Against,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::For => "for",
            VoteType::Against => "against",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "for" => Ok(VoteType::For),
            "against" => Ok(VoteType::Against),
            other => Err(format!("unknown vote type {other:?} (expected for or against)")),
        }
    }
}

/// Network the user has selected. A display flag only: it never changes
/// which backend the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    Mainnet,
    #[default]
    Testnet,
}

impl NetworkMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            NetworkMode::Mainnet => NetworkMode::Testnet,
            NetworkMode::Testnet => NetworkMode::Mainnet,
        }
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NetworkMode::Mainnet => "mainnet",
            NetworkMode::Testnet => "testnet",
        })
    }
}

impl FromStr for NetworkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(NetworkMode::Mainnet),
            "testnet" => Ok(NetworkMode::Testnet),
            other => Err(format!("unknown network mode {other:?} (expected mainnet or testnet)")),
        }
    }
}

/// Interface languages offered on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ku")]
    Kurmanji,
    #[serde(rename = "ckb")]
    Sorani,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "fa")]
    Persian,
}

impl Language {
    /// Every language, in the order the welcome screen lists them.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Kurmanji,
        Language::Sorani,
        Language::Turkish,
        Language::Arabic,
        Language::Persian,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kurmanji => "ku",
            Language::Sorani => "ckb",
            Language::Turkish => "tr",
            Language::Arabic => "ar",
            Language::Persian => "fa",
        }
    }

    /// The language's name written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Kurmanji => "Kurdî (Kurmancî)",
            Language::Sorani => "کوردی (سۆرانی)",
            Language::Turkish => "Türkçe",
            Language::Arabic => "العربية",
            Language::Persian => "فارسی",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("unsupported language code {code:?}"))
    }
}

// =============================================================================
// Identity Models
// =============================================================================

/// The logged-in user's profile as returned by `GET /api/user/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Backend-assigned identifier.
    pub user_id: String,
    /// Email given at signup, if any.
    #[serde(default)]
    pub email: Option<String>,
    /// Custodial wallet address.
    pub wallet_address: WalletAddress,
    /// HEZ balance.
    pub hez_balance: f64,
    /// PEZ balance.
    pub pez_balance: f64,
    /// Server-computed trust score.
    pub trust_score: i64,
    /// Whether the user holds Digital Citizen status.
    pub is_citizen: bool,
    /// Identity verification progress.
    pub kyc_status: KycStatus,
    /// Hash of the submitted KYC data, once approved.
    #[serde(default)]
    pub kyc_hash: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Referral code shown on the dashboard.
    pub fn referral_code(&self) -> String {
        self.user_id.chars().take(8).collect::<String>().to_uppercase()
    }

    pub fn citizen_label(&self) -> &'static str {
        if self.is_citizen {
            "Digital Citizen"
        } else {
            "Standard User"
        }
    }

    /// Balance held in the given currency.
    pub fn balance(&self, token: TokenType) -> f64 {
        match token {
            TokenType::Hez => self.hez_balance,
            TokenType::Pez => self.pez_balance,
        }
    }
}

// =============================================================================
// Trust Models
// =============================================================================

/// Per-source contributions to a user's trust score.
///
/// `total_score` is taken from the server verbatim; nothing checks that it
/// equals the sum of the parts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TrustScoreBreakdown {
    pub base_score: i64,
    pub citizen_bonus: i64,
    pub education_bonus: i64,
    pub governance_bonus: i64,
    pub validator_bonus: i64,
    pub total_score: i64,
}

// =============================================================================
// Ledger Models
// =============================================================================

/// A token transfer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub transaction_id: String,
    pub from_address: WalletAddress,
    pub to_address: WalletAddress,
    pub amount: f64,
    pub token_type: TokenType,
    /// Backend status string (`pending`, `completed`, `failed`).
    pub status: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Response of `GET /api/user/{id}/wallet`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletBalance {
    pub wallet_address: WalletAddress,
    pub hez_balance: f64,
    pub pez_balance: f64,
}

// =============================================================================
// Governance Models
// =============================================================================

/// A governance proposal open for voting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Proposal {
    pub proposal_id: String,
    pub title: String,
    pub description: String,
    /// `governance`, `treasury` or `technical`.
    pub category: String,
    /// Trust-weighted votes in favour.
    pub votes_for: i64,
    /// Trust-weighted votes against.
    pub votes_against: i64,
    pub status: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub ends_at: DateTime<Utc>,
}

/// A recorded vote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vote {
    pub vote_id: String,
    pub proposal_id: String,
    pub user_id: String,
    pub vote_type: VoteType,
    /// Weight of the vote (the voter's trust score when cast).
    pub voting_power: i64,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Education Models
// =============================================================================

/// A course in the education catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub description: String,
    /// `beginner`, `intermediate` or `advanced`.
    pub difficulty: String,
    pub duration_hours: i64,
    /// Trust score granted on completion.
    pub trust_score_reward: i64,
    #[serde(default)]
    pub enrolled_count: i64,
}

/// A user's enrollment in a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub enrollment_id: String,
    pub user_id: String,
    pub course_id: String,
    /// Completion percentage, 0–100.
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "timestamp")]
    pub enrolled_at: DateTime<Utc>,
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub preferred_language: Language,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub wallet_address: WalletAddress,
}

/// Nationality the citizenship form starts with.
pub const DEFAULT_NATIONALITY: &str = "Kurdish";

/// Identity document the citizenship form starts with.
pub const DEFAULT_DOCUMENT_TYPE: &str = "National ID";

/// Body of `POST /api/kyc/submit/{id}`.
///
/// Document images are handled outside this request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KycSubmission {
    pub full_name: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub document_type: String,
}

impl Default for KycSubmission {
    /// Blank name and birth date; nationality and document type pre-filled.
    fn default() -> Self {
        Self {
            full_name: String::new(),
            date_of_birth: String::new(),
            nationality: DEFAULT_NATIONALITY.to_string(),
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
        }
    }
}

/// Body of `POST /api/transactions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTransactionRequest {
    pub to_address: WalletAddress,
    pub amount: f64,
    pub token_type: TokenType,
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Common shape of the backend's action responses.
///
/// Logical failures are reported in the body, not by status code: callers
/// inspect [`succeeded`](ActionOutcome::succeeded) and, on failure, read the
/// server's explanation from [`failure_reason`](ActionOutcome::failure_reason).
pub trait ActionOutcome {
    fn succeeded(&self) -> bool;

    /// Raw `detail` member of an error body.
    fn detail(&self) -> Option<&Value>;

    /// Human-readable reason for a failed action, when the server gave one.
    fn failure_reason(&self) -> Option<String> {
        if self.succeeded() {
            return None;
        }
        match self.detail()? {
            Value::String(text) => Some(text.clone()),
            // Validation errors arrive as a list of {"msg": ...} objects.
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }
}

macro_rules! action_outcome {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ActionOutcome for $ty {
                fn succeeded(&self) -> bool {
                    self.success
                }

                fn detail(&self) -> Option<&Value> {
                    self.detail.as_ref()
                }
            }
        )*
    };
}

/// Response of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SignupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<WalletAddress>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

/// Response of `POST /api/kyc/submit/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KycResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub kyc_hash: Option<String>,
    /// Trust score after citizenship was granted.
    #[serde(default)]
    pub new_trust_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

/// Response of `POST /api/transactions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub transaction: Option<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

/// Response of `POST /api/governance/vote/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VoteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub vote: Option<Vote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

/// Response of `POST /api/education/enroll/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnrollResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub enrollment: Option<Enrollment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

action_outcome!(
    SignupResponse,
    LoginResponse,
    KycResponse,
    TransactionResponse,
    VoteResponse,
    EnrollResponse,
);

/// Response of `GET /api/features/check/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureAccess {
    #[serde(default)]
    pub has_access: bool,
    #[serde(default)]
    pub is_citizen: Option<bool>,
    #[serde(default)]
    pub requires_citizenship: bool,
    /// Set when the backend does not recognise the feature.
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Timestamp Encoding
// =============================================================================

/// ISO-8601 timestamps with or without an offset; naive values are UTC.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Ok(with_offset.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp {raw:?}: {e}"))
    }
}
