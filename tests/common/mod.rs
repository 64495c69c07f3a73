// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process stand-in for the PezkuwiChain backend.
//!
//! Serves the same routes and response shapes as the real service from an
//! in-memory store, and records every request it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use tokio::net::TcpListener;
use uuid::Uuid;

use pezkuwi_client::{AppState, ClientConfig};

/// One request as seen by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct Db {
    pub users: HashMap<String, Value>,
    pub transactions: Vec<Value>,
    pub proposals: Vec<Value>,
    pub courses: Vec<Value>,
    pub enrollments: Vec<Value>,
    pub votes: Vec<Value>,
    pub requests: Vec<Recorded>,
    /// When set, KYC submissions are refused with this detail.
    pub kyc_rejection: Option<String>,
}

impl Db {
    fn record(&mut self, method: Method, uri: &Uri, body: Option<Value>) {
        self.requests.push(Recorded {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            body,
        });
    }

    fn wallet_of(&self, user_id: &str) -> Option<String> {
        self.users
            .get(user_id)
            .and_then(|u| u["wallet_address"].as_str())
            .map(str::to_string)
    }
}

type Shared = Arc<Mutex<Db>>;

pub struct MockBackend {
    pub base_url: String,
    db: Shared,
}

impl MockBackend {
    /// Start on an ephemeral port with two proposals and two courses seeded.
    pub async fn start() -> Self {
        let db: Shared = Arc::default();
        {
            let mut guard = db.lock().unwrap();
            guard.proposals = vec![
                proposal("p1", "Fund village schools"),
                proposal("p2", "Open a diaspora office"),
            ];
            guard.courses = vec![
                course("c1", "Kurdish History"),
                course("c2", "Blockchain Basics"),
            ];
        }
        let base_url = serve(router(db.clone())).await;
        Self { base_url, db }
    }

    /// A server that answers every request with an HTML error page.
    pub async fn start_garbage() -> String {
        let app = Router::new().fallback(|| async {
            (StatusCode::BAD_GATEWAY, "<html><body>Bad Gateway</body></html>")
        });
        serve(app).await
    }

    /// URL with nothing listening behind it.
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    pub fn state(&self) -> AppState {
        AppState::from_config(&ClientConfig::new(&self.base_url)).unwrap()
    }

    pub fn db(&self) -> MutexGuard<'_, Db> {
        self.db.lock().unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.db().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.db().requests.len()
    }

    pub fn reject_kyc(&self, detail: &str) {
        self.db().kyc_rejection = Some(detail.to_string());
    }

    /// Insert a user directly; returns `(user_id, wallet_address)`.
    pub fn insert_user(&self, is_citizen: bool) -> (String, String) {
        let mut user = new_user(None);
        if is_citizen {
            user["is_citizen"] = json!(true);
            user["kyc_status"] = json!("approved");
            user["trust_score"] = json!(500);
        }
        let id = user["user_id"].as_str().unwrap().to_string();
        let wallet = user["wallet_address"].as_str().unwrap().to_string();
        self.db().users.insert(id.clone(), user);
        (id, wallet)
    }

    pub fn insert_transaction(&self, from: &str, to: &str, amount: f64) {
        self.db().transactions.push(transaction(from, to, amount, "HEZ"));
    }

    pub fn user(&self, user_id: &str) -> Value {
        self.db().users[user_id].clone()
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn router(db: Shared) -> Router {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/user/{user_id}", get(get_user))
        .route("/api/user/{user_id}/wallet", get(get_wallet))
        .route("/api/trust-score/{user_id}", get(get_trust_score))
        .route("/api/kyc/submit/{user_id}", post(submit_kyc))
        .route(
            "/api/transactions/{user_id}",
            post(create_transaction).get(get_transactions),
        )
        .route("/api/governance/proposals", get(get_proposals))
        .route("/api/governance/vote/{user_id}", post(cast_vote))
        .route("/api/education/courses", get(get_courses))
        .route("/api/education/enroll/{user_id}", post(enroll_course))
        .route("/api/education/my-courses/{user_id}", get(get_my_courses))
        .route("/api/features/check/{user_id}", get(check_feature))
        .with_state(db)
}

// =============================================================================
// Fixtures
// =============================================================================

fn now() -> String {
    Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

fn wallet_address() -> String {
    let a = Uuid::new_v4().simple().to_string();
    let b = Uuid::new_v4().simple().to_string();
    format!("0x{a}{}", &b[..8])
}

fn new_user(email: Option<String>) -> Value {
    json!({
        "user_id": Uuid::new_v4().to_string(),
        "email": email,
        "wallet_address": wallet_address(),
        "hez_balance": 1000.0,
        "pez_balance": 100.0,
        "trust_score": 100,
        "is_citizen": false,
        "kyc_status": "not_started",
        "kyc_hash": null,
        "created_at": now(),
        "updated_at": now(),
    })
}

fn proposal(id: &str, title: &str) -> Value {
    json!({
        "proposal_id": id,
        "title": title,
        "description": format!("{title}."),
        "category": "general",
        "votes_for": 0,
        "votes_against": 0,
        "status": "active",
        "created_at": now(),
        "ends_at": "2026-12-31T23:59:59",
    })
}

fn course(id: &str, title: &str) -> Value {
    json!({
        "course_id": id,
        "title": title,
        "description": format!("{title} for citizens."),
        "difficulty": "beginner",
        "duration_hours": 4,
        "trust_score_reward": 50,
        "enrolled_count": 0,
    })
}

fn transaction(from: &str, to: &str, amount: f64, token: &str) -> Value {
    json!({
        "transaction_id": Uuid::new_v4().to_string(),
        "from_address": from,
        "to_address": to,
        "amount": amount,
        "token_type": token,
        "status": "completed",
        "timestamp": now(),
    })
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn user_not_found() -> Response {
    detail(StatusCode::NOT_FOUND, "User not found")
}

// =============================================================================
// Handlers
// =============================================================================

async fn signup(State(db): State<Shared>, uri: Uri, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::POST, &uri, Some(body.clone()));

    let email = body["email"].as_str().map(str::to_string);
    let user = new_user(email);
    let user_id = user["user_id"].as_str().unwrap().to_string();
    let wallet = user["wallet_address"].clone();
    db.users.insert(user_id.clone(), user);

    Json(json!({
        "success": true,
        "user_id": user_id,
        "wallet_address": wallet,
        "message": "Account created successfully",
    }))
    .into_response()
}

async fn login(State(db): State<Shared>, uri: Uri, Json(body): Json<Value>) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::POST, &uri, Some(body.clone()));

    let wallet = body["wallet_address"].as_str().unwrap_or_default();
    match db.users.values().find(|u| u["wallet_address"] == wallet) {
        Some(user) => Json(json!({ "success": true, "user": user })).into_response(),
        None => user_not_found(),
    }
}

async fn get_user(State(db): State<Shared>, uri: Uri, Path(user_id): Path<String>) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    match db.users.get(&user_id) {
        Some(user) => Json(user.clone()).into_response(),
        None => user_not_found(),
    }
}

async fn get_wallet(State(db): State<Shared>, uri: Uri, Path(user_id): Path<String>) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    match db.users.get(&user_id) {
        Some(user) => Json(json!({
            "wallet_address": user["wallet_address"],
            "hez_balance": user["hez_balance"],
            "pez_balance": user["pez_balance"],
        }))
        .into_response(),
        None => user_not_found(),
    }
}

async fn get_trust_score(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    let Some(user) = db.users.get(&user_id) else {
        return user_not_found();
    };

    let citizen_bonus = if user["is_citizen"] == true { 400 } else { 0 };
    let completed = db
        .enrollments
        .iter()
        .filter(|e| e["user_id"] == user_id.as_str() && e["completed"] == true)
        .count() as i64;
    let votes = db
        .votes
        .iter()
        .filter(|v| v["user_id"] == user_id.as_str())
        .count() as i64;
    let education_bonus = completed * 50;
    let governance_bonus = votes * 10;

    Json(json!({
        "base_score": 100,
        "citizen_bonus": citizen_bonus,
        "education_bonus": education_bonus,
        "governance_bonus": governance_bonus,
        "validator_bonus": 0,
        "total_score": 100 + citizen_bonus + education_bonus + governance_bonus,
    }))
    .into_response()
}

async fn submit_kyc(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::POST, &uri, Some(body.clone()));
    if !db.users.contains_key(&user_id) {
        return user_not_found();
    }
    if let Some(reason) = db.kyc_rejection.clone() {
        return detail(StatusCode::BAD_REQUEST, &reason);
    }

    let kyc_hash = format!("{:x}", Sha256::digest(body.to_string().as_bytes()));
    let trust_score = 500;
    if let Some(user) = db.users.get_mut(&user_id) {
        user["is_citizen"] = json!(true);
        user["kyc_status"] = json!("approved");
        user["kyc_hash"] = json!(kyc_hash);
        user["trust_score"] = json!(trust_score);
        user["updated_at"] = json!(now());
    }

    Json(json!({
        "success": true,
        "message": "Citizenship approved",
        "kyc_hash": kyc_hash,
        "new_trust_score": trust_score,
    }))
    .into_response()
}

async fn create_transaction(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::POST, &uri, Some(body.clone()));
    let Some(user) = db.users.get_mut(&user_id) else {
        return user_not_found();
    };

    let token = body["token_type"].as_str().unwrap_or("HEZ").to_string();
    let amount = body["amount"].as_f64().unwrap_or_default();
    let key = if token == "HEZ" { "hez_balance" } else { "pez_balance" };
    let balance = user[key].as_f64().unwrap_or_default();
    if balance < amount {
        return detail(StatusCode::BAD_REQUEST, "Insufficient balance");
    }
    user[key] = json!(balance - amount);

    let from = user["wallet_address"].as_str().unwrap_or_default().to_string();
    let to = body["to_address"].as_str().unwrap_or_default();
    let tx = transaction(&from, to, amount, &token);
    db.transactions.push(tx.clone());

    Json(json!({ "success": true, "transaction": tx })).into_response()
}

async fn get_transactions(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    let Some(wallet) = db.wallet_of(&user_id) else {
        return user_not_found();
    };
    let list: Vec<Value> = db
        .transactions
        .iter()
        .rev()
        .filter(|tx| tx["from_address"] == wallet.as_str() || tx["to_address"] == wallet.as_str())
        .take(50)
        .cloned()
        .collect();
    Json(list).into_response()
}

async fn get_proposals(State(db): State<Shared>, uri: Uri) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    let active: Vec<Value> = db
        .proposals
        .iter()
        .filter(|p| p["status"] == "active")
        .cloned()
        .collect();
    Json(active).into_response()
}

#[derive(Deserialize)]
struct VoteParams {
    proposal_id: String,
    vote_type: String,
}

async fn cast_vote(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
    Query(params): Query<VoteParams>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::POST, &uri, None);
    let Some(user) = db.users.get(&user_id).cloned() else {
        return user_not_found();
    };
    if user["is_citizen"] != true {
        return detail(StatusCode::FORBIDDEN, "Only citizens can vote");
    }
    let already = db
        .votes
        .iter()
        .any(|v| v["user_id"] == user_id.as_str() && v["proposal_id"] == params.proposal_id.as_str());
    if already {
        return detail(StatusCode::BAD_REQUEST, "Already voted on this proposal");
    }

    let power = user["trust_score"].as_i64().unwrap_or_default();
    let vote = json!({
        "vote_id": Uuid::new_v4().to_string(),
        "proposal_id": params.proposal_id,
        "user_id": user_id,
        "vote_type": params.vote_type,
        "voting_power": power,
        "timestamp": now(),
    });
    db.votes.push(vote.clone());

    let field = if params.vote_type == "for" { "votes_for" } else { "votes_against" };
    if let Some(p) = db
        .proposals
        .iter_mut()
        .find(|p| p["proposal_id"] == params.proposal_id.as_str())
    {
        let current = p[field].as_i64().unwrap_or_default();
        p[field] = json!(current + power);
    }

    Json(json!({ "success": true, "vote": vote })).into_response()
}

async fn get_courses(State(db): State<Shared>, uri: Uri) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    Json(db.courses.clone()).into_response()
}

#[derive(Deserialize)]
struct EnrollParams {
    course_id: String,
}

async fn enroll_course(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
    Query(params): Query<EnrollParams>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::POST, &uri, None);
    let Some(user) = db.users.get(&user_id) else {
        return user_not_found();
    };
    if user["is_citizen"] != true {
        return detail(StatusCode::FORBIDDEN, "Only citizens can access education");
    }
    let already = db
        .enrollments
        .iter()
        .any(|e| e["user_id"] == user_id.as_str() && e["course_id"] == params.course_id.as_str());
    if already {
        return detail(StatusCode::BAD_REQUEST, "Already enrolled");
    }

    let enrollment = json!({
        "enrollment_id": Uuid::new_v4().to_string(),
        "user_id": user_id,
        "course_id": params.course_id,
        "progress": 0,
        "completed": false,
        "enrolled_at": now(),
    });
    db.enrollments.push(enrollment.clone());
    Json(json!({ "success": true, "enrollment": enrollment })).into_response()
}

async fn get_my_courses(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    let mine: Vec<Value> = db
        .enrollments
        .iter()
        .filter(|e| e["user_id"] == user_id.as_str())
        .cloned()
        .collect();
    Json(mine).into_response()
}

async fn check_feature(
    State(db): State<Shared>,
    uri: Uri,
    Path(user_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    const PUBLIC: [&str; 5] = ["send", "receive", "exchange", "projects", "foundation"];
    const GATED: [&str; 9] = [
        "welati", "perwerde", "health", "social", "diaspora", "validator", "stake",
        "governance", "treasury",
    ];

    let mut db = db.lock().unwrap();
    db.record(Method::GET, &uri, None);
    let Some(user) = db.users.get(&user_id) else {
        return user_not_found();
    };
    let is_citizen = user["is_citizen"] == true;
    let feature = params.get("feature").map(String::as_str).unwrap_or_default();

    if PUBLIC.contains(&feature) {
        return Json(json!({ "has_access": true, "is_citizen": is_citizen })).into_response();
    }
    if GATED.contains(&feature) {
        return Json(json!({
            "has_access": is_citizen,
            "is_citizen": is_citizen,
            "requires_citizenship": true,
        }))
        .into_response();
    }
    Json(json!({ "has_access": false, "message": "Unknown feature" })).into_response()
}
