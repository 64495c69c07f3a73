// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `pezkuwi` - call the PezkuwiChain backend from the command line.
//!
//! Every subcommand maps to one API call and prints the decoded response as
//! JSON on stdout. Logs go to stderr.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use pezkuwi_client::config::{BACKEND_URL_ENV, REQUEST_TIMEOUT_ENV};
use pezkuwi_client::models::{
    CreateTransactionRequest, KycSubmission, Language, TokenType, VoteType, WalletAddress,
    DEFAULT_DOCUMENT_TYPE, DEFAULT_NATIONALITY,
};
use pezkuwi_client::telemetry::{init_tracing, LogFormat};
use pezkuwi_client::{ApiClient, ClientConfig, ClientError, ClientResult};

#[derive(Parser)]
#[command(name = "pezkuwi")]
#[command(about = "PezkuwiChain civic wallet client", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = BACKEND_URL_ENV)]
    backend_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = REQUEST_TIMEOUT_ENV)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account (omit --email for a guest account)
    Signup {
        #[arg(long)]
        email: Option<String>,

        /// Preferred language code (en, ku, ckb, tr, ar, fa)
        #[arg(long)]
        language: Option<Language>,
    },

    /// Log in with a wallet address
    Login {
        wallet_address: String,
    },

    /// Show a user profile
    User {
        user_id: String,
    },

    /// Show wallet balances
    Wallet {
        user_id: String,
    },

    /// Show the trust score breakdown
    TrustScore {
        user_id: String,
    },

    /// Submit a citizenship application
    Kyc {
        user_id: String,

        #[arg(long)]
        full_name: String,

        #[arg(long)]
        date_of_birth: String,

        #[arg(long, default_value = DEFAULT_NATIONALITY)]
        nationality: String,

        #[arg(long, default_value = DEFAULT_DOCUMENT_TYPE)]
        document_type: String,
    },

    /// Send tokens
    Send {
        user_id: String,

        #[arg(long)]
        to: String,

        #[arg(long)]
        amount: f64,

        /// HEZ or PEZ
        #[arg(long, default_value = "HEZ")]
        token: TokenType,
    },

    /// List transactions
    Transactions {
        user_id: String,
    },

    /// List governance proposals
    Proposals,

    /// Vote on a proposal (for or against)
    Vote {
        user_id: String,
        proposal_id: String,
        vote_type: VoteType,
    },

    /// List courses
    Courses,

    /// Enroll in a course
    Enroll {
        user_id: String,
        course_id: String,
    },

    /// List a user's enrollments
    MyCourses {
        user_id: String,
    },

    /// Ask the backend whether a user may use a feature
    CheckFeature {
        user_id: String,
        feature: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    init_tracing(LogFormat::from_env(), level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Some(std::time::Duration::from_secs(secs));
    }
    let api = ApiClient::new(&config)?;

    match cli.command {
        Commands::Signup { email, language } => {
            let language = language.unwrap_or(config.language);
            print(&api.signup(email.as_deref(), language).await?)
        }
        Commands::Login { wallet_address } => {
            print(&api.login(&WalletAddress::from(wallet_address)).await?)
        }
        Commands::User { user_id } => print(&api.get_user(&user_id).await?),
        Commands::Wallet { user_id } => print(&api.get_wallet(&user_id).await?),
        Commands::TrustScore { user_id } => print(&api.get_trust_score(&user_id).await?),
        Commands::Kyc {
            user_id,
            full_name,
            date_of_birth,
            nationality,
            document_type,
        } => {
            let submission = KycSubmission {
                full_name,
                date_of_birth,
                nationality,
                document_type,
            };
            print(&api.submit_kyc(&user_id, &submission).await?)
        }
        Commands::Send {
            user_id,
            to,
            amount,
            token,
        } => {
            let request = CreateTransactionRequest {
                to_address: WalletAddress::from(to),
                amount,
                token_type: token,
            };
            print(&api.create_transaction(&user_id, &request).await?)
        }
        Commands::Transactions { user_id } => print(&api.get_transactions(&user_id).await?),
        Commands::Proposals => print(&api.get_proposals().await?),
        Commands::Vote {
            user_id,
            proposal_id,
            vote_type,
        } => print(&api.vote(&user_id, &proposal_id, vote_type).await?),
        Commands::Courses => print(&api.get_courses().await?),
        Commands::Enroll { user_id, course_id } => {
            print(&api.enroll_course(&user_id, &course_id).await?)
        }
        Commands::MyCourses { user_id } => print(&api.get_my_courses(&user_id).await?),
        Commands::CheckFeature { user_id, feature } => {
            print(&api.check_feature_access(&user_id, &feature).await?)
        }
    }
}

fn print<T: Serialize>(value: &T) -> ClientResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(ClientError::Encode)?;
    println!("{json}");
    Ok(())
}
