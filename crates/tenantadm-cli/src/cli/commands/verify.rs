use std::io::Read;

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};

use tenantadm_client::{CallContext, RequestLog, TokenVerifier, VerificationOutcome, VerifierConfig};

use super::super::args::VerifyArgs;
use crate::exit_codes;

const USER_AGENT_VALUE: &str = concat!("tenantadm-verify/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct Report<'a> {
    outcome: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retryable: Option<bool>,
}

impl<'a> Report<'a> {
    fn from_outcome(outcome: &'a VerificationOutcome) -> Self {
        let err = outcome.error();
        Self {
            outcome: outcome.kind(),
            error: err.map(|e| e.to_string()),
            retryable: err.map(|e| e.is_retryable()),
        }
    }
}

pub async fn run(args: VerifyArgs) -> anyhow::Result<i32> {
    let token = read_token(&args, &mut std::io::stdin().lock())?;

    let mut config = VerifierConfig::new(args.addr.clone());
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }
    let verifier = TokenVerifier::new(config);

    let http = reqwest::Client::builder()
        .user_agent(USER_AGENT_VALUE)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("failed to create HTTP client")?;

    let ctx = CallContext::new();
    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling verification");
            interrupt.cancel();
        }
    });

    let log = RequestLog::with_generated_id();
    let outcome = log
        .instrument(async {
            info!(
                addr = %verifier.tenantadm_addr(),
                timeout_ms = verifier.timeout().as_millis() as u64,
                "verifying tenant token"
            );
            let outcome = verifier.verify_token(&ctx, &token, &http).await;
            match outcome.error() {
                Some(err) => warn!(error = %err, "verification failed"),
                None => info!(outcome = outcome.kind(), "verification finished"),
            }
            outcome
        })
        .await;

    print_outcome(&outcome, args.json)?;
    Ok(exit_codes::for_outcome(&outcome))
}

fn print_outcome(outcome: &VerificationOutcome, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&Report::from_outcome(outcome))?);
        return Ok(());
    }

    match outcome.error() {
        Some(err) => println!("error: {}", err),
        None => println!("{}", outcome.kind()),
    }
    Ok(())
}

/// Token from the argument, `--token-file`, or stdin when the argument is `-`.
/// Trailing line breaks are dropped; anything else is passed through verbatim.
fn read_token(args: &VerifyArgs, stdin: &mut dyn Read) -> anyhow::Result<String> {
    let raw = match (&args.token, &args.token_file) {
        (_, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read token file {}", path.display()))?,
        (Some(token), None) if token == "-" => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read token from stdin")?;
            buf
        }
        (Some(token), None) => return Ok(token.clone()),
        (None, None) => anyhow::bail!("no token given (pass TOKEN, `-` for stdin, or --token-file)"),
    };

    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}
