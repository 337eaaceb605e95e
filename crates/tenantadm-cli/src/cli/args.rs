use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "tenantadm-verify",
    version,
    about = "Verify tenant tokens against the tenant administration service"
)]
pub struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ask tenantadm whether a tenant token is valid
    Verify(VerifyArgs),
    /// Print the version
    Version,
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Tenant token; `-` reads it from stdin
    #[arg(conflicts_with = "token_file")]
    pub token: Option<String>,

    /// Read the tenant token from a file
    #[arg(long)]
    pub token_file: Option<PathBuf>,

    /// tenantadm base address
    #[arg(long, env = "DEVICEAUTH_TENANTADM_ADDR")]
    pub addr: String,

    /// Per-call timeout (`2s`, `500ms`, or whole seconds) [default: 10s]
    #[arg(long, env = "DEVICEAUTH_TENANTADM_TIMEOUT", value_parser = parse_timeout_arg)]
    pub timeout: Option<Duration>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_timeout_arg(value: &str) -> Result<Duration, String> {
    tenantadm_client::config::parse_timeout(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_args_parse() {
        let cli = Cli::try_parse_from([
            "tenantadm-verify",
            "verify",
            "abc123",
            "--addr",
            "http://tenantadm",
            "--timeout",
            "2s",
            "--json",
        ])
        .unwrap();

        let Command::Verify(args) = cli.cmd else {
            panic!("expected verify subcommand");
        };
        assert_eq!(args.token.as_deref(), Some("abc123"));
        assert_eq!(args.addr, "http://tenantadm");
        assert_eq!(args.timeout, Some(Duration::from_secs(2)));
        assert!(args.json);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_token_and_token_file_conflict() {
        let res = Cli::try_parse_from([
            "tenantadm-verify",
            "verify",
            "abc123",
            "--token-file",
            "/tmp/token",
            "--addr",
            "http://tenantadm",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let res = Cli::try_parse_from([
            "tenantadm-verify",
            "verify",
            "abc123",
            "--addr",
            "http://tenantadm",
            "--timeout",
            "whenever",
        ]);
        assert!(res.is_err());
    }
}
