//! Tests for CLI subcommand parsing.

use clap::Parser;
use link_audit::config::{Cli, Command, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_serve_defaults() {
    let cli = Cli::try_parse_from(["link_audit", "serve"]).expect("serve parses");
    let config = cli.to_config();

    assert!(matches!(cli.command, Command::Serve { .. }));
    assert_eq!(config.bind_address, "127.0.0.1");
    assert_eq!(config.port, 5000);
    assert_eq!(config.max_concurrency, 20);
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.log_format, LogFormat::Plain);
}

#[test]
fn test_serve_with_options() {
    let cli = Cli::try_parse_from([
        "link_audit",
        "serve",
        "--bind",
        "0.0.0.0",
        "--port",
        "8080",
        "--max-concurrency",
        "50",
        "--log-format",
        "json",
    ])
    .expect("serve parses");
    let config = cli.to_config();

    assert_eq!(config.listen_address(), "0.0.0.0:8080");
    assert_eq!(config.max_concurrency, 50);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_check_with_output() {
    let cli = Cli::try_parse_from([
        "link_audit",
        "check",
        "urls.txt",
        "--output",
        "report.csv",
        "--timeout-seconds",
        "3",
        "--log-level",
        "debug",
    ])
    .expect("check parses");

    match &cli.command {
        Command::Check { file, output } => {
            assert_eq!(file, &PathBuf::from("urls.txt"));
            assert_eq!(output.as_deref(), Some(PathBuf::from("report.csv").as_path()));
        }
        other => panic!("expected check, got {other:?}"),
    }
    let config = cli.to_config();
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_check_from_stdin() {
    let cli = Cli::try_parse_from(["link_audit", "check", "-"]).expect("check parses");
    match cli.command {
        Command::Check { file, output } => {
            assert_eq!(file, PathBuf::from("-"));
            assert!(output.is_none());
        }
        other => panic!("expected check, got {other:?}"),
    }
}

#[test]
fn test_check_requires_file() {
    assert!(Cli::try_parse_from(["link_audit", "check"]).is_err());
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["link_audit"]).is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Cli::try_parse_from(["link_audit", "serve", "--log-level", "loud"]).is_err());
}

#[test]
fn test_out_of_range_concurrency_fails_validation() {
    let cli = Cli::try_parse_from(["link_audit", "serve", "--max-concurrency", "500"])
        .expect("parses; range is checked by validate");
    let err = cli.to_config().validate().unwrap_err();
    assert_eq!(err.field, "max_concurrency");
}
