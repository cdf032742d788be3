//! Configuration layering: defaults, then environment, then CLI flags.
//!
//! These tests mutate process environment variables, so they run serially.

use filmreel::cli::{parse_args, CliCommand};
use filmreel::startup::config::{ENV_LOG, ENV_TIMEOUT, ENV_URL};
use filmreel::startup::{AppConfig, DEFAULT_FILMS_URL, DEFAULT_LOG_FILTER, DEFAULT_TIMEOUT_SECS};
use serial_test::serial;

fn clear_env() {
    for key in [ENV_URL, ENV_TIMEOUT, ENV_LOG] {
        std::env::remove_var(key);
    }
}

fn overrides(args: &[&str]) -> filmreel::cli::CliOverrides {
    let argv = std::iter::once("filmreel").chain(args.iter().copied()).map(String::from);
    match parse_args(argv).unwrap() {
        CliCommand::Run(overrides) => overrides,
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AppConfig::from_env();
    assert_eq!(config.films_url, DEFAULT_FILMS_URL);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    clear_env();
    std::env::set_var(ENV_URL, "http://localhost:9000/films");
    std::env::set_var(ENV_TIMEOUT, "4");
    std::env::set_var(ENV_LOG, "filmreel=debug");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.films_url, "http://localhost:9000/films");
    assert_eq!(config.timeout_secs, 4);
    assert_eq!(config.log_filter, "filmreel=debug");
}

#[test]
#[serial]
fn test_invalid_environment_timeout_keeps_default() {
    clear_env();
    std::env::set_var(ENV_TIMEOUT, "soon");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
#[serial]
fn test_cli_flags_override_environment() {
    clear_env();
    std::env::set_var(ENV_URL, "http://env.example/films");
    std::env::set_var(ENV_TIMEOUT, "9");

    let config = overrides(&["--url", "http://cli.example/films"]).apply(AppConfig::from_env());
    clear_env();

    assert_eq!(config.films_url, "http://cli.example/films");
    // Flags that were not given leave the environment value alone.
    assert_eq!(config.timeout_secs, 9);
}
